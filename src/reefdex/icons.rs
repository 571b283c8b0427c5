//! The fixed set of icon names the game prints.
//!
//! [`IconVocabulary`] is a plain value handed to the sanitizer, the glyph
//! derivations and the renderer's resolver rather than a global lookup, so tests
//! can run against a reduced vocabulary.

use std::collections::BTreeSet;
use std::fmt;

/// Published icon names, in the order the game lists them.
pub const STANDARD_ICONS: [&str; 21] = [
    "DrawCard",
    "FishEgg",
    "FishHatch",
    "YoungFish",
    "SchoolFeederMove",
    "SchoolFish",
    "FishFromHand",
    "ConsumeFish",
    "Discard",
    "AllPlayers",
    "ArrowDown",
    "Estuary",
    "FishLengthSmall",
    "FishLengthMedium",
    "FishLengthLarge",
    "FlipperBlue",
    "FlipperGreen",
    "FlipperPurple",
    "PlayFishBottomRow",
    "Predator",
    "Wave",
];

/// The point-value icon. Markup treats it specially (see `markup::Segment::Points`).
pub const WAVE: &str = "Wave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconVocabulary {
    ordered: Vec<String>,
    lookup: BTreeSet<String>,
}

impl IconVocabulary {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ordered = Vec::new();
        let mut lookup = BTreeSet::new();
        for name in names {
            let name = name.into();
            if lookup.insert(name.clone()) {
                ordered.push(name);
            }
        }
        Self { ordered, lookup }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_ICONS)
    }

    pub fn is_valid(&self, name: &str) -> bool {
        self.lookup.contains(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl Default for IconVocabulary {
    fn default() -> Self {
        Self::standard()
    }
}

/// A reference to a vocabulary icon, optionally repeated or labelled with a quantity.
///
/// Only [`IconToken::new`] builds one, and it refuses names outside the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconToken {
    name: String,
    count: u32,
    quantity: Option<u32>,
}

impl IconToken {
    pub fn new(vocabulary: &IconVocabulary, name: &str) -> Option<Self> {
        vocabulary.is_valid(name).then(|| Self {
            name: name.to_string(),
            count: 1,
            quantity: None,
        })
    }

    /// Repeat the icon `count` times (cost icons).
    pub fn times(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Print `quantity` before the icon (point values).
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn quantity(&self) -> Option<u32> {
        self.quantity
    }
}

/// Writes the token back as markup, e.g. `2 [Wave]` or `[FishEgg][FishEgg]`.
impl fmt::Display for IconToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(q) = self.quantity {
            write!(f, "{} ", q)?;
        }
        for _ in 0..self.count {
            write!(f, "[{}]", self.name)?;
        }
        Ok(())
    }
}
