use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

pub type CardId = u32;

/// A card field that the dataset writes as absent, a boolean, or an integer count.
///
/// `true` reads as 1 and `false`/`null`/absent as 0, so `Count(2)` on `midnight`
/// keeps the "two zone rows" meaning while still being truthy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Count(pub u32);

impl Count {
    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_present(self) -> bool {
        self.0 > 0
    }
}

impl<'de> Deserialize<'de> for Count {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Number(u32),
        }

        Ok(match Option::<Raw>::deserialize(deserializer)? {
            None => Count(0),
            Some(Raw::Flag(flag)) => Count(u32::from(flag)),
            Some(Raw::Number(n)) => Count(n),
        })
    }
}

/// The depth bands a card can be played in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Sunlight,
    Twilight,
    Midnight,
}

impl Zone {
    pub const ALL: [Zone; 3] = [Zone::Sunlight, Zone::Twilight, Zone::Midnight];

    pub fn as_str(self) -> &'static str {
        match self {
            Zone::Sunlight => "sunlight",
            Zone::Twilight => "twilight",
            Zone::Midnight => "midnight",
        }
    }
}

/// Special traits printed next to a card's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Trait {
    Bioluminescent,
    Camouflage,
    Electric,
    Predator,
    Venomous,
}

impl Trait {
    pub const ALL: [Trait; 5] = [
        Trait::Bioluminescent,
        Trait::Camouflage,
        Trait::Electric,
        Trait::Predator,
        Trait::Venomous,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Trait::Bioluminescent => "Bioluminescent",
            Trait::Camouflage => "Camouflage",
            Trait::Electric => "Electric",
            Trait::Predator => "Predator",
            Trait::Venomous => "Venomous",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeBucket {
    Small,
    Medium,
    Large,
}

impl SizeBucket {
    pub const ALL: [SizeBucket; 3] = [SizeBucket::Small, SizeBucket::Medium, SizeBucket::Large];

    /// Buckets a length in centimeters: below 50 is small, below 150 medium, the rest large.
    pub fn for_length(length: f64) -> Self {
        if length < 50.0 {
            SizeBucket::Small
        } else if length < 150.0 {
            SizeBucket::Medium
        } else {
            SizeBucket::Large
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SizeBucket::Small => "small",
            SizeBucket::Medium => "medium",
            SizeBucket::Large => "large",
        }
    }
}

macro_rules! impl_name_parsing {
    ($ty:ty, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| format!("Unknown {}: {}", $what, s))
            }
        }
    };
}

impl_name_parsing!(Zone, "zone");
impl_name_parsing!(Trait, "trait");
impl_name_parsing!(SizeBucket, "size");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityType {
    #[serde(rename = "when-played", alias = "WhenPlayed")]
    WhenPlayed,
    #[serde(rename = "if-activated", alias = "IfActivated")]
    IfActivated,
    #[serde(rename = "game-end", alias = "GameEnd")]
    GameEnd,
}

impl AbilityType {
    pub fn label(self) -> &'static str {
        match self {
            AbilityType::WhenPlayed => "WHEN PLAYED:",
            AbilityType::IfActivated => "IF ACTIVATED:",
            AbilityType::GameEnd => "GAME END:",
        }
    }
}

/// One printed card. Loaded once from the dataset and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    #[serde(default)]
    pub group: String,
    /// Centimeters.
    #[serde(default)]
    pub length: f64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub latin: String,
    #[serde(default)]
    pub description: String,
    /// Markup: plain text mixed with `[Icon]` tokens.
    #[serde(default)]
    pub ability: String,
    #[serde(default)]
    pub ability_type: Option<AbilityType>,
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default)]
    pub band: Option<String>,

    #[serde(default)]
    pub card_cost: Count,
    #[serde(default)]
    pub egg_cost: Count,
    #[serde(default)]
    pub young_cost: Count,
    #[serde(default)]
    pub consuming: Count,

    #[serde(default)]
    pub sunlight: Count,
    #[serde(default)]
    pub twilight: Count,
    #[serde(default)]
    pub midnight: Count,

    #[serde(default, rename = "Bioluminescent")]
    pub bioluminescent: Count,
    #[serde(default, rename = "Camouflage")]
    pub camouflage: Count,
    #[serde(default, rename = "Electric")]
    pub electric: Count,
    #[serde(default, rename = "Predator")]
    pub predator: Count,
    #[serde(default, rename = "Venomous")]
    pub venomous: Count,
}

impl Card {
    pub fn zone(&self, zone: Zone) -> Count {
        match zone {
            Zone::Sunlight => self.sunlight,
            Zone::Twilight => self.twilight,
            Zone::Midnight => self.midnight,
        }
    }

    pub fn occupies(&self, zone: Zone) -> bool {
        self.zone(zone).is_present()
    }

    pub fn trait_count(&self, t: Trait) -> Count {
        match t {
            Trait::Bioluminescent => self.bioluminescent,
            Trait::Camouflage => self.camouflage,
            Trait::Electric => self.electric,
            Trait::Predator => self.predator,
            Trait::Venomous => self.venomous,
        }
    }

    pub fn has_trait(&self, t: Trait) -> bool {
        self.trait_count(t).is_present()
    }

    pub fn size_bucket(&self) -> SizeBucket {
        SizeBucket::for_length(self.length)
    }
}
