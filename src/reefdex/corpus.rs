//! The card dataset.
//!
//! A [`Corpus`] is read once at startup, either from the dataset compiled into
//! the binary or from a JSON file named in the config, and is never mutated.
//! Cards are kept ordered by id, which is also the order the index sees them in.

use crate::error::{ReefdexError, Result};
use crate::model::{Card, CardId};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

const EMBEDDED_CARDS: &str = include_str!("../../data/cards.json");

#[derive(Debug, Clone, Default)]
pub struct Corpus {
    cards: BTreeMap<CardId, Card>,
}

impl Corpus {
    /// Rejects datasets that reuse an id.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        let mut by_id = BTreeMap::new();
        for card in cards {
            let id = card.id;
            if by_id.insert(id, card).is_some() {
                return Err(ReefdexError::DuplicateCard(id));
            }
        }
        Ok(Self { cards: by_id })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        Self::from_cards(cards)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let corpus = Self::from_json(&content)?;
        tracing::debug!(path = %path.display(), cards = corpus.len(), "loaded corpus");
        Ok(corpus)
    }

    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CARDS)
    }

    pub fn get(&self, id: CardId) -> Result<&Card> {
        self.cards.get(&id).ok_or(ReefdexError::CardNotFound(id))
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    pub fn by_id(&self) -> &BTreeMap<CardId, Card> {
        &self.cards
    }

    pub fn ids(&self) -> BTreeSet<CardId> {
        self.cards.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
