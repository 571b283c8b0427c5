//! # Card Index
//!
//! Full-text lookup from a raw query string to the set of matching card ids.
//!
//! The rest of the crate only sees the [`TextIndex`] trait, so the relevance
//! machinery can be swapped, and tests can plug in a deterministic stub.
//!
//! ## Matching
//!
//! [`CardIndex`] lowercases each card's indexed fields (name, latin name and the
//! raw ability markup by default) into one haystack. A query is split on
//! whitespace and a card matches when every term is a substring of its
//! haystack. Bracket tokens are ordinary text here, so `[Predator]` finds
//! abilities that literally contain `[Predator]`.
//!
//! An empty (or whitespace-only) query is not a filter: it returns every id.
//!
//! ## Building in the background
//!
//! [`BackgroundIndex`] builds a [`CardIndex`] on a worker thread. Until the
//! index is published, searches degrade to "every id" instead of failing.

use crate::model::{Card, CardId};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Instant;

/// Anything that can turn query text into a set of card ids.
pub trait TextIndex {
    fn search(&self, text: &str) -> BTreeSet<CardId>;
}

/// Card fields that can be fed to the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexField {
    Name,
    Latin,
    Ability,
    Description,
}

impl IndexField {
    pub const DEFAULT: [IndexField; 3] = [IndexField::Name, IndexField::Latin, IndexField::Ability];

    fn read(self, card: &Card) -> &str {
        match self {
            IndexField::Name => &card.name,
            IndexField::Latin => &card.latin,
            IndexField::Ability => &card.ability,
            IndexField::Description => &card.description,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IndexField::Name => "name",
            IndexField::Latin => "latin",
            IndexField::Ability => "ability",
            IndexField::Description => "description",
        }
    }
}

impl fmt::Display for IndexField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndexField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(IndexField::Name),
            "latin" => Ok(IndexField::Latin),
            "ability" => Ok(IndexField::Ability),
            "description" => Ok(IndexField::Description),
            other => Err(format!("Unknown index field: {}", other)),
        }
    }
}

/// One card's searchable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDocument {
    pub id: CardId,
    pub text: String,
}

impl IndexDocument {
    pub fn from_card(card: &Card, fields: &[IndexField]) -> Self {
        let text = fields
            .iter()
            .map(|f| f.read(card))
            .collect::<Vec<_>>()
            .join("\n");
        Self { id: card.id, text }
    }
}

/// The in-memory full-text index.
#[derive(Debug, Clone, Default)]
pub struct CardIndex {
    // Kept in ascending id order.
    documents: Vec<(CardId, String)>,
}

impl CardIndex {
    pub fn build(mut documents: Vec<IndexDocument>) -> Self {
        let started = Instant::now();
        documents.sort_by_key(|d| d.id);
        let documents: Vec<_> = documents
            .into_iter()
            .map(|d| (d.id, d.text.to_lowercase()))
            .collect();
        tracing::debug!(
            documents = documents.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "built card index"
        );
        Self { documents }
    }

    pub fn from_cards<'a>(
        cards: impl IntoIterator<Item = &'a Card>,
        fields: &[IndexField],
    ) -> Self {
        Self::build(
            cards
                .into_iter()
                .map(|c| IndexDocument::from_card(c, fields))
                .collect(),
        )
    }

    pub fn ids(&self) -> BTreeSet<CardId> {
        self.documents.iter().map(|(id, _)| *id).collect()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl TextIndex for CardIndex {
    fn search(&self, text: &str) -> BTreeSet<CardId> {
        let terms: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();
        if terms.is_empty() {
            return self.ids();
        }
        self.documents
            .iter()
            .filter(|(_, haystack)| terms.iter().all(|t| haystack.contains(t.as_str())))
            .map(|(id, _)| *id)
            .collect()
    }
}

/// A [`CardIndex`] that is still being built on another thread.
pub struct BackgroundIndex {
    cell: Arc<OnceCell<CardIndex>>,
    all_ids: BTreeSet<CardId>,
    worker: Option<JoinHandle<()>>,
}

impl BackgroundIndex {
    pub fn spawn(documents: Vec<IndexDocument>) -> Self {
        let all_ids = documents.iter().map(|d| d.id).collect();
        let cell = Arc::new(OnceCell::new());
        let publish = Arc::clone(&cell);
        let worker = std::thread::spawn(move || {
            let _ = publish.set(CardIndex::build(documents));
        });
        Self {
            cell,
            all_ids,
            worker: Some(worker),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Blocks until the index is published.
    pub fn wait(&mut self) -> Option<&CardIndex> {
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::warn!("card index worker panicked; searches will match everything");
            }
        }
        self.cell.get()
    }

    #[cfg(test)]
    fn unbuilt(all_ids: BTreeSet<CardId>) -> Self {
        Self {
            cell: Arc::new(OnceCell::new()),
            all_ids,
            worker: None,
        }
    }
}

impl TextIndex for BackgroundIndex {
    fn search(&self, text: &str) -> BTreeSet<CardId> {
        match self.cell.get() {
            Some(index) => index.search(text),
            None => {
                tracing::debug!("card index not ready; matching every card");
                self.all_ids.clone()
            }
        }
    }
}

impl fmt::Debug for BackgroundIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackgroundIndex")
            .field("ready", &self.is_ready())
            .field("cards", &self.all_ids.len())
            .finish()
    }
}
