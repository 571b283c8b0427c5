//! An interactive search: one search box, one set of facet toggles, one result list.
//!
//! Every [`Action`] edits the state and re-runs the query, so the displayed
//! results always belong to the latest edit. Front-ends that evaluate
//! elsewhere (a debounced worker, say) can use [`Session::begin`] and
//! [`Session::accept`]: results tagged with an older [`Generation`] are
//! discarded rather than merged.

use crate::catalog::Catalog;
use crate::editor::TokenEditor;
use crate::icons::IconVocabulary;
use crate::index::TextIndex;
use crate::model::{CardId, SizeBucket, Trait, Zone};
use crate::query::Query;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The search box's new raw content.
    Type(String),
    InsertIcon(String),
    Backspace,
    Clear,
    SetGroup(String, bool),
    SetSize(SizeBucket, bool),
    SetZone(Zone, bool),
    SetTag(Trait, bool),
    /// Back to the default query with an empty search box.
    Reset,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

#[derive(Debug)]
pub struct Session<'a, I: TextIndex> {
    catalog: &'a Catalog<I>,
    editor: TokenEditor,
    query: Query,
    generation: Generation,
    results: Vec<CardId>,
}

impl<'a, I: TextIndex> Session<'a, I> {
    pub fn new(catalog: &'a Catalog<I>, vocabulary: IconVocabulary) -> Self {
        let query = Query::default();
        let results = catalog.evaluate(&query);
        Self {
            catalog,
            editor: TokenEditor::new(vocabulary),
            query,
            generation: Generation::default(),
            results,
        }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn editor(&self) -> &TokenEditor {
        &self.editor
    }

    pub fn results(&self) -> &[CardId] {
        &self.results
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Applies one edit and evaluates the resulting query in place.
    pub fn apply(&mut self, action: Action) -> &[CardId] {
        let generation = self.edit(action);
        let results = self.catalog.evaluate(&self.query);
        self.accept(generation, results);
        &self.results
    }

    /// Applies one edit without evaluating. Returns the generation the caller
    /// must hand back to [`Session::accept`] together with the results.
    pub fn begin(&mut self, action: Action) -> Generation {
        self.edit(action)
    }

    /// Stores `results` if they were computed for the latest edit.
    pub fn accept(&mut self, generation: Generation, results: Vec<CardId>) -> bool {
        if generation != self.generation {
            tracing::debug!(?generation, latest = ?self.generation, "discarding stale results");
            return false;
        }
        self.results = results;
        true
    }

    fn edit(&mut self, action: Action) -> Generation {
        match action {
            Action::Type(raw) => self.editor.on_change(&raw),
            Action::InsertIcon(name) => self.editor.insert_token(&name),
            Action::Backspace => self.editor.backspace(),
            Action::Clear => self.editor.clear(),
            Action::SetGroup(group, include) => {
                self.query.group.insert(group, include);
            }
            Action::SetSize(bucket, include) => {
                self.query.length.insert(bucket, include);
            }
            Action::SetZone(zone, allow) => {
                self.query.zones.insert(zone, allow);
            }
            Action::SetTag(t, require) => {
                self.query.tags.insert(t, require);
            }
            Action::Reset => {
                self.editor.clear();
                self.query = Query::default();
            }
        }
        self.query.text = self.editor.text().to_string();
        self.generation = Generation(self.generation.0 + 1);
        self.generation
    }
}
