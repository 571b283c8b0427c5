//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every reefdex operation, whichever front-end drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., card id strings to [`CardId`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! Configuration is the exception: `commands::config::run` works on the config
//! dir directly, since a broken `cards_path` would stop [`ReefdexApi::open`].
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs` and the core modules
//! - **I/O on the terminal**: No stdout, stderr, or formatting
//!
//! ## Generic Over TextIndex
//!
//! `ReefdexApi<I: TextIndex>` is generic over the full-text index:
//! - One-shot commands: `ReefdexApi<CardIndex>`, built up front
//! - Interactive browsing: `ReefdexApi<BackgroundIndex>`, built on a worker thread
//! - Testing: a stub index with canned answers
//!
//! ## Testing Strategy
//!
//! API tests check dispatch and input normalization. Command logic is tested
//! in the command modules.

use crate::catalog::Catalog;
use crate::commands;
use crate::config::ReefdexConfig;
use crate::corpus::Corpus;
use crate::error::{ReefdexError, Result};
use crate::icons::IconVocabulary;
use crate::index::{BackgroundIndex, CardIndex, TextIndex};
use crate::model::CardId;
use crate::query::Query;
use crate::session::Session;
use std::path::Path;

/// The main API facade for reefdex operations.
pub struct ReefdexApi<I: TextIndex> {
    catalog: Catalog<I>,
    vocabulary: IconVocabulary,
}

impl ReefdexApi<CardIndex> {
    /// Loads the configured corpus and indexes it before returning.
    pub fn open(config_dir: &Path) -> Result<Self> {
        let config = ReefdexConfig::load(config_dir)?;
        let corpus = load_corpus(&config)?;
        let catalog = Catalog::indexed(corpus, &config.index_fields);
        Ok(Self::new(catalog))
    }
}

impl ReefdexApi<BackgroundIndex> {
    /// Loads the configured corpus and indexes it in the background.
    pub fn open_background(config_dir: &Path) -> Result<Self> {
        let config = ReefdexConfig::load(config_dir)?;
        let corpus = load_corpus(&config)?;
        let catalog = Catalog::indexing(corpus, &config.index_fields);
        Ok(Self::new(catalog))
    }
}

impl<I: TextIndex> ReefdexApi<I> {
    pub fn new(catalog: Catalog<I>) -> Self {
        Self {
            catalog,
            vocabulary: IconVocabulary::standard(),
        }
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.catalog)
    }

    pub fn search(&self, query: &Query) -> Result<commands::CmdResult> {
        commands::search::run(&self.catalog, query)
    }

    pub fn view<S: AsRef<str>>(&self, ids: &[S]) -> Result<commands::CmdResult> {
        let ids = parse_ids(ids)?;
        commands::view::run(&self.catalog, &ids)
    }

    pub fn parse(&self, text: &str) -> Result<commands::CmdResult> {
        commands::parse::run(text)
    }

    pub fn sanitize(&self, text: &str) -> Result<commands::CmdResult> {
        commands::sanitize::run(&self.vocabulary, text)
    }

    pub fn icons(&self) -> Result<commands::CmdResult> {
        commands::icons::run(&self.vocabulary)
    }

    pub fn stats(&self, query: &Query) -> Result<commands::CmdResult> {
        commands::stats::run(&self.catalog, query)
    }

    /// Starts an interactive session over this API's catalog.
    pub fn session(&self) -> Session<'_, I> {
        Session::new(&self.catalog, self.vocabulary.clone())
    }

    pub fn catalog(&self) -> &Catalog<I> {
        &self.catalog
    }

    pub fn vocabulary(&self) -> &IconVocabulary {
        &self.vocabulary
    }
}

/// The corpus named by `config`, or the embedded one.
pub fn load_corpus(config: &ReefdexConfig) -> Result<Corpus> {
    match &config.cards_path {
        Some(path) => Corpus::load(path),
        None => Corpus::embedded(),
    }
}

fn parse_ids<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<CardId>> {
    inputs
        .iter()
        .map(|s| {
            let s = s.as_ref().trim();
            s.trim_start_matches('#')
                .parse::<CardId>()
                .map_err(|_| ReefdexError::Api(format!("Invalid card id: {}", s)))
        })
        .collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
