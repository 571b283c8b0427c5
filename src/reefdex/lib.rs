//! # Reefdex Architecture
//!
//! Reefdex is a **UI-agnostic card search library** for a fish-themed card game
//! encyclopedia. The CLI is one client of it. A web page or a GUI could be another.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (id strings → CardIds)                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per operation, returning CmdResult          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core                                                       │
//! │  - markup / editor: icon-token text, parsed and edited      │
//! │  - catalog: corpus + TextIndex + facet filter               │
//! │  - session: search box and toggles, re-evaluated per edit   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Icon Tokens
//!
//! Card abilities and the search box share one markup: plain text with
//! `[IconName]` tokens drawn from a fixed [`icons::IconVocabulary`]. The
//! [`markup`] parser turns ability text into segments (text, icons, point
//! expressions, icon rows). The [`editor`] keeps the search box clean: unknown
//! tokens are stripped on every change, and backspace removes a whole token.
//!
//! ## Query Evaluation
//!
//! A [`query::Query`] is free text plus facet toggles. Evaluation is
//! `text search ∩ facets`, where blank text matches every card. The facets do
//! not share one rule: group and size toggles include, zone toggles exclude
//! when switched off, and trait toggles require when switched on. See [`facets`].
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Diagnostics go through `tracing`; the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`catalog`]: Corpus and index together; query evaluation
//! - [`session`]: Interactive search state
//! - [`markup`]: Ability text parser
//! - [`editor`]: Token-aware search box
//! - [`icons`]: The icon vocabulary
//! - [`index`]: Full-text index, eager or built in the background
//! - [`facets`]: Facet predicates and counts
//! - [`query`]: The query type
//! - [`render`]: Segments to display text
//! - [`glyphs`]: Icons derived from a card's numbers
//! - [`model`], [`corpus`]: Card data
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod corpus;
pub mod editor;
pub mod error;
pub mod facets;
pub mod glyphs;
pub mod icons;
pub mod index;
pub mod markup;
pub mod model;
pub mod query;
pub mod render;
pub mod session;
