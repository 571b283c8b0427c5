use crate::config::ReefdexConfig;
use crate::facets::FacetCounts;
use crate::markup::Segment;
use crate::model::Card;

pub mod config;
pub mod icons;
pub mod list;
pub mod parse;
pub mod sanitize;
pub mod search;
pub mod stats;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_cards: Vec<Card>,
    pub segments: Vec<Segment>,
    pub text: Option<String>,
    pub counts: Option<FacetCounts>,
    pub icons: Vec<String>,
    pub config: Option<ReefdexConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_cards(mut self, cards: Vec<Card>) -> Self {
        self.listed_cards = cards;
        self
    }

    pub fn with_segments(mut self, segments: Vec<Segment>) -> Self {
        self.segments = segments;
        self
    }

    pub fn with_text(mut self, text: String) -> Self {
        self.text = Some(text);
        self
    }

    pub fn with_counts(mut self, counts: FacetCounts) -> Self {
        self.counts = Some(counts);
        self
    }

    pub fn with_icons(mut self, icons: Vec<String>) -> Self {
        self.icons = icons;
        self
    }

    pub fn with_config(mut self, config: ReefdexConfig) -> Self {
        self.config = Some(config);
        self
    }
}
