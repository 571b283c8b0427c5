//! The search box's text model.
//!
//! The buffer is one `String` holding both plain characters and literal
//! `[Icon]` tokens. A front-end draws the tokens as glyphs, but there is no
//! second copy to keep in sync: [`render`] derives the display from the buffer.
//!
//! Two rules keep tokens atomic:
//! - every change goes through [`sanitize`], which deletes any `[X]` whose `X`
//!   is not in the vocabulary, so an invalid token never survives an edit;
//! - [`backspace`] right after a token removes the whole token.
//!
//! Cursor positions are counted in chars, not bytes.

use crate::icons::IconVocabulary;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]").expect("token pattern"));
static TRAILING_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\[\]]+\]$").expect("trailing token pattern"));

/// What the search box displays: plain runs and icon glyphs, in buffer order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorSegment {
    Text(String),
    Icon(String),
}

/// Deletes every bracketed token whose name is not in `vocabulary`.
pub fn sanitize(vocabulary: &IconVocabulary, raw: &str) -> String {
    TOKEN
        .replace_all(raw, |caps: &Captures| {
            if vocabulary.is_valid(&caps[1]) {
                caps[0].to_string()
            } else {
                tracing::debug!(token = &caps[0], "dropping unknown icon token");
                String::new()
            }
        })
        .into_owned()
}

/// Appends `[name]`. Validity is left to the next [`sanitize`].
pub fn insert_token(buffer: &str, name: &str) -> String {
    format!("{}[{}]", buffer, name)
}

/// Backward delete at `cursor`.
///
/// If the text before the cursor ends in a complete token, the whole token goes
/// and the cursor lands where it started. Otherwise one char is removed.
pub fn backspace(buffer: &str, cursor: usize) -> (String, usize) {
    let cursor = cursor.min(buffer.chars().count());
    if cursor == 0 {
        return (buffer.to_string(), 0);
    }

    let split = byte_offset(buffer, cursor);
    let (before, after) = buffer.split_at(split);

    if let Some(token) = TRAILING_TOKEN.find(before) {
        let removed = token.as_str().chars().count();
        let edited = format!("{}{}", &before[..token.start()], after);
        return (edited, cursor - removed);
    }

    let prev = byte_offset(buffer, cursor - 1);
    (format!("{}{}", &buffer[..prev], after), cursor - 1)
}

/// Splits the buffer into alternating text runs and icons. Empty runs are skipped.
///
/// Unlike `markup::parse` there is no row or points grouping here.
pub fn render(buffer: &str) -> Vec<EditorSegment> {
    let mut segments = Vec::new();
    let mut last = 0;
    for caps in TOKEN.captures_iter(buffer) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            segments.push(EditorSegment::Text(buffer[last..whole.start()].to_string()));
        }
        segments.push(EditorSegment::Icon(name.as_str().to_string()));
        last = whole.end();
    }
    if last < buffer.len() {
        segments.push(EditorSegment::Text(buffer[last..].to_string()));
    }
    segments
}

fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i)
}

/// A search box: buffer, cursor and the vocabulary it validates against.
#[derive(Debug, Clone)]
pub struct TokenEditor {
    vocabulary: IconVocabulary,
    buffer: String,
    cursor: usize,
}

impl TokenEditor {
    pub fn new(vocabulary: IconVocabulary) -> Self {
        Self {
            vocabulary,
            buffer: String::new(),
            cursor: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn vocabulary(&self) -> &IconVocabulary {
        &self.vocabulary
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.buffer.chars().count());
    }

    /// Replaces the buffer with a user edit, stripping unknown tokens.
    /// The cursor moves to the end.
    pub fn on_change(&mut self, raw: &str) {
        self.buffer = sanitize(&self.vocabulary, raw);
        self.cursor = self.buffer.chars().count();
    }

    /// The icon-button path: append the token, then sanitize like any edit.
    pub fn insert_token(&mut self, name: &str) {
        let raw = insert_token(&self.buffer, name);
        self.on_change(&raw);
    }

    pub fn backspace(&mut self) {
        let (buffer, cursor) = backspace(&self.buffer, self.cursor);
        self.buffer = buffer;
        self.cursor = cursor;
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn segments(&self) -> Vec<EditorSegment> {
        render(&self.buffer)
    }
}
