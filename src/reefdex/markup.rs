//! Ability-text markup.
//!
//! Card abilities are written as plain text with bracketed icon tokens:
//!
//! ```text
//! Move 1 [FishEgg] to the estuary
//! [DrawCard] + [Discard]
//! 3 [Wave]
//! ```
//!
//! [`parse`] splits such a string into [`Segment`]s. The scan runs left to right
//! and, at every position, tries a fixed list of matchers in priority order:
//!
//! 1. **row**: two or more `[Icon]` tokens joined by `+` (top level only)
//! 2. **points**: digits, an optional space, then `[Wave]`
//! 3. **plain**: a run of letters, digits, spaces, parentheses and `+`
//! 4. **icon**: a single `[Icon]` token
//!
//! Anything no matcher accepts (punctuation, stray brackets) is collected into a
//! text fragment of its own. A row's interior is parsed again with rows
//! disabled, so rows never nest.
//!
//! The parser does not consult the icon vocabulary: an unknown `[Name]` is still
//! an [`Segment::Icon`], and it is up to the renderer to resolve it.

use crate::icons::WAVE;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, trimmed.
    Text(String),
    /// A single inline icon, by name.
    Icon(String),
    /// A label printed in front of the wave (point) icon. Empty for a bare `[Wave]`.
    Points(String),
    /// Icons grouped on one line. Never contains another `Row`.
    Row(Vec<Segment>),
}

impl Segment {
    /// Writes the segment back as markup. Whitespace may differ from the source.
    pub fn to_markup(&self) -> String {
        match self {
            Segment::Text(text) => text.clone(),
            Segment::Icon(name) => format!("[{}]", name),
            Segment::Points(label) if label.is_empty() => format!("[{}]", WAVE),
            Segment::Points(label) => format!("{} [{}]", label, WAVE),
            Segment::Row(children) => children
                .iter()
                .map(Segment::to_markup)
                .collect::<Vec<_>>()
                .join(" + "),
        }
    }
}

pub fn to_markup(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(Segment::to_markup)
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Row,
    Points,
    Plain,
    Icon,
}

struct Matcher {
    class: Class,
    pattern: Regex,
}

impl Matcher {
    fn new(class: Class, pattern: &str) -> Self {
        Self {
            class,
            pattern: Regex::new(pattern).expect("markup matcher pattern"),
        }
    }
}

/// Priority order matters: points must be tried before plain, or the plain
/// matcher would swallow the leading digits.
static MATCHERS: Lazy<[Matcher; 4]> = Lazy::new(|| {
    [
        Matcher::new(Class::Row, r"^\[[A-Za-z0-9_]+\](?:\s*\+\s*\[[A-Za-z0-9_]+\])+"),
        Matcher::new(Class::Points, r"^[0-9]+ ?\[Wave\]"),
        Matcher::new(Class::Plain, r"^[a-zA-Z0-9 ()+]+"),
        Matcher::new(Class::Icon, r"^\[[A-Za-z0-9_]+\]"),
    ]
});

/// Parses ability markup with row detection enabled.
pub fn parse(text: &str) -> Vec<Segment> {
    parse_with(text, true)
}

pub fn parse_with(text: &str, allow_rows: bool) -> Vec<Segment> {
    fragments(text, allow_rows)
        .into_iter()
        .filter_map(|(class, fragment)| classify(class, fragment))
        .collect()
}

/// Splits `text` into non-empty fragments, tagging those a matcher accepted.
fn fragments(text: &str, allow_rows: bool) -> Vec<(Option<Class>, &str)> {
    let mut out = Vec::new();
    let mut pos = 0;
    let mut unmatched_from = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        let hit = MATCHERS
            .iter()
            .filter(|m| allow_rows || m.class != Class::Row)
            .find_map(|m| m.pattern.find(rest).map(|found| (m.class, found.end())));

        match hit {
            Some((class, len)) if len > 0 => {
                if unmatched_from < pos {
                    out.push((None, &text[unmatched_from..pos]));
                }
                out.push((Some(class), &rest[..len]));
                pos += len;
                unmatched_from = pos;
            }
            _ => pos += rest.chars().next().map_or(1, char::len_utf8),
        }
    }

    if unmatched_from < text.len() {
        out.push((None, &text[unmatched_from..]));
    }
    out
}

fn classify(class: Option<Class>, fragment: &str) -> Option<Segment> {
    match class {
        Some(Class::Row) => Some(Segment::Row(row_children(fragment))),
        Some(Class::Points) => {
            let marker = format!("[{}]", WAVE);
            let label = fragment.split(marker.as_str()).next().unwrap_or_default();
            Some(Segment::Points(label.trim().to_string()))
        }
        Some(Class::Icon) => {
            let name = &fragment[1..fragment.len() - 1];
            if name == WAVE {
                Some(Segment::Points(String::new()))
            } else {
                Some(Segment::Icon(name.to_string()))
            }
        }
        Some(Class::Plain) | None => {
            let trimmed = fragment.trim();
            (!trimmed.is_empty()).then(|| Segment::Text(trimmed.to_string()))
        }
    }
}

/// The `+` joiners are layout, not content, so they are dropped from the row.
fn row_children(fragment: &str) -> Vec<Segment> {
    parse_with(fragment, false)
        .into_iter()
        .filter(|segment| !matches!(segment, Segment::Text(t) if t == "+"))
        .collect()
}
