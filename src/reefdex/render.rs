//! Turning parsed markup into display text.
//!
//! The renderer only needs an [`IconResolver`] to map icon names to something
//! drawable. Names the resolver does not know are shown as `[?Name]`, so a typo
//! in a dataset is visible instead of silently vanishing.

use crate::editor::EditorSegment;
use crate::icons::{IconToken, IconVocabulary, WAVE};
use crate::markup::Segment;
use crate::model::Card;

/// Something a front-end can draw in place of an icon token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconHandle {
    pub name: String,
    pub glyph: String,
}

pub trait IconResolver {
    fn resolve(&self, name: &str) -> Option<IconHandle>;
}

/// Resolves vocabulary names to short terminal glyphs.
#[derive(Debug, Clone, Default)]
pub struct GlyphResolver {
    vocabulary: IconVocabulary,
}

impl GlyphResolver {
    pub fn new(vocabulary: IconVocabulary) -> Self {
        Self { vocabulary }
    }
}

impl IconResolver for GlyphResolver {
    fn resolve(&self, name: &str) -> Option<IconHandle> {
        if !self.vocabulary.is_valid(name) {
            return None;
        }
        let glyph = if name == WAVE {
            "≋".to_string()
        } else {
            format!("‹{}›", name)
        };
        Some(IconHandle {
            name: name.to_string(),
            glyph,
        })
    }
}

fn icon_text(resolver: &dyn IconResolver, name: &str) -> String {
    match resolver.resolve(name) {
        Some(handle) => handle.glyph,
        None => format!("[?{}]", name),
    }
}

fn render_segment(resolver: &dyn IconResolver, segment: &Segment) -> String {
    match segment {
        Segment::Text(text) => text.clone(),
        Segment::Icon(name) => icon_text(resolver, name),
        Segment::Points(label) if label.is_empty() => icon_text(resolver, WAVE),
        Segment::Points(label) => format!("{} {}", label, icon_text(resolver, WAVE)),
        Segment::Row(children) => children
            .iter()
            .map(|c| render_segment(resolver, c))
            .collect::<Vec<_>>()
            .join(" + "),
    }
}

/// Renders segments on one line, separated by spaces except before closing punctuation.
pub fn render_segments(resolver: &dyn IconResolver, segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        let piece = render_segment(resolver, segment);
        let tight = piece.starts_with([',', '.', ':', ';', '!', '?', ')']) || out.ends_with('(');
        if !out.is_empty() && !tight {
            out.push(' ');
        }
        out.push_str(&piece);
    }
    out
}

/// Renders what the search box shows. Text runs are kept verbatim.
pub fn render_editor(resolver: &dyn IconResolver, segments: &[EditorSegment]) -> String {
    segments
        .iter()
        .map(|s| match s {
            EditorSegment::Text(text) => text.clone(),
            EditorSegment::Icon(name) => icon_text(resolver, name),
        })
        .collect()
}

pub fn render_tokens(resolver: &dyn IconResolver, tokens: &[IconToken]) -> String {
    tokens
        .iter()
        .map(|t| {
            let glyph = icon_text(resolver, t.name());
            let repeated = glyph.repeat(t.count() as usize);
            match t.quantity() {
                Some(q) => format!("{} {}", q, repeated),
                None => repeated,
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The ability line as printed on the card: header label, then the rendered markup.
pub fn render_ability(resolver: &dyn IconResolver, card: &Card) -> String {
    let body = render_segments(resolver, &crate::markup::parse(&card.ability));
    match card.ability_type {
        Some(kind) if body.is_empty() => kind.label().to_string(),
        Some(kind) => format!("{} {}", kind.label(), body),
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::parse;
    use crate::model::AbilityType;

    fn resolver() -> GlyphResolver {
        GlyphResolver::default()
    }

    #[test]
    fn resolves_only_vocabulary_names() {
        let r = resolver();
        assert_eq!(r.resolve("Predator").unwrap().glyph, "‹Predator›");
        assert_eq!(r.resolve("Wave").unwrap().glyph, "≋");
        assert!(r.resolve("Bogus").is_none());
    }

    #[test]
    fn renders_text_icons_and_points() {
        let line = render_segments(&resolver(), &parse("Move 1 [FishEgg], gain 2 [Wave]"));
        assert_eq!(line, "Move 1 ‹FishEgg›, gain 2 ≋");

        let line = render_segments(&resolver(), &parse("3 [Wave]"));
        assert_eq!(line, "3 ≋");
    }

    #[test]
    fn renders_rows_and_unknown_icons() {
        let line = render_segments(&resolver(), &parse("[DrawCard] + [Nope]"));
        assert_eq!(line, "‹DrawCard› + [?Nope]");
    }

    #[test]
    fn parentheses_hug_their_content() {
        let line = render_segments(&resolver(), &parse("(or [ArrowDown] one row)"));
        assert_eq!(line, "(or ‹ArrowDown› one row)");
    }

    #[test]
    fn editor_text_is_kept_verbatim() {
        let segments = crate::editor::render("big [Predator]  fish");
        assert_eq!(render_editor(&resolver(), &segments), "big ‹Predator›  fish");
    }

    #[test]
    fn ability_gets_its_header() {
        let card = Card {
            ability: "[DrawCard] + [Discard]".into(),
            ability_type: Some(AbilityType::IfActivated),
            ..Default::default()
        };
        assert_eq!(
            render_ability(&resolver(), &card),
            "IF ACTIVATED: ‹DrawCard› + ‹Discard›"
        );
    }
}
