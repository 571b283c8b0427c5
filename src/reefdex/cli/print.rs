use colored::Colorize;
use reefdex::api::{CmdMessage, MessageLevel};
use reefdex::config::{ReefdexConfig, KEYS};
use reefdex::facets::FacetCounts;
use reefdex::glyphs::{self, NameMark, ZoneRow};
use reefdex::icons::IconVocabulary;
use reefdex::markup::Segment;
use reefdex::model::Card;
use reefdex::render::{self, IconResolver};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 6;
const TAIL_WIDTH: usize = 16;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Width for list lines: the terminal's when known, else the configured one.
pub(super) fn line_width(config: &ReefdexConfig) -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(config.line_width)
}

pub(super) fn print_cards(cards: &[Card], width: usize) {
    for card in cards {
        let id = format!("{:>4}. ", card.id);
        let tail = format!("{} {}", card.group, card.size_bucket());

        let title = if card.latin.is_empty() {
            card.name.clone()
        } else {
            format!("{}  {}", card.name, card.latin)
        };

        let available = width.saturating_sub(ID_WIDTH + TAIL_WIDTH);
        let title_display = truncate_to_width(&title, available);
        let padding = available.saturating_sub(title_display.width());

        // Only the name is bold; the latin part is dimmed.
        let styled = match title_display.split_once("  ") {
            Some((name, latin)) => format!("{}  {}", name.bold(), latin.dimmed().italic()),
            None => title_display.bold().to_string(),
        };

        println!(
            "{}{}{}{:>width$}",
            id.yellow(),
            styled,
            " ".repeat(padding),
            tail.dimmed(),
            width = TAIL_WIDTH
        );
    }
}

pub(super) fn print_full_cards(
    cards: &[Card],
    resolver: &dyn IconResolver,
    vocabulary: &IconVocabulary,
) {
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!("{} {}", format!("#{}", card.id).yellow(), card.name.bold());
        if !card.latin.is_empty() {
            println!("{}", card.latin.italic());
        }
        let traits = glyphs::name_icons(card, vocabulary);
        if !traits.is_empty() {
            println!("traits   {}", render_name_marks(resolver, &traits));
        }
        println!("--------------------------------");

        let costs = glyphs::cost_icons(card, vocabulary);
        if !costs.is_empty() {
            println!("cost     {}", render::render_tokens(resolver, &costs));
        }
        if let Some(length) = glyphs::length_icon(card, vocabulary) {
            println!(
                "length   {} {} cm",
                render::render_tokens(resolver, &[length]),
                card.length
            );
        }
        let zones: Vec<String> = glyphs::zone_rows(card)
            .into_iter()
            .map(|row| match row {
                ZoneRow::Single(zone) => zone.to_string(),
                ZoneRow::BottomTwo => "midnight (two rows)".to_string(),
            })
            .collect();
        if !zones.is_empty() {
            println!("zones    {}", zones.join(", "));
        }
        if let Some(points) = glyphs::points_icon(card, vocabulary) {
            println!("points   {}", render::render_tokens(resolver, &[points]));
        }

        let ability = render::render_ability(resolver, card);
        if !ability.is_empty() {
            println!();
            println!("{}", ability);
        }
        if !card.description.is_empty() {
            println!();
            println!("{}", card.description.dimmed());
        }
    }
}

fn render_name_marks(resolver: &dyn IconResolver, marks: &[NameMark]) -> String {
    marks
        .iter()
        .map(|mark| match mark {
            NameMark::Icon(token) => render::render_tokens(resolver, std::slice::from_ref(token)),
            NameMark::Label(t, 1) => t.to_string(),
            NameMark::Label(t, n) => format!("{} x{}", t, n),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub(super) fn print_segments(segments: &[Segment], depth: usize) {
    let indent = "  ".repeat(depth);
    for segment in segments {
        match segment {
            Segment::Text(text) => println!("{}{} {:?}", indent, "Text".cyan(), text),
            Segment::Icon(name) => println!("{}{} {}", indent, "Icon".green(), name),
            Segment::Points(label) => println!("{}{} {:?}", indent, "Points".yellow(), label),
            Segment::Row(children) => {
                println!("{}{}", indent, "Row".magenta());
                print_segments(children, depth + 1);
            }
        }
    }
}

pub(super) fn print_icons(names: &[String], resolver: &dyn IconResolver) {
    for name in names {
        let glyph = resolver.resolve(name).map(|h| h.glyph).unwrap_or_default();
        println!("{:<20} {}", name, glyph);
    }
}

pub(super) fn print_counts(counts: &FacetCounts) {
    println!("{} {}", "cards".bold(), counts.total);

    fn section<K: std::fmt::Display>(title: &str, entries: impl Iterator<Item = (K, usize)>) {
        let line: Vec<String> = entries.map(|(k, n)| format!("{} {}", k, n)).collect();
        if !line.is_empty() {
            println!("{:<8} {}", title.dimmed(), line.join(", "));
        }
    }

    section("group", counts.groups.iter().map(|(k, n)| (k, *n)));
    section("size", counts.sizes.iter().map(|(k, n)| (k, *n)));
    section("zone", counts.zones.iter().map(|(k, n)| (k, *n)));
    section("trait", counts.traits.iter().map(|(k, n)| (k, *n)));
}

pub(super) fn print_config(config: &ReefdexConfig) {
    for key in KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

pub(super) fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("Cod", 10), "Cod");
    }

    #[test]
    fn long_text_gets_an_ellipsis() {
        let out = truncate_to_width("Great White Shark", 8);
        assert_eq!(out, "Great W…");
        assert_eq!(out.width(), 8);
    }

    #[test]
    fn name_marks_mix_glyphs_and_labels() {
        let vocab = IconVocabulary::standard();
        let card = Card {
            predator: reefdex::model::Count(1),
            electric: reefdex::model::Count(2),
            ..Default::default()
        };
        let marks = glyphs::name_icons(&card, &vocab);
        let resolver = render::GlyphResolver::new(vocab);
        assert_eq!(render_name_marks(&resolver, &marks), "‹Predator› Electric x2");
    }

    #[test]
    fn wide_chars_count_double() {
        assert_eq!(truncate_to_width("魚魚魚魚", 5), "魚魚…");
    }
}
