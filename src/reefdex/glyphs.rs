//! Icon lists derived from a card's numeric and trait fields, for display next to the
//! ability text. Only vocabulary names become tokens.

use crate::icons::{IconToken, IconVocabulary, WAVE};
use crate::model::{Card, SizeBucket, Trait, Zone};

/// One token per non-zero cost field, repeated by the field's count.
pub fn cost_icons(card: &Card, vocabulary: &IconVocabulary) -> Vec<IconToken> {
    [
        (card.card_cost, "DrawCard"),
        (card.egg_cost, "FishEgg"),
        (card.young_cost, "YoungFish"),
        (card.consuming, "ConsumeFish"),
    ]
    .into_iter()
    .filter(|(count, _)| count.is_present())
    .filter_map(|(count, name)| IconToken::new(vocabulary, name).map(|t| t.times(count.get())))
    .collect()
}

/// Order in which traits sit next to the card's name.
const NAME_TRAITS: [Trait; 5] = [
    Trait::Predator,
    Trait::Bioluminescent,
    Trait::Camouflage,
    Trait::Electric,
    Trait::Venomous,
];

/// A trait shown beside a card's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameMark {
    Icon(IconToken),
    /// The vocabulary has no icon for this trait; shown by name.
    Label(Trait, u32),
}

pub fn name_icons(card: &Card, vocabulary: &IconVocabulary) -> Vec<NameMark> {
    NAME_TRAITS
        .into_iter()
        .filter(|t| card.has_trait(*t))
        .map(|t| {
            let count = card.trait_count(t).get();
            match IconToken::new(vocabulary, t.as_str()) {
                Some(token) => NameMark::Icon(token.times(count)),
                None => NameMark::Label(t, count),
            }
        })
        .collect()
}

pub fn length_icon(card: &Card, vocabulary: &IconVocabulary) -> Option<IconToken> {
    let name = match card.size_bucket() {
        SizeBucket::Small => "FishLengthSmall",
        SizeBucket::Medium => "FishLengthMedium",
        SizeBucket::Large => "FishLengthLarge",
    };
    IconToken::new(vocabulary, name)
}

pub fn points_icon(card: &Card, vocabulary: &IconVocabulary) -> Option<IconToken> {
    let points = card.points?;
    IconToken::new(vocabulary, WAVE).map(|t| t.with_quantity(points))
}

/// How a card sits on the board's depth rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneRow {
    Single(Zone),
    /// A midnight value of 2: the card spans the bottom two rows.
    BottomTwo,
}

pub fn zone_rows(card: &Card) -> Vec<ZoneRow> {
    Zone::ALL
        .into_iter()
        .filter(|z| card.occupies(*z))
        .map(|z| {
            if z == Zone::Midnight && card.midnight.get() == 2 {
                ZoneRow::BottomTwo
            } else {
                ZoneRow::Single(z)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Count;

    #[test]
    fn cost_icons_repeat_by_count() {
        let card = Card {
            card_cost: Count(1),
            consuming: Count(2),
            ..Default::default()
        };
        let icons = cost_icons(&card, &IconVocabulary::standard());
        let rendered: Vec<_> = icons.iter().map(|t| t.to_string()).collect();
        assert_eq!(rendered, vec!["[DrawCard]", "[ConsumeFish][ConsumeFish]"]);
    }

    #[test]
    fn cost_icons_skip_names_outside_the_vocabulary() {
        let card = Card {
            egg_cost: Count(1),
            young_cost: Count(1),
            ..Default::default()
        };
        let vocab = IconVocabulary::new(["FishEgg"]);
        let icons = cost_icons(&card, &vocab);
        assert_eq!(icons.len(), 1);
        assert_eq!(icons[0].name(), "FishEgg");
    }

    #[test]
    fn name_icons_fall_back_to_trait_names() {
        let card = Card {
            venomous: Count(1),
            predator: Count(1),
            electric: Count(2),
            ..Default::default()
        };
        let marks = name_icons(&card, &IconVocabulary::standard());
        assert_eq!(
            marks,
            vec![
                NameMark::Icon(IconToken::new(&IconVocabulary::standard(), "Predator").unwrap()),
                NameMark::Label(Trait::Electric, 2),
                NameMark::Label(Trait::Venomous, 1),
            ]
        );
        assert!(name_icons(&Card::default(), &IconVocabulary::standard()).is_empty());
    }

    #[test]
    fn name_icons_repeat_by_count() {
        let vocab = IconVocabulary::new(["Bioluminescent"]);
        let card = Card {
            bioluminescent: Count(2),
            ..Default::default()
        };
        let marks = name_icons(&card, &vocab);
        let NameMark::Icon(token) = &marks[0] else {
            panic!("expected an icon");
        };
        assert_eq!(token.to_string(), "[Bioluminescent][Bioluminescent]");
    }

    #[test]
    fn length_and_points() {
        let vocab = IconVocabulary::standard();
        let card = Card {
            length: 120.0,
            points: Some(4),
            ..Default::default()
        };
        assert_eq!(length_icon(&card, &vocab).unwrap().name(), "FishLengthMedium");
        assert_eq!(points_icon(&card, &vocab).unwrap().to_string(), "4 [Wave]");
        assert!(points_icon(&Card::default(), &vocab).is_none());
    }

    #[test]
    fn midnight_two_spans_the_bottom_rows() {
        let card = Card {
            twilight: Count(1),
            midnight: Count(2),
            ..Default::default()
        };
        assert_eq!(
            zone_rows(&card),
            vec![ZoneRow::Single(Zone::Twilight), ZoneRow::BottomTwo]
        );
    }
}
