//! Facet filtering.
//!
//! A card survives a [`Query`] when every facet lets it through. Each facet has
//! its own policy:
//!
//! | facet  | toggle on            | toggle off             | missing key |
//! |--------|----------------------|------------------------|-------------|
//! | group  | include the group    | exclude the group      | excluded    |
//! | length | include the bucket   | exclude the bucket     | excluded    |
//! | zones  | no restriction       | hide cards in the zone | allowed     |
//! | tags   | require the trait    | no restriction         | not required|
//!
//! Zones and tags are mirror images. Keep them separate.

use crate::model::{Card, CardId, SizeBucket, Trait, Zone};
use crate::query::Query;
use std::collections::{BTreeMap, BTreeSet};

pub fn group_allows(query: &Query, card: &Card) -> bool {
    query.group.get(&card.group).copied().unwrap_or(false)
}

pub fn size_allows(query: &Query, card: &Card) -> bool {
    query
        .length
        .get(&card.size_bucket())
        .copied()
        .unwrap_or(false)
}

/// Exclusion: a disabled zone hides every card that occupies it.
pub fn zones_allow(query: &Query, card: &Card) -> bool {
    Zone::ALL.into_iter().all(|zone| {
        let allowed = query.zones.get(&zone).copied().unwrap_or(true);
        allowed || !card.occupies(zone)
    })
}

/// Requirement: an enabled tag keeps only cards with that trait.
pub fn tags_allow(query: &Query, card: &Card) -> bool {
    Trait::ALL.into_iter().all(|t| {
        let required = query.tags.get(&t).copied().unwrap_or(false);
        !required || card.has_trait(t)
    })
}

pub fn passes(query: &Query, card: &Card) -> bool {
    group_allows(query, card)
        && size_allows(query, card)
        && zones_allow(query, card)
        && tags_allow(query, card)
}

/// Keeps the ids whose cards pass every facet, sorted ascending.
///
/// Ids with no card behind them are dropped.
pub fn filter(
    ids: &BTreeSet<CardId>,
    query: &Query,
    cards: &BTreeMap<CardId, Card>,
) -> Vec<CardId> {
    ids.iter()
        .filter(|id| match cards.get(*id) {
            Some(card) => passes(query, card),
            None => {
                tracing::debug!(id = **id, "search returned an id outside the corpus");
                false
            }
        })
        .copied()
        .collect()
}

/// How a result list spreads over the facets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetCounts {
    pub total: usize,
    pub groups: BTreeMap<String, usize>,
    pub sizes: BTreeMap<SizeBucket, usize>,
    pub zones: BTreeMap<Zone, usize>,
    pub traits: BTreeMap<Trait, usize>,
}

pub fn counts(ids: &[CardId], cards: &BTreeMap<CardId, Card>) -> FacetCounts {
    let mut out = FacetCounts::default();
    for card in ids.iter().filter_map(|id| cards.get(id)) {
        out.total += 1;
        *out.groups.entry(card.group.clone()).or_default() += 1;
        *out.sizes.entry(card.size_bucket()).or_default() += 1;
        for zone in Zone::ALL.into_iter().filter(|z| card.occupies(*z)) {
            *out.zones.entry(zone).or_default() += 1;
        }
        for t in Trait::ALL.into_iter().filter(|t| card.has_trait(*t)) {
            *out.traits.entry(t).or_default() += 1;
        }
    }
    out
}
