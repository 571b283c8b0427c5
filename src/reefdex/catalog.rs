use crate::corpus::Corpus;
use crate::facets::{self, FacetCounts};
use crate::index::{BackgroundIndex, CardIndex, IndexDocument, IndexField, TextIndex};
use crate::model::{Card, CardId};
use crate::query::Query;
use std::collections::BTreeSet;

/// The corpus together with the index built over it.
///
/// Evaluating a query is a pure function of `(corpus, index, query)`: text
/// search first, then facets over the hits.
#[derive(Debug)]
pub struct Catalog<I: TextIndex> {
    corpus: Corpus,
    index: I,
}

impl Catalog<CardIndex> {
    pub fn indexed(corpus: Corpus, fields: &[IndexField]) -> Self {
        let index = CardIndex::from_cards(corpus.cards(), fields);
        Self { corpus, index }
    }
}

impl Catalog<BackgroundIndex> {
    /// Starts building the index on a worker thread; queries work meanwhile.
    pub fn indexing(corpus: Corpus, fields: &[IndexField]) -> Self {
        let documents = corpus
            .cards()
            .map(|c| IndexDocument::from_card(c, fields))
            .collect();
        let index = BackgroundIndex::spawn(documents);
        Self { corpus, index }
    }

    pub fn wait_for_index(&mut self) {
        self.index.wait();
    }
}

impl<I: TextIndex> Catalog<I> {
    pub fn new(corpus: Corpus, index: I) -> Self {
        Self { corpus, index }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Ids matching the text. Blank text matches every card without asking the index.
    pub fn search_ids(&self, text: &str) -> BTreeSet<CardId> {
        if text.trim().is_empty() {
            self.corpus.ids()
        } else {
            self.index.search(text)
        }
    }

    /// Card ids for `query`, ascending.
    pub fn evaluate(&self, query: &Query) -> Vec<CardId> {
        let hits = self.search_ids(&query.text);
        let ids = facets::filter(&hits, query, self.corpus.by_id());
        tracing::debug!(
            text = %query.text,
            hits = hits.len(),
            results = ids.len(),
            "evaluated query"
        );
        ids
    }

    pub fn cards_for(&self, ids: &[CardId]) -> Vec<Card> {
        ids.iter()
            .filter_map(|id| self.corpus.by_id().get(id).cloned())
            .collect()
    }

    pub fn counts(&self, ids: &[CardId]) -> FacetCounts {
        facets::counts(ids, self.corpus.by_id())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::{Count, Trait, Zone};
    use std::collections::BTreeMap;

    /// Answers from a fixed table; unknown text matches nothing.
    pub(crate) struct StubIndex(pub BTreeMap<String, BTreeSet<CardId>>);

    impl TextIndex for StubIndex {
        fn search(&self, text: &str) -> BTreeSet<CardId> {
            self.0.get(text).cloned().unwrap_or_default()
        }
    }

    pub(crate) fn three_cards() -> Corpus {
        let c1 = Card {
            id: 1,
            group: "main".into(),
            length: 40.0,
            ..Default::default()
        };
        let c2 = Card {
            id: 2,
            group: "starter".into(),
            length: 80.0,
            midnight: Count(1),
            ..Default::default()
        };
        let c3 = Card {
            id: 3,
            group: "main".into(),
            length: 200.0,
            predator: Count(1),
            ..Default::default()
        };
        Corpus::from_cards(vec![c3, c1, c2]).unwrap()
    }

    fn stub(entries: &[(&str, &[CardId])]) -> StubIndex {
        StubIndex(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.iter().copied().collect()))
                .collect(),
        )
    }

    #[test]
    fn blank_text_skips_the_index() {
        let catalog = Catalog::new(three_cards(), stub(&[]));
        assert_eq!(catalog.evaluate(&Query::default()), vec![1, 2, 3]);
        assert_eq!(catalog.evaluate(&Query::default().with_text("  ")), vec![1, 2, 3]);
    }

    #[test]
    fn text_hits_are_intersected_with_facets() {
        let catalog = Catalog::new(three_cards(), stub(&[("fish", &[3, 2])]));

        assert_eq!(catalog.evaluate(&Query::default().with_text("fish")), vec![2, 3]);
        assert_eq!(
            catalog.evaluate(&Query::default().with_text("fish").with_group("starter", false)),
            vec![3]
        );
        assert!(catalog
            .evaluate(&Query::default().with_text("whale"))
            .is_empty());
    }

    #[test]
    fn end_to_end_toggles() {
        let catalog = Catalog::new(three_cards(), stub(&[]));

        let q = Query::default();
        assert_eq!(catalog.evaluate(&q), vec![1, 2, 3]);

        let q = q.with_group("starter", false);
        assert_eq!(catalog.evaluate(&q), vec![1, 3]);

        let q = q.with_zone(Zone::Midnight, false);
        assert_eq!(catalog.evaluate(&q), vec![1, 3]);

        let q = Query::default().with_tag(Trait::Predator, true);
        assert_eq!(catalog.evaluate(&q), vec![3]);
    }

    #[test]
    fn real_index_finds_icon_tokens_in_abilities() {
        let corpus = Corpus::embedded().unwrap();
        let catalog = Catalog::indexed(corpus, &IndexField::DEFAULT);
        let ids = catalog.evaluate(&Query::default().with_text("[Predator]"));
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn background_catalog_answers_before_and_after_build() {
        let corpus = Corpus::embedded().unwrap();
        let total = corpus.len();
        let mut catalog = Catalog::indexing(corpus, &IndexField::DEFAULT);

        let early = catalog.evaluate(&Query::default().with_text("shark"));
        assert!(early.len() == 1 || early.len() == total);

        catalog.wait_for_index();
        assert_eq!(catalog.evaluate(&Query::default().with_text("shark")), vec![3]);
    }
}
