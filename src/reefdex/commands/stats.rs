use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::TextIndex;
use crate::query::Query;

/// Facet counts over the cards `query` selects.
pub fn run<I: TextIndex>(catalog: &Catalog<I>, query: &Query) -> Result<CmdResult> {
    let ids = catalog.evaluate(query);
    Ok(CmdResult::default().with_counts(catalog.counts(&ids)))
}
