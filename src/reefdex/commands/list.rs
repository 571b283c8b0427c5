use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::TextIndex;
use crate::query::Query;

/// Every card the default query shows.
pub fn run<I: TextIndex>(catalog: &Catalog<I>) -> Result<CmdResult> {
    super::search::run(catalog, &Query::default())
}
