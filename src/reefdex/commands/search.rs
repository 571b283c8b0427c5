use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::TextIndex;
use crate::query::Query;

pub fn run<I: TextIndex>(catalog: &Catalog<I>, query: &Query) -> Result<CmdResult> {
    let ids = catalog.evaluate(query);
    let mut result = CmdResult::default().with_listed_cards(catalog.cards_for(&ids));
    if ids.is_empty() {
        result.add_message(CmdMessage::info("No cards match."));
    }
    Ok(result)
}
