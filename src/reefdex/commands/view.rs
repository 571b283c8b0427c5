use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::TextIndex;
use crate::model::CardId;

pub fn run<I: TextIndex>(catalog: &Catalog<I>, ids: &[CardId]) -> Result<CmdResult> {
    let cards = ids
        .iter()
        .map(|id| catalog.corpus().get(*id).cloned())
        .collect::<Result<Vec<_>>>()?;
    Ok(CmdResult::default().with_listed_cards(cards))
}
