use crate::commands::CmdResult;
use crate::error::Result;
use crate::icons::IconVocabulary;

pub fn run(vocabulary: &IconVocabulary) -> Result<CmdResult> {
    let names = vocabulary.names().map(str::to_string).collect();
    Ok(CmdResult::default().with_icons(names))
}
