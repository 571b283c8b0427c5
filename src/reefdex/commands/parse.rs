use crate::commands::CmdResult;
use crate::error::Result;
use crate::markup;

pub fn run(text: &str) -> Result<CmdResult> {
    Ok(CmdResult::default().with_segments(markup::parse(text)))
}
