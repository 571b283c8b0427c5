use crate::commands::{CmdMessage, CmdResult};
use crate::editor;
use crate::error::Result;
use crate::icons::IconVocabulary;

pub fn run(vocabulary: &IconVocabulary, text: &str) -> Result<CmdResult> {
    let clean = editor::sanitize(vocabulary, text);
    let mut result = CmdResult::default();
    if clean != text {
        result.add_message(CmdMessage::warning("Removed tokens outside the icon vocabulary."));
    }
    Ok(result.with_text(clean))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_unknown_tokens() {
        let result = run(&IconVocabulary::standard(), "[Predator][BogusName][Wave]").unwrap();
        assert_eq!(result.text.as_deref(), Some("[Predator][Wave]"));
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn clean_text_passes_silently() {
        let result = run(&IconVocabulary::standard(), "big [Predator]").unwrap();
        assert_eq!(result.text.as_deref(), Some("big [Predator]"));
        assert!(result.messages.is_empty());
    }
}
