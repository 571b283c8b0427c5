use crate::error::{ReefdexError, Result};
use crate::index::IndexField;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LINE_WIDTH: usize = 100;

/// Keys accepted by [`ReefdexConfig::get`] and [`ReefdexConfig::set`].
pub const KEYS: [&str; 3] = ["cards_path", "index_fields", "line_width"];

/// Configuration for reefdex, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReefdexConfig {
    /// Card dataset to load instead of the embedded one
    #[serde(default)]
    pub cards_path: Option<PathBuf>,

    /// Card fields the full-text index covers
    #[serde(default = "default_index_fields")]
    pub index_fields: Vec<IndexField>,

    /// Fallback width for list output when the terminal size is unknown
    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

fn default_index_fields() -> Vec<IndexField> {
    IndexField::DEFAULT.to_vec()
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

impl Default for ReefdexConfig {
    fn default() -> Self {
        Self {
            cards_path: None,
            index_fields: default_index_fields(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl ReefdexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ReefdexConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// The value of `key` as shown to the user. `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "cards_path" => Some(
                self.cards_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(embedded)".to_string()),
            ),
            "index_fields" => Some(
                self.index_fields
                    .iter()
                    .map(|f| f.as_str())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            "line_width" => Some(self.line_width.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "cards_path" => {
                let value = value.trim();
                self.cards_path = if value.is_empty() || value == "embedded" {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "index_fields" => {
                let fields = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(|s| s.parse::<IndexField>())
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(ReefdexError::Config)?;
                if fields.is_empty() {
                    return Err(ReefdexError::Config(
                        "index_fields needs at least one field".to_string(),
                    ));
                }
                self.index_fields = fields;
            }
            "line_width" => {
                let width: usize = value.trim().parse().map_err(|_| {
                    ReefdexError::Config(format!("line_width must be a number, got {}", value))
                })?;
                if width == 0 {
                    return Err(ReefdexError::Config("line_width must be positive".to_string()));
                }
                self.line_width = width;
            }
            _ => return Err(ReefdexError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReefdexConfig::default();
        assert_eq!(config.cards_path, None);
        assert_eq!(config.index_fields, IndexField::DEFAULT.to_vec());
        assert_eq!(config.line_width, 100);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReefdexConfig::load(dir.path().join("nowhere")).unwrap();
        assert_eq!(config, ReefdexConfig::default());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"line_width": 60}"#).unwrap();

        let config = ReefdexConfig::load(dir.path()).unwrap();
        assert_eq!(config.line_width, 60);
        assert_eq!(config.index_fields, IndexField::DEFAULT.to_vec());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let mut config = ReefdexConfig::default();
        config.set("index_fields", "name, description").unwrap();
        config.set("cards_path", "/tmp/cards.json").unwrap();
        config.save(&nested).unwrap();

        let loaded = ReefdexConfig::load(&nested).unwrap();
        assert_eq!(
            loaded.index_fields,
            vec![IndexField::Name, IndexField::Description]
        );
        assert_eq!(loaded.cards_path, Some(PathBuf::from("/tmp/cards.json")));
    }

    #[test]
    fn test_get_formats_values() {
        let config = ReefdexConfig::default();
        assert_eq!(config.get("cards_path").as_deref(), Some("(embedded)"));
        assert_eq!(
            config.get("index_fields").as_deref(),
            Some("name,latin,ability")
        );
        assert_eq!(config.get("line_width").as_deref(), Some("100"));
        assert_eq!(config.get("colour"), None);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = ReefdexConfig::default();
        assert!(config.set("line_width", "wide").is_err());
        assert!(config.set("line_width", "0").is_err());
        assert!(config.set("index_fields", "name,fins").is_err());
        assert!(config.set("index_fields", " , ").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, ReefdexConfig::default());
    }

    #[test]
    fn test_embedded_resets_cards_path() {
        let mut config = ReefdexConfig::default();
        config.set("cards_path", "cards.json").unwrap();
        config.set("cards_path", "embedded").unwrap();
        assert_eq!(config.cards_path, None);
    }
}
