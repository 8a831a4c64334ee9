//! Configuration module for the scanr CLI.
//!
//! An extension config adds keywords, operators and punctuation to the
//! scanner's default tables. Files ending in `.toml` are read as TOML and
//! everything else as JSON. Both use the same keys:
//!
//! ```json
//! {
//!   "additionalKeywords": { "match": "MATCH" },
//!   "additionalOperators": { "->": "ARROW" },
//!   "additionalPunctuation": { "@": "AT" }
//! }
//! ```

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use scanr_lex::Extensions;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ScanrError};

/// Configuration file names looked up in the current directory, in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["scanr.json", "scanr.toml"];

/// Extension tables read from a configuration file.
///
/// Entries map literal source text to a token kind name. Declaration order
/// is preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionConfig {
    /// Extra keywords.
    #[serde(default)]
    pub additional_keywords: IndexMap<String, String>,

    /// Extra operators, matched longest first.
    #[serde(default)]
    pub additional_operators: IndexMap<String, String>,

    /// Extra single-character punctuation.
    #[serde(default)]
    pub additional_punctuation: IndexMap<String, String>,
}

impl ExtensionConfig {
    /// Load configuration from the current directory.
    ///
    /// Returns the empty configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file(Path::new(".")) {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ScanrError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: ExtensionConfig = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };

        debug!(
            path = %path.display(),
            keywords = config.additional_keywords.len(),
            operators = config.additional_operators.len(),
            punctuation = config.additional_punctuation.len(),
            "loaded extension config"
        );
        Ok(config)
    }

    /// Find the first configuration file present in `dir`.
    pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Returns true if the configuration adds nothing.
    pub fn is_empty(&self) -> bool {
        self.additional_keywords.is_empty()
            && self.additional_operators.is_empty()
            && self.additional_punctuation.is_empty()
    }

    /// Converts the configuration into scanner extensions.
    pub fn to_extensions(&self) -> Extensions {
        Extensions {
            keywords: self.additional_keywords.clone(),
            operators: self.additional_operators.clone(),
            punctuation: self.additional_punctuation.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const JSON_CONFIG: &str = r#"{
        "additionalKeywords": { "match": "MATCH", "loop": "LOOP" },
        "additionalOperators": { "->": "ARROW" },
        "additionalPunctuation": { "@": "AT" }
    }"#;

    const TOML_CONFIG: &str = r#"
[additionalKeywords]
match = "MATCH"

[additionalOperators]
"**" = "POW"
"#;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config_is_empty() {
        let config = ExtensionConfig::default();
        assert!(config.is_empty());
        assert!(config.to_extensions().is_empty());
    }

    #[test]
    fn test_load_json() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "ext.json", JSON_CONFIG);

        let config = ExtensionConfig::load_from_path(&path).unwrap();
        assert_eq!(config.additional_keywords.len(), 2);
        assert_eq!(config.additional_operators["->"], "ARROW");
        assert_eq!(config.additional_punctuation["@"], "AT");
    }

    #[test]
    fn test_json_preserves_declaration_order() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "ext.json", JSON_CONFIG);

        let config = ExtensionConfig::load_from_path(&path).unwrap();
        let keys: Vec<&str> = config.additional_keywords.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["match", "loop"]);
    }

    #[test]
    fn test_load_toml() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "ext.toml", TOML_CONFIG);

        let config = ExtensionConfig::load_from_path(&path).unwrap();
        assert_eq!(config.additional_keywords["match"], "MATCH");
        assert_eq!(config.additional_operators["**"], "POW");
        assert!(config.additional_punctuation.is_empty());
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "ext.json", r#"{ "additionalKeywords": { "x": "X" } }"#);

        let config = ExtensionConfig::load_from_path(&path).unwrap();
        assert!(config.additional_operators.is_empty());
        assert!(!config.is_empty());
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = ExtensionConfig::load_from_path(Path::new("/nonexistent/path/scanr.json"));
        assert!(matches!(result, Err(ScanrError::Config(_))));
    }

    #[test]
    fn test_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.json", "{ not json");
        assert!(matches!(
            ExtensionConfig::load_from_path(&path),
            Err(ScanrError::Json(_))
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.toml", "[additionalKeywords\nmatch = ");
        assert!(matches!(
            ExtensionConfig::load_from_path(&path),
            Err(ScanrError::Toml(_))
        ));
    }

    #[test]
    fn test_find_config_file_prefers_json() {
        let dir = TempDir::new().unwrap();
        assert_eq!(ExtensionConfig::find_config_file(dir.path()), None);

        write(&dir, "scanr.toml", TOML_CONFIG);
        assert_eq!(
            ExtensionConfig::find_config_file(dir.path()),
            Some(dir.path().join("scanr.toml"))
        );

        write(&dir, "scanr.json", JSON_CONFIG);
        assert_eq!(
            ExtensionConfig::find_config_file(dir.path()),
            Some(dir.path().join("scanr.json"))
        );
    }

    #[test]
    fn test_to_extensions() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "ext.json", JSON_CONFIG);

        let extensions = ExtensionConfig::load_from_path(&path).unwrap().to_extensions();
        assert_eq!(extensions.keywords["loop"], "LOOP");
        assert_eq!(extensions.operators["->"], "ARROW");
        assert_eq!(extensions.len(), 4);
    }
}
