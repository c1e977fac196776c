use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ToolError;
use crate::stylesheet::DEFAULT_PREFIX;

/// Config file looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "aurora-colors.json";

/// Tool configuration, loaded from JSON. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Aurora `colors.yml`
    pub source: PathBuf,
    /// Stylesheet holding the `:root` block
    pub stylesheet: PathBuf,
    /// Custom property prefix, `--<prefix>-<family>-<level>`
    pub prefix: String,
    pub scan: ScanSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    pub root: PathBuf,
    /// File name globs to check
    pub include: Vec<String>,
    /// Path fragments to skip
    pub skip: Vec<String>,
    /// Forbidden usages checked after the built-in table
    pub patterns: Vec<CustomPattern>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPattern {
    pub pattern: String,
    pub description: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from("data/colors.yml"),
            stylesheet: PathBuf::from("src/index.css"),
            prefix: DEFAULT_PREFIX.to_string(),
            scan: ScanSettings::default(),
        }
    }
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("src"),
            include: vec!["*.ts".to_string(), "*.tsx".to_string()],
            skip: [
                "node_modules",
                ".storybook",
                "stories",
                ".test.ts",
                ".test.tsx",
                ".spec.ts",
                ".spec.tsx",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            patterns: Vec::new(),
        }
    }
}

impl Config {
    /// Load from an explicit path, or from the default file if it exists
    pub fn load(path: Option<&Path>) -> Result<Self, ToolError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ToolError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ToolError::config(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        Self::from_json(&content)
            .map_err(|e| ToolError::config(format!("'{}': {}", path.display(), e)))
    }

    pub fn from_json(content: &str) -> Result<Self, ToolError> {
        serde_json::from_str(content).map_err(|e| ToolError::config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.stylesheet, PathBuf::from("src/index.css"));
        assert_eq!(config.prefix, "aurora");
        assert_eq!(config.scan.root, PathBuf::from("src"));
        assert!(config.scan.skip.contains(&".storybook".to_string()));
        assert!(config.scan.skip.contains(&"stories".to_string()));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{"source": "../aurora/data/colors.yml", "scan": {"root": "lib"}}"#).unwrap();
        assert_eq!(config.source, PathBuf::from("../aurora/data/colors.yml"));
        assert_eq!(config.stylesheet, PathBuf::from("src/index.css"));
        assert_eq!(config.scan.root, PathBuf::from("lib"));
        assert_eq!(config.scan.include, vec!["*.ts", "*.tsx"]);
    }

    #[test]
    fn test_custom_patterns() {
        let config = Config::from_json(
            r#"{"scan": {"patterns": [{"pattern": "fill-\\[#[0-9a-f]{3}\\]", "description": "Short hex fill"}]}}"#,
        )
        .unwrap();
        assert_eq!(config.scan.patterns.len(), 1);
        assert_eq!(config.scan.patterns[0].pattern, r"fill-\[#[0-9a-f]{3}\]");
        assert!(Config::default().scan.patterns.is_empty());
        assert!(Config::from_json(r#"{"scan": {"patterns": [{"pattern": "x"}]}}"#).is_err());
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        assert!(matches!(
            Config::from_json("{ source: nope"),
            Err(ToolError::Config(_))
        ));
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"prefix": "brand"}}"#).unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.prefix, "brand");
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let result = Config::load(Some(missing.as_path()));
        assert!(matches!(result, Err(ToolError::Config(_))));
    }
}
