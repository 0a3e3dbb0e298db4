use crate::error::{Result, SeqrenError};
use crate::preview::Preview;
use crate::resolver::ChainResolution;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Directory holding the config file, relative to the working directory.
pub const CONFIG_DIR: &str = ".seqren";
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefaultsConfig {
    /// Digits in the zero-padded sequence number
    #[serde(default = "default_seq_width")]
    pub seq_width: usize,

    /// Preview rows shown before the list is elided
    #[serde(default = "default_show_rows")]
    pub show_rows: usize,

    /// Default preview format: "plain", "table", "json", or "none"
    #[serde(default)]
    pub preview_format: Preview,

    /// "single" (one promotion pass) or "full"
    #[serde(default)]
    pub chain_resolution: ChainResolution,

    /// Whether to use color output by default (None = auto-detect)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            seq_width: default_seq_width(),
            show_rows: default_show_rows(),
            preview_format: Preview::default(),
            chain_resolution: ChainResolution::default(),
            use_color: None,
        }
    }
}

fn default_seq_width() -> usize {
    3
}

fn default_show_rows() -> usize {
    10
}

impl Config {
    /// Load config from .seqren/config.toml in the current directory if it exists
    pub fn load() -> Result<Self> {
        match std::env::current_dir() {
            Ok(cwd) => Self::load_from_dir(&cwd),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Load `<dir>/.seqren/config.toml`, falling back to defaults when absent
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_DIR).join(CONFIG_FILE);
        if config_path.exists() {
            return Self::load_from_path(&config_path);
        }
        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| SeqrenError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.defaults.seq_width, 3);
        assert_eq!(config.defaults.show_rows, 10);
        assert_eq!(config.defaults.preview_format, Preview::Plain);
        assert_eq!(config.defaults.chain_resolution, ChainResolution::Single);
        assert_eq!(config.defaults.use_color, None);
    }

    #[test]
    fn test_load_from_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config_dir = temp_dir.path().join(CONFIG_DIR);
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(
            config_dir.join(CONFIG_FILE),
            r#"
[defaults]
seq_width = 4
preview_format = "table"
chain_resolution = "full"
use_color = false
"#,
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp_dir.path()).unwrap();
        assert_eq!(loaded.defaults.seq_width, 4);
        assert_eq!(loaded.defaults.preview_format, Preview::Table);
        assert_eq!(loaded.defaults.chain_resolution, ChainResolution::Full);
        assert_eq!(loaded.defaults.use_color, Some(false));
        assert_eq!(loaded.defaults.show_rows, 10);
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from_dir(temp_dir.path()).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_partial_config() {
        let toml_content = r#"
[defaults]
show_rows = 5
chain_resolution = "full"
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.defaults.show_rows, 5);
        assert_eq!(config.defaults.chain_resolution, ChainResolution::Full);
        // Other fields should have their defaults
        assert_eq!(config.defaults.seq_width, 3);
        assert_eq!(config.defaults.preview_format, Preview::Plain);
    }

    #[test]
    fn test_invalid_config_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[defaults]\nchain_resolution = \"sideways\"\n").unwrap();

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(matches!(err, SeqrenError::Config(_)));
        assert!(err.to_string().contains("config.toml"));
    }
}
