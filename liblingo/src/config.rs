//! Configuration management for lingo

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the LibreTranslate-compatible service, no trailing slash
    /// required. The service is unauthenticated.
    pub base_url: String,

    /// Language code we translate from. Fixed for the whole session; the UI
    /// only lets the user pick the target.
    pub source_language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                base_url: "https://libretranslate.de".to_string(),
                source_language: "en".to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// A missing config file is not an error; the defaults point at the
    /// public LibreTranslate mirror.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("LINGO_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("lingo").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_points_at_public_mirror() {
        let config = Config::default();
        assert_eq!(config.service.base_url, "https://libretranslate.de");
        assert_eq!(config.service.source_language, "en");
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[service]\nbase_url = \"https://translate.example.org\"\nsource_language = \"de\""
        )
        .unwrap();

        let config = Config::load_from_path(&file.path().to_path_buf()).unwrap();

        assert_eq!(config.service.base_url, "https://translate.example.org");
        assert_eq!(config.service.source_language, "de");
    }

    #[test]
    fn test_load_from_missing_path_is_an_error() {
        let path = PathBuf::from("/nonexistent/lingo/config.toml");
        let result = Config::load_from_path(&path);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not toml at all [[[").unwrap();

        let result = Config::load_from_path(&file.path().to_path_buf());
        assert!(result.is_err());
    }
}
