// crates/chunkyard-cli/src/config.rs
//
// Runtime configuration for the Chunkyard CLI.
// Loaded from a TOML file or populated with sensible defaults.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// File name looked up in the working directory when no `--config` is given.
const LOCAL_CONFIG_FILE: &str = "chunkyard.toml";

/// Runtime configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Store locations in lookup order (paths, URLs, or "memory").
    #[serde(default)]
    pub stores: Vec<String>,

    /// Optional writable location that caches chunks read from `stores`.
    #[serde(default)]
    pub cache: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            stores: Vec::new(),
            cache: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: CliConfig = toml::from_str(&contents)?;
        Ok(config)
    }
}

/// Default config path: `./chunkyard.toml` if present, otherwise
/// `{config dir}/chunkyard/config.toml`.
pub fn default_config_path() -> String {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return LOCAL_CONFIG_FILE.to_string();
    }
    dirs::config_dir()
        .map(|dir| dir.join("chunkyard").join("config.toml"))
        .unwrap_or(local)
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, "info");
        assert!(config.stores.is_empty());
        assert!(config.cache.is_none());
    }

    #[test]
    fn test_parse_full() {
        let config: CliConfig = toml::from_str(
            r#"
            log_level = "debug"
            cache = "/var/cache/chunkyard"
            stores = ["/srv/chunks", "https://mirror.example.com/chunks"]
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.cache.as_deref(), Some("/var/cache/chunkyard"));
        assert_eq!(
            config.stores,
            vec!["/srv/chunks", "https://mirror.example.com/chunks"]
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: CliConfig = toml::from_str("stores = [\"memory\"]").unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.stores, vec!["memory"]);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("chunkyard_config_{}.toml", uuid::Uuid::new_v4()));
        fs::write(&path, "log_level = \"warn\"\n").unwrap();
        let config = CliConfig::load(&path.to_string_lossy()).unwrap();
        assert_eq!(config.log_level, "warn");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(CliConfig::load("/nonexistent/chunkyard.toml").is_err());
    }
}
