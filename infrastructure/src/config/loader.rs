//! Configuration file loader with multi-source merging

use super::file_config::ServiceConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable carrying the API credential
pub const API_KEY_VAR: &str = "QUOTESMITH_API_KEY";

/// Errors assembling the startup configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),

    #[error("Missing API credential: set {API_KEY_VAR}")]
    MissingApiKey,
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./quotesmith.toml` or `./.quotesmith.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/quotesmith/config.toml`
    /// 4. Fallback: `~/.config/quotesmith/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<ServiceConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(ServiceConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        // Add project-level config files (check both names)
        for filename in &["quotesmith.toml", ".quotesmith.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        // Add explicit config path (highest priority)
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .extract()
            .map_err(|e| ConfigError::Invalid(Box::new(e)))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> ServiceConfig {
        ServiceConfig::default()
    }

    /// The API credential from the environment
    ///
    /// The secret never lives in config files; absence is fatal.
    pub fn api_key() -> Result<String, ConfigError> {
        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(ConfigError::MissingApiKey),
        }
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/quotesmith/config.toml if set,
    /// otherwise falls back to ~/.config/quotesmith/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("quotesmith").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        for filename in &["quotesmith.toml", ".quotesmith.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.pool.queue_size, 40);
        assert!(config.generation.do_sample);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("quotesmith"));
    }

    #[test]
    fn test_missing_api_key_error_names_the_variable() {
        let err = ConfigError::MissingApiKey;
        assert!(err.to_string().contains(API_KEY_VAR));
    }

    #[test]
    fn test_explicit_config_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "[pool]\nqueue_size = 6").unwrap();

        let path = file.path().to_path_buf();
        let config = ConfigLoader::load(Some(&path)).unwrap();

        assert_eq!(config.pool.queue_size, 6);
        // untouched sections keep their defaults
        assert_eq!(config.pool.wait_time_secs, 5);
    }
}
