//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use crate::huggingface::DEFAULT_ENDPOINT;
use quotesmith_application::PoolConfig;
use quotesmith_domain::GenerationParams;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Remote generation service settings
    pub api: FileApiConfig,
    /// Static asset locations
    pub assets: FileAssetsConfig,
    /// Pool and producer pacing
    pub pool: FilePoolConfig,
    /// Sampling parameter overrides
    pub generation: GenerationParams,
}

/// `[api]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Generation endpoint URL
    pub endpoint: String,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

/// `[assets]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAssetsConfig {
    /// Curated daily quotes, one per line
    pub daily_quotes: PathBuf,
    /// Prompt starters for random generation, one per line
    pub quote_starters: PathBuf,
    /// Known-word list, one word per line
    pub lexicon: PathBuf,
}

impl Default for FileAssetsConfig {
    fn default() -> Self {
        Self {
            daily_quotes: PathBuf::from("static/ai/daily_quotes.txt"),
            quote_starters: PathBuf::from("static/ai/quote_starters.txt"),
            lexicon: PathBuf::from("/usr/share/dict/words"),
        }
    }
}

/// `[pool]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePoolConfig {
    /// Nominal queue capacity; the producer fills to half of this
    pub queue_size: usize,
    /// Minimum seconds per producer cycle
    pub wait_time_secs: u64,
    /// Seconds `stop` waits for the producer to exit
    pub stop_timeout_secs: u64,
}

impl Default for FilePoolConfig {
    fn default() -> Self {
        Self {
            queue_size: 40,
            wait_time_secs: 5,
            stop_timeout_secs: 5,
        }
    }
}

impl FilePoolConfig {
    /// Convert into the application-layer pool configuration
    pub fn to_pool_config(&self) -> PoolConfig {
        PoolConfig {
            queue_size: self.queue_size,
            wait_time: Duration::from_secs(self.wait_time_secs),
            stop_timeout: Duration::from_secs(self.stop_timeout_secs),
        }
    }
}
