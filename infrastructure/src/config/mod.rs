//! Configuration loading for quotesmith
//!
//! This module handles file I/O and merging of configuration from
//! multiple sources. The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./quotesmith.toml` or `./.quotesmith.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/quotesmith/config.toml`
//! 4. Fallback: `~/.config/quotesmith/config.toml`
//! 5. Default values
//!
//! The API credential is never read from files: it comes from the
//! `QUOTESMITH_API_KEY` environment variable, and its absence is a
//! fatal startup error.

mod file_config;
mod loader;

pub use file_config::{FileApiConfig, FileAssetsConfig, FilePoolConfig, ServiceConfig};
pub use loader::{API_KEY_VAR, ConfigError, ConfigLoader};
