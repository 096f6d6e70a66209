//! Infrastructure layer for quotesmith
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod assets;
pub mod config;
pub mod huggingface;

// Re-export commonly used types
pub use assets::{AssetError, FileLexicon, FileLineSource};
pub use config::{
    ConfigError, ConfigLoader, FileApiConfig, FileAssetsConfig, FilePoolConfig, ServiceConfig,
};
pub use huggingface::HuggingFaceGenerator;
