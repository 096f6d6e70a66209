//! Static text assets loaded once at startup
//!
//! The curated quote lists and the word lexicon are plain UTF-8 files.
//! Both are read fully into memory before the service starts; a missing
//! or empty asset is a startup failure, never a runtime one.

mod lexicon;
mod line_source;

pub use lexicon::FileLexicon;
pub use line_source::FileLineSource;

use std::path::PathBuf;
use thiserror::Error;

/// Errors loading a static asset
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Failed to read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Asset {path} contains no usable entries")]
    Empty { path: PathBuf },
}
