//! File-backed word lexicon

use crate::assets::AssetError;
use quotesmith_domain::Lexicon;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::info;

/// A word list loaded into a lower-cased set
///
/// One word per line, as shipped by system dictionaries
/// (`/usr/share/dict/words`) and word-corpus exports. Lookup is
/// case-insensitive because validation lower-cases before querying.
#[derive(Debug)]
pub struct FileLexicon {
    words: HashSet<String>,
}

impl FileLexicon {
    /// Load the word list at `path`; fails on I/O errors and files
    /// without a single word
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path: PathBuf = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|source| AssetError::Unreadable {
            path: path.clone(),
            source,
        })?;

        let words: HashSet<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_lowercase)
            .collect();

        if words.is_empty() {
            return Err(AssetError::Empty { path });
        }

        info!(path = %path.display(), words = words.len(), "loaded lexicon");
        Ok(Self { words })
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Lexicon for FileLexicon {
    fn is_known_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
