//! File-backed line source

use crate::assets::AssetError;
use quotesmith_application::LineSource;
use std::path::{Path, PathBuf};
use tracing::info;

/// A text file held in memory, addressed by 1-based line number
///
/// Loaded whole at startup; reads afterwards are allocation-free and
/// safe from any thread.
#[derive(Debug)]
pub struct FileLineSource {
    path: PathBuf,
    lines: Vec<String>,
}

impl FileLineSource {
    /// Load every line of `path`; fails on I/O errors and empty files
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|source| AssetError::Unreadable {
            path: path.clone(),
            source,
        })?;

        let lines: Vec<String> = content.lines().map(str::to_string).collect();
        if lines.is_empty() {
            return Err(AssetError::Empty { path });
        }

        info!(path = %path.display(), lines = lines.len(), "loaded line source");
        Ok(Self { path, lines })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileLineSource {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, number: usize) -> Option<&str> {
        self.lines.get(number.checked_sub(1)?).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_asset(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_and_address_lines() {
        let file = write_asset("first quote\nsecond quote\nthird quote\n");
        let source = FileLineSource::load(file.path()).unwrap();

        assert_eq!(source.line_count(), 3);
        assert_eq!(source.line(1), Some("first quote"));
        assert_eq!(source.line(3), Some("third quote"));
        assert_eq!(source.line(4), None);
        assert_eq!(source.line(0), None);
    }

    #[test]
    fn test_no_trailing_newline() {
        let file = write_asset("only line");
        let source = FileLineSource::load(file.path()).unwrap();
        assert_eq!(source.line_count(), 1);
        assert_eq!(source.line(1), Some("only line"));
    }

    #[test]
    fn test_empty_file_is_an_error() {
        let file = write_asset("");
        let err = FileLineSource::load(file.path()).unwrap_err();
        assert!(matches!(err, AssetError::Empty { .. }));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = FileLineSource::load("/nonexistent/quotes.txt").unwrap_err();
        assert!(matches!(err, AssetError::Unreadable { .. }));
    }

    #[test]
    fn test_random_line_stays_in_bounds() {
        let file = write_asset("a\nb\nc\n");
        let source = FileLineSource::load(file.path()).unwrap();
        for _ in 0..50 {
            assert!(["a", "b", "c"].contains(&source.random_line().as_str()));
        }
    }
}
