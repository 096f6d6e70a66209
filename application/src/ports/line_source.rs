//! Line source port
//!
//! A static, read-only text resource addressed by 1-based line number.
//! Backs both the curated daily quotes and the quote starters.

/// Read-only, line-addressed text
///
/// Implementations hold at least one line (enforced at construction)
/// and are safe for concurrent unsynchronized reads.
pub trait LineSource: Send + Sync {
    /// Number of lines available; always at least 1
    fn line_count(&self) -> usize;

    /// The line at the given 1-based number, without its trailing
    /// newline. `None` when the number is out of range.
    fn line(&self, number: usize) -> Option<&str>;

    /// A uniformly-random line
    fn random_line(&self) -> String {
        let number = fastrand::usize(1..=self.line_count());
        self.line(number).unwrap_or_default().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLines(Vec<String>);

    impl LineSource for FixedLines {
        fn line_count(&self) -> usize {
            self.0.len()
        }

        fn line(&self, number: usize) -> Option<&str> {
            self.0.get(number.checked_sub(1)?).map(String::as_str)
        }
    }

    #[test]
    fn test_line_is_one_based() {
        let source = FixedLines(vec!["first".into(), "second".into()]);
        assert_eq!(source.line(1), Some("first"));
        assert_eq!(source.line(2), Some("second"));
        assert_eq!(source.line(0), None);
        assert_eq!(source.line(3), None);
    }

    #[test]
    fn test_random_line_is_always_in_range() {
        let source = FixedLines(vec!["a".into(), "b".into(), "c".into()]);
        for _ in 0..50 {
            let line = source.random_line();
            assert!(["a", "b", "c"].contains(&line.as_str()));
        }
    }

    #[test]
    fn test_random_line_single_entry() {
        let source = FixedLines(vec!["only".into()]);
        assert_eq!(source.random_line(), "only");
    }
}
