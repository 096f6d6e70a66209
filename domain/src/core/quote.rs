//! Quote value object

use serde::{Deserialize, Serialize};

/// A quote ready to be served (Value Object)
///
/// Wraps the text produced by the generation pipeline or read from the
/// curated daily list. Construction strips newline characters so that a
/// quote always renders as a single line, matching what the line sources
/// and the remote service are expected to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    text: String,
}

impl Quote {
    /// Create a new quote, removing any newline characters
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into().replace(['\n', '\r'], "");
        Self { text }
    }

    /// Get the quote text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume and return the inner text
    pub fn into_string(self) -> String {
        self.text
    }

    /// Whether the quote carries no text at all
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&str> for Quote {
    fn from(s: &str) -> Self {
        Quote::new(s)
    }
}

impl From<String> for Quote {
    fn from(s: String) -> Self {
        Quote::new(s)
    }
}
