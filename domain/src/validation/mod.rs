//! Validation gate for generated text
//!
//! The remote text-generation service produces free-form output that is
//! frequently garbage: token fragments, stray markup, half-words. The
//! gate splits candidate text into words, strips punctuation and digits,
//! and rejects the whole text as soon as one surviving word fails the
//! lexicon check.

use std::collections::HashSet;
use std::sync::Arc;

/// Characters removed from words before the lexicon check.
///
/// Every occurrence is replaced with a space, so a token like `end.start`
/// splits into two words. The apostrophe is deliberately absent; it is
/// judged by position instead (see [`QuoteValidator::is_valid`]).
pub const INVALID_CHARACTERS: &str = ".!\"#$%&()-*+,/:;<=>?@[\\]^_`{|}~0123456789";

/// A set of known natural-language words
///
/// Implementations are read-only after construction and safe to share
/// across threads without synchronization. Words are queried lower-cased.
pub trait Lexicon: Send + Sync {
    /// Whether `word` is a known word
    fn is_known_word(&self, word: &str) -> bool;
}

/// A plain set of lower-case words is a lexicon; used by tests and by
/// adapters that load a word list into memory.
impl Lexicon for HashSet<String> {
    fn is_known_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

/// Decides whether generated text is acceptable to serve
///
/// Pure and deterministic for a fixed lexicon snapshot; no side effects.
#[derive(Clone)]
pub struct QuoteValidator {
    lexicon: Arc<dyn Lexicon>,
}

impl QuoteValidator {
    /// Create a validator over the given lexicon
    pub fn new(lexicon: Arc<dyn Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Whether `text` is acceptable to serve
    ///
    /// Rules, applied to each cleaned lower-case word:
    /// - unknown words reject the text, unless the word ends in `s`
    ///   (plural allowance: `cats` passes with only `cat` in the lexicon)
    /// - an apostrophe within the last three characters rejects the text
    ///   (`don't`, `it's`), regardless of the lexicon
    ///
    /// Empty text is rejected outright.
    pub fn is_valid(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }

        clean_words(text).iter().all(|word| !self.disqualifies(word))
    }

    /// Whether a single cleaned word makes the text unacceptable
    fn disqualifies(&self, word: &str) -> bool {
        if !self.lexicon.is_known_word(word) && !word.ends_with('s') {
            return true;
        }

        let chars: Vec<char> = word.chars().collect();
        if let Some(index) = chars.iter().position(|&c| c == '\'') {
            if chars.len() - index < 3 {
                return true;
            }
        }

        false
    }
}

impl std::fmt::Debug for QuoteValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteValidator").finish_non_exhaustive()
    }
}

/// Split text into cleaned lower-case words
///
/// Splits on single spaces, replaces every invalid character with a
/// space (so one raw token may yield several words), re-splits, and
/// drops empties. A single linear pass over fresh buffers.
fn clean_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();

    for raw in text.split(' ') {
        let mut cleaned = String::with_capacity(raw.len());
        for ch in raw.chars() {
            if INVALID_CHARACTERS.contains(ch) {
                cleaned.push(' ');
            } else {
                cleaned.push(ch);
            }
        }

        for part in cleaned.split(' ') {
            let part = part.trim();
            if !part.is_empty() {
                words.push(part.to_lowercase());
            }
        }
    }

    words
}
