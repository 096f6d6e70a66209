//! Domain layer for quotesmith
//!
//! This crate contains the core business logic and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Quote
//!
//! A short text string served to end users, either curated (the daily
//! pick) or generated by a remote text-generation service and accepted
//! by the validation gate.
//!
//! ## Validation
//!
//! Generated text is only served if every word in it survives the
//! lexicon gate: after stripping punctuation and digits, each token must
//! be a known word (with a plural allowance) and must not carry an
//! apostrophe in its last three characters.
//!
//! ## Daily selection
//!
//! The quote of the day is a pure function of the calendar date: days
//! elapsed since a fixed epoch, wrapped around the size of the curated
//! quote list.

pub mod core;
pub mod daily;
pub mod generation;
pub mod validation;

// Re-export commonly used types
pub use core::quote::Quote;
pub use daily::{DAILY_EPOCH, daily_line_number};
pub use generation::GenerationParams;
pub use validation::{INVALID_CHARACTERS, Lexicon, QuoteValidator};
