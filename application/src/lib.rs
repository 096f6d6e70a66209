//! Application layer for quotesmith
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    line_source::LineSource,
    text_generator::{GeneratorError, TextGenerator},
};
pub use use_cases::compose_quote::{MAX_RETRIES, QuoteComposer};
pub use use_cases::quote_pool::{PoolConfig, PoolError, QuotePool, run_producer};
pub use use_cases::quote_service::QuoteService;
