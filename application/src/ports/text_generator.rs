//! Text generation port
//!
//! Defines the interface for the remote text-generation service.

use async_trait::async_trait;
use quotesmith_domain::GenerationParams;
use thiserror::Error;

/// Errors that can occur on a single generation attempt
///
/// Every variant is recovered locally by the bounded-retry policy in
/// [`crate::use_cases::compose_quote::QuoteComposer`]; none of them ever
/// reaches a facade caller.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Service reported error: {0}")]
    ServiceReported(String),
}

/// Remote text-generation capability
///
/// This port defines how the application layer reaches the generation
/// service. Implementations (adapters) live in the infrastructure layer.
/// One call performs exactly one outbound request.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for `prompt` using the given sampling
    /// parameters. Returns the raw generated text, which may still fail
    /// the validation gate.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GeneratorError>;
}
