//! Hugging Face Inference API adapter
//!
//! Implements the [`TextGenerator`] port against the hosted inference
//! endpoint: one POST per generation attempt, bearer-token auth, JSON
//! request and response.
//!
//! [`TextGenerator`]: quotesmith_application::TextGenerator

mod generator;
mod protocol;

pub use generator::{DEFAULT_ENDPOINT, HuggingFaceGenerator};
pub use protocol::{InferenceOptions, InferenceRequest, extract_generated_text};
