//! Wire types for the Inference API

use quotesmith_application::GeneratorError;
use quotesmith_domain::GenerationParams;
use serde::{Deserialize, Serialize};

/// Request body: prompt, sampling parameters, and service options
#[derive(Debug, Serialize)]
pub struct InferenceRequest<'a> {
    pub inputs: &'a str,
    pub parameters: &'a GenerationParams,
    pub options: InferenceOptions,
}

/// Service-side options sent with every request
#[derive(Debug, Clone, Serialize)]
pub struct InferenceOptions {
    /// Whether an identical earlier input may be answered from cache
    pub use_cache: bool,
    /// Wait for a cold model instead of failing with 503
    pub wait_for_model: bool,
}

impl Default for InferenceOptions {
    fn default() -> Self {
        Self {
            use_cache: false,
            wait_for_model: true,
        }
    }
}

/// One element of the response array
#[derive(Debug, Deserialize)]
struct InferenceChoice {
    generated_text: Option<String>,
    error: Option<serde_json::Value>,
}

/// Pull the generated text out of a raw response body
///
/// The service answers with a JSON array; the first element either
/// carries `generated_text` or an `error` describing why generation did
/// not happen. Anything else is malformed.
pub fn extract_generated_text(body: &str) -> Result<String, GeneratorError> {
    let choices: Vec<InferenceChoice> = serde_json::from_str(body)
        .map_err(|e| GeneratorError::MalformedResponse(e.to_string()))?;

    let first = choices
        .into_iter()
        .next()
        .ok_or_else(|| GeneratorError::MalformedResponse("empty response array".to_string()))?;

    if let Some(error) = first.error {
        let message = error
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        return Err(GeneratorError::ServiceReported(message));
    }

    first
        .generated_text
        .ok_or_else(|| GeneratorError::MalformedResponse("missing generated_text".to_string()))
}
