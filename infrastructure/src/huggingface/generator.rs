//! TextGenerator implementation over the Inference API

use crate::huggingface::protocol::{InferenceOptions, InferenceRequest, extract_generated_text};
use async_trait::async_trait;
use quotesmith_application::{GeneratorError, TextGenerator};
use quotesmith_domain::GenerationParams;
use tracing::debug;

/// Default hosted model endpoint
pub const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/sullyd/PhilosophicalQuotes";

/// Remote text generation via the Hugging Face Inference API
///
/// Holds a shared connection pool; cloning the inner client is cheap,
/// so one instance serves the producer and all facade callers.
pub struct HuggingFaceGenerator {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HuggingFaceGenerator {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Adapter against the default hosted model
    pub fn hosted(api_key: impl Into<String>) -> Self {
        Self::new(DEFAULT_ENDPOINT, api_key)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceGenerator {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GeneratorError> {
        let request = InferenceRequest {
            inputs: prompt,
            parameters: params,
            options: InferenceOptions::default(),
        };

        debug!(endpoint = %self.endpoint, "requesting generation");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GeneratorError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GeneratorError::Transport(e.to_string()))?;

        if status.is_success() {
            return extract_generated_text(&body);
        }

        // Service errors usually ride in the body even on non-2xx; keep
        // the more specific category when the body names one.
        match extract_generated_text(&body) {
            Err(err @ GeneratorError::ServiceReported(_)) => Err(err),
            _ => Err(GeneratorError::Transport(format!(
                "HTTP {} from generation service",
                status.as_u16()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hosted_uses_default_endpoint() {
        let generator = HuggingFaceGenerator::hosted("secret");
        assert_eq!(generator.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_custom_endpoint() {
        let generator = HuggingFaceGenerator::new("http://localhost:9000/generate", "secret");
        assert_eq!(generator.endpoint(), "http://localhost:9000/generate");
    }
}
