//! Sampling parameters sent with every generation request

use serde::{Deserialize, Serialize};

/// Sampling configuration for the remote text-generation service
///
/// Serialized verbatim into the request's `parameters` object. The
/// defaults are tuned for short, varied quote completions: high
/// temperature with a strong repetition penalty, capped at 50 new
/// tokens and a 10 second service-side time budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Top-k sampling cutoff; `None` disables it
    pub top_k: Option<u32>,
    /// Nucleus sampling mass
    pub top_p: f64,
    /// Sampling temperature
    pub temperature: f64,
    /// Penalty applied to repeated tokens
    pub repetition_penalty: f64,
    /// Upper bound on generated tokens
    pub max_new_tokens: u32,
    /// Service-side time budget in seconds
    pub max_time: f64,
    /// Whether the service echoes the prompt back in `generated_text`
    pub return_full_text: bool,
    /// Number of completions per request
    pub num_return_sequences: u32,
    /// Whether to sample (as opposed to greedy decoding)
    pub do_sample: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            top_k: None,
            top_p: 0.75,
            temperature: 1.0,
            repetition_penalty: 5.0,
            max_new_tokens: 50,
            max_time: 10.0,
            return_full_text: false,
            num_return_sequences: 1,
            do_sample: true,
        }
    }
}
