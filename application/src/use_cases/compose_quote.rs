//! Quote composition use case
//!
//! Wraps the remote generation port in a bounded-retry loop gated by the
//! validator. Composition never fails outward: when every attempt is
//! spent, the caller gets a random curated daily quote instead of an
//! error.

use crate::ports::line_source::LineSource;
use crate::ports::text_generator::TextGenerator;
use quotesmith_domain::{GenerationParams, Quote, QuoteValidator};
use std::sync::Arc;
use tracing::{debug, warn};

/// Retries allowed after the first attempt; at most `MAX_RETRIES + 1`
/// outbound calls per composition.
pub const MAX_RETRIES: u32 = 3;

/// Composes validated quotes from prompts
///
/// Holds the generation port, the validation gate, and the curated daily
/// list used as the fallback of last resort.
#[derive(Clone)]
pub struct QuoteComposer {
    generator: Arc<dyn TextGenerator>,
    validator: QuoteValidator,
    daily_quotes: Arc<dyn LineSource>,
    params: GenerationParams,
}

impl QuoteComposer {
    /// Create a composer with the default sampling parameters
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        validator: QuoteValidator,
        daily_quotes: Arc<dyn LineSource>,
    ) -> Self {
        Self {
            generator,
            validator,
            daily_quotes,
            params: GenerationParams::default(),
        }
    }

    /// Override the sampling parameters
    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Compose a quote that begins with `prompt`
    ///
    /// Attempts generation up to `MAX_RETRIES + 1` times. An attempt
    /// fails on transport errors, malformed or service-reported error
    /// responses, and on the validator rejecting the concatenated
    /// `prompt + completion`. On exhaustion, a uniformly-random line of
    /// the daily list is served instead.
    pub async fn compose(&self, prompt: &str) -> Quote {
        let prompt = prompt.trim();

        for attempt in 0..=MAX_RETRIES {
            match self.generator.generate(prompt, &self.params).await {
                Ok(text) => {
                    let text = text.replace('\n', "");
                    let candidate = format!("{prompt}{text}");
                    if self.validator.is_valid(&candidate) {
                        debug!(attempt, "generated quote accepted");
                        return Quote::new(candidate);
                    }
                    warn!(attempt, "generated text failed validation");
                }
                Err(error) => {
                    warn!(attempt, %error, "generation attempt failed");
                }
            }
        }

        warn!("generation attempts exhausted, serving a daily quote");
        self.fallback_quote()
    }

    /// A uniformly-random quote from the curated daily list
    pub fn fallback_quote(&self) -> Quote {
        Quote::new(self.daily_quotes.random_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::text_generator::GeneratorError;
    use async_trait::async_trait;
    use quotesmith_domain::Lexicon;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct DailyLines(Vec<String>);

    impl LineSource for DailyLines {
        fn line_count(&self) -> usize {
            self.0.len()
        }

        fn line(&self, number: usize) -> Option<&str> {
            self.0.get(number.checked_sub(1)?).map(String::as_str)
        }
    }

    /// Generator that replays a script of responses and counts calls
    struct ScriptedGenerator {
        script: Mutex<Vec<Result<String, GeneratorError>>>,
        calls: AtomicU32,
    }

    impl ScriptedGenerator {
        fn new(script: Vec<Result<String, GeneratorError>>) -> Self {
            Self {
                script: Mutex::new(script),
                calls: AtomicU32::new(0),
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(
            &self,
            _prompt: &str,
            _params: &GenerationParams,
        ) -> Result<String, GeneratorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut script = self.script.lock().unwrap();
            if script.is_empty() {
                Err(GeneratorError::ServiceReported("script exhausted".into()))
            } else {
                script.remove(0)
            }
        }
    }

    fn words(list: &[&str]) -> Arc<dyn Lexicon> {
        Arc::new(
            list.iter()
                .map(|w| w.to_string())
                .collect::<HashSet<String>>(),
        )
    }

    fn composer(generator: Arc<ScriptedGenerator>, known: &[&str]) -> QuoteComposer {
        QuoteComposer::new(
            generator,
            QuoteValidator::new(words(known)),
            Arc::new(DailyLines(vec!["the fallback".into()])),
        )
    }

    #[tokio::test]
    async fn test_first_attempt_success() {
        let generator = Arc::new(ScriptedGenerator::new(vec![Ok(" cat sat".into())]));
        let composer = composer(Arc::clone(&generator), &["the", "cat", "sat"]);

        let quote = composer.compose("the").await;
        assert_eq!(quote.as_str(), "the cat sat");
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_newlines_are_stripped_from_completion() {
        let generator = Arc::new(ScriptedGenerator::new(vec![Ok(" cat\n sat\n".into())]));
        let composer = composer(Arc::clone(&generator), &["the", "cat", "sat"]);

        let quote = composer.compose("the").await;
        assert_eq!(quote.as_str(), "the cat sat");
    }

    #[tokio::test]
    async fn test_prompt_is_trimmed() {
        let generator = Arc::new(ScriptedGenerator::new(vec![Ok(" cat".into())]));
        let composer = composer(Arc::clone(&generator), &["the", "cat"]);

        let quote = composer.compose("  the \n").await;
        assert_eq!(quote.as_str(), "the cat");
    }

    #[tokio::test]
    async fn test_service_errors_exhaust_into_fallback() {
        let generator = Arc::new(ScriptedGenerator::new(vec![
            Err(GeneratorError::ServiceReported("loading".into())),
            Err(GeneratorError::ServiceReported("loading".into())),
            Err(GeneratorError::ServiceReported("loading".into())),
            Err(GeneratorError::ServiceReported("loading".into())),
            Err(GeneratorError::ServiceReported("loading".into())),
        ]));
        let composer = composer(Arc::clone(&generator), &["the"]);

        let quote = composer.compose("the").await;
        assert_eq!(quote.as_str(), "the fallback");
        // MAX_RETRIES + 1 calls, never more
        assert_eq!(generator.calls(), MAX_RETRIES + 1);
    }

    #[tokio::test]
    async fn test_validation_rejection_retries_then_succeeds() {
        let generator = Arc::new(ScriptedGenerator::new(vec![
            Ok(" zzgarbagezz".into()),
            Ok(" cat".into()),
        ]));
        let composer = composer(Arc::clone(&generator), &["the", "cat"]);

        let quote = composer.compose("the").await;
        assert_eq!(quote.as_str(), "the cat");
        assert_eq!(generator.calls(), 2);
    }

    #[tokio::test]
    async fn test_validation_rejection_exhausts_into_fallback() {
        let generator = Arc::new(ScriptedGenerator::new(vec![
            Ok(" zzgarbagezz".into()),
            Ok(" zzgarbagezz".into()),
            Ok(" zzgarbagezz".into()),
            Ok(" zzgarbagezz".into()),
        ]));
        let composer = composer(Arc::clone(&generator), &["the"]);

        let quote = composer.compose("the").await;
        assert_eq!(quote.as_str(), "the fallback");
        assert_eq!(generator.calls(), MAX_RETRIES + 1);
    }

    #[tokio::test]
    async fn test_transport_error_then_success() {
        let generator = Arc::new(ScriptedGenerator::new(vec![
            Err(GeneratorError::Transport("connection reset".into())),
            Ok(" cat".into()),
        ]));
        let composer = composer(Arc::clone(&generator), &["the", "cat"]);

        let quote = composer.compose("the").await;
        assert_eq!(quote.as_str(), "the cat");
        assert_eq!(generator.calls(), 2);
    }

    #[tokio::test]
    async fn test_fallback_quote_comes_from_daily_list() {
        let generator = Arc::new(ScriptedGenerator::new(vec![]));
        let composer = composer(generator, &[]);
        assert_eq!(composer.fallback_quote().as_str(), "the fallback");
    }
}
