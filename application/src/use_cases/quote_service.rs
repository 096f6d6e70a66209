//! Quote service facade
//!
//! The consumer-facing surface: daily, random, and prompted quotes plus
//! the producer lifecycle. Every quote operation is infallible; the
//! worst case is a canned daily quote, never an error.

use crate::ports::line_source::LineSource;
use crate::use_cases::compose_quote::QuoteComposer;
use crate::use_cases::quote_pool::{PoolConfig, PoolError, QuotePool, run_producer};
use chrono::NaiveDate;
use quotesmith_domain::{Quote, daily_line_number};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Single-shot producer lifecycle: once stopped it cannot be restarted
#[derive(Debug)]
enum ProducerLifecycle {
    Idle,
    Running(JoinHandle<()>),
    Stopped,
}

/// The four consumer-facing quote operations plus lifecycle control
pub struct QuoteService {
    composer: Arc<QuoteComposer>,
    daily_quotes: Arc<dyn LineSource>,
    quote_starters: Arc<dyn LineSource>,
    pool: Arc<QuotePool>,
    producer: Mutex<ProducerLifecycle>,
}

impl QuoteService {
    /// Assemble the service; the producer is NOT started here
    ///
    /// Background work only begins on an explicit [`QuoteService::start`].
    pub fn new(
        composer: QuoteComposer,
        daily_quotes: Arc<dyn LineSource>,
        quote_starters: Arc<dyn LineSource>,
        pool_config: PoolConfig,
    ) -> Self {
        Self {
            composer: Arc::new(composer),
            daily_quotes,
            quote_starters,
            pool: Arc::new(QuotePool::new(pool_config)),
            producer: Mutex::new(ProducerLifecycle::Idle),
        }
    }

    /// Today's quote: a pure function of the calendar date
    ///
    /// No locking and no network; safe to call concurrently with
    /// everything else.
    pub fn daily_quote(&self) -> Quote {
        self.daily_quote_on(chrono::Local::now().date_naive())
    }

    /// The daily quote for an explicit date
    pub fn daily_quote_on(&self, date: NaiveDate) -> Quote {
        let number = daily_line_number(date, self.daily_quotes.line_count());
        Quote::new(self.daily_quotes.line(number).unwrap_or_default())
    }

    /// Pop the oldest pooled quote, or compose one on the spot
    ///
    /// When the pool is empty (producer not started, still refilling, or
    /// drained), generation runs synchronously on the caller's task with
    /// the full retry policy; that path is not bounded by pool capacity
    /// and may take several network round-trips.
    pub async fn random_quote(&self) -> Quote {
        if let Some(quote) = self.pool.pop() {
            return quote;
        }

        let prompt = self.quote_starters.random_line();
        self.composer.compose(&prompt).await
    }

    /// Compose a quote from a caller-supplied prompt
    ///
    /// Bypasses the pool entirely; always a fresh attempt budget.
    pub async fn prompted_quote(&self, prompt: &str) -> Quote {
        self.composer.compose(prompt).await
    }

    /// Launch the background producer; single-shot
    ///
    /// A second call, including after `stop`, fails with
    /// [`PoolError::AlreadyStarted`].
    pub fn start(&self) -> Result<(), PoolError> {
        let mut lifecycle = self.lifecycle();
        if !matches!(*lifecycle, ProducerLifecycle::Idle) {
            return Err(PoolError::AlreadyStarted);
        }

        let handle = tokio::spawn(run_producer(
            Arc::clone(&self.pool),
            Arc::clone(&self.composer),
            Arc::clone(&self.quote_starters),
        ));
        *lifecycle = ProducerLifecycle::Running(handle);
        info!("quote generation started");
        Ok(())
    }

    /// Signal the producer to stop and wait for it, bounded in time
    ///
    /// Sets the shutdown flag under the pool lock, then waits up to the
    /// configured stop timeout for the producer task to observe it and
    /// exit. The producer polls the flag once per cycle; an in-flight
    /// generation call is never cancelled, so a slow remote service can
    /// push the exit past the timeout. In that case the task is left to
    /// finish on its own; whatever it staged is discarded, never
    /// inserted.
    pub async fn stop(&self) -> Result<(), PoolError> {
        let handle = {
            let mut lifecycle = self.lifecycle();
            match std::mem::replace(&mut *lifecycle, ProducerLifecycle::Stopped) {
                ProducerLifecycle::Running(handle) => handle,
                ProducerLifecycle::Idle => {
                    *lifecycle = ProducerLifecycle::Idle;
                    return Err(PoolError::NotRunning);
                }
                ProducerLifecycle::Stopped => return Err(PoolError::NotRunning),
            }
        };

        self.pool.request_shutdown();

        let stop_timeout = self.pool.config().stop_timeout;
        match tokio::time::timeout(stop_timeout, handle).await {
            Ok(_) => {
                info!("quote generation stopped");
                Ok(())
            }
            Err(_) => {
                warn!(?stop_timeout, "producer still mid-cycle; leaving it to finish");
                Err(PoolError::StopTimeout(stop_timeout))
            }
        }
    }

    /// Number of quotes currently pooled
    pub fn pooled(&self) -> usize {
        self.pool.len()
    }

    fn lifecycle(&self) -> MutexGuard<'_, ProducerLifecycle> {
        self.producer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
