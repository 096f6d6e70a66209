//! Shared quote pool and background producer
//!
//! The pool is the only mutable state shared between the producer task
//! and facade callers: a FIFO queue of pre-validated quotes plus the
//! shutdown flag, both behind a single mutex. Critical sections are
//! short moves and pops and never span an await point.

use crate::ports::line_source::LineSource;
use crate::use_cases::compose_quote::QuoteComposer;
use quotesmith_domain::Quote;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, info};

/// Errors for producer lifecycle misuse
///
/// Quote production itself never errors; these cover only `start`/`stop`
/// being called in the wrong state or the producer outliving its stop
/// window.
#[derive(Error, Debug)]
pub enum PoolError {
    #[error("Quote generation was already started")]
    AlreadyStarted,

    #[error("Quote generation is not running")]
    NotRunning,

    #[error("Producer did not stop within {0:?}")]
    StopTimeout(Duration),
}

/// Tuning knobs for the pool and its producer
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Nominal queue capacity; the producer fills to half of this
    pub queue_size: usize,
    /// Minimum wall-clock period of one producer cycle
    pub wait_time: Duration,
    /// How long `stop` waits for the producer to exit
    pub stop_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            queue_size: 40,
            wait_time: Duration::from_secs(5),
            stop_timeout: Duration::from_secs(5),
        }
    }
}

/// Queue and flag guarded together by one mutex
#[derive(Debug, Default)]
struct PoolState {
    queue: VecDeque<Quote>,
    shutdown: bool,
}

/// Bounded, mutex-guarded pool of ready-to-serve quotes
///
/// The producer is the sole inserter, consumers are the sole removers;
/// FIFO order is preserved end to end.
#[derive(Debug)]
pub struct QuotePool {
    state: Mutex<PoolState>,
    config: PoolConfig,
}

impl QuotePool {
    pub fn new(config: PoolConfig) -> Self {
        Self {
            state: Mutex::new(PoolState::default()),
            config,
        }
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// The producer's fill mark: half the nominal capacity
    pub fn fill_target(&self) -> usize {
        self.config.queue_size / 2
    }

    /// Pop the oldest quote, if any
    pub fn pop(&self) -> Option<Quote> {
        let mut state = self.locked();
        let quote = state.queue.pop_front();
        if quote.is_some() {
            debug!(remaining = state.queue.len(), "serving quote from pool");
        }
        quote
    }

    /// Number of quotes currently pooled
    pub fn len(&self) -> usize {
        self.locked().queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locked().queue.is_empty()
    }

    /// Ask the producer to exit at its next cycle boundary
    pub fn request_shutdown(&self) {
        self.locked().shutdown = true;
    }

    /// Merge staged quotes into the queue, up to the fill target
    ///
    /// Returns the shutdown flag as observed under the lock. Once
    /// shutdown is observed, nothing is inserted: a straggling cycle
    /// finishing after `stop` discards its work. Staged quotes beyond
    /// the fill target are discarded rather than carried over; bounding
    /// the producer this way keeps one cycle's work from compounding
    /// into the next.
    fn merge_staged(&self, staging: &mut Vec<Quote>) -> bool {
        let mut state = self.locked();

        if !state.shutdown {
            let target = self.fill_target();
            while state.queue.len() < target && !staging.is_empty() {
                state.queue.push_back(staging.remove(0));
            }
            debug!(pooled = state.queue.len(), discarded = staging.len(), "merged staged quotes");
        }

        staging.clear();
        state.shutdown
    }

    /// A poisoned lock only means another holder panicked mid-operation;
    /// queue and flag stay structurally sound, so keep serving.
    fn locked(&self) -> MutexGuard<'_, PoolState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Background refill loop
///
/// Each cycle stages freshly composed quotes (prompted by random starter
/// lines) until the fill target or the cycle's time budget is reached,
/// sleeps out the remainder of the budget, then merges the staging list
/// into the pool under the lock. The time budget is checked after each
/// completed composition, so an in-flight generation call is never
/// interrupted. Exits when shutdown is observed at a merge.
pub async fn run_producer(
    pool: Arc<QuotePool>,
    composer: Arc<QuoteComposer>,
    starters: Arc<dyn LineSource>,
) {
    info!("quote producer running");
    let wait_time = pool.config().wait_time;
    let mut staging: Vec<Quote> = Vec::new();

    loop {
        let cycle_start = Instant::now();

        while staging.len() < pool.fill_target() {
            let prompt = starters.random_line();
            staging.push(composer.compose(&prompt).await);

            if cycle_start.elapsed() > wait_time {
                break;
            }
        }

        let elapsed = cycle_start.elapsed();
        if elapsed < wait_time {
            tokio::time::sleep(wait_time - elapsed).await;
        }

        if pool.merge_staged(&mut staging) {
            break;
        }
    }

    info!("quote producer exited");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(queue_size: usize) -> QuotePool {
        QuotePool::new(PoolConfig {
            queue_size,
            wait_time: Duration::from_millis(10),
            stop_timeout: Duration::from_millis(100),
        })
    }

    fn staged(texts: &[&str]) -> Vec<Quote> {
        texts.iter().map(|t| Quote::new(*t)).collect()
    }

    #[test]
    fn test_pop_is_fifo() {
        let pool = pool(8);
        let mut quotes = staged(&["a", "b", "c"]);
        pool.merge_staged(&mut quotes);

        assert_eq!(pool.pop().unwrap().as_str(), "a");
        assert_eq!(pool.pop().unwrap().as_str(), "b");
        assert_eq!(pool.pop().unwrap().as_str(), "c");
        assert!(pool.pop().is_none());
    }

    #[test]
    fn test_merge_respects_fill_target() {
        let pool = pool(4);
        let mut quotes = staged(&["a", "b", "c", "d"]);
        let shutdown = pool.merge_staged(&mut quotes);

        assert!(!shutdown);
        // fill target is 2; the excess is discarded, not carried over
        assert_eq!(pool.len(), 2);
        assert!(quotes.is_empty());
    }

    #[test]
    fn test_merge_tops_up_partial_queue() {
        let pool = pool(8);
        pool.merge_staged(&mut staged(&["a", "b"]));
        assert_eq!(pool.len(), 2);

        pool.merge_staged(&mut staged(&["c", "d", "e"]));
        assert_eq!(pool.len(), 4);
        assert_eq!(pool.pop().unwrap().as_str(), "a");
    }

    #[test]
    fn test_merge_after_shutdown_inserts_nothing() {
        let pool = pool(8);
        pool.request_shutdown();

        let mut quotes = staged(&["late", "result"]);
        let shutdown = pool.merge_staged(&mut quotes);

        assert!(shutdown);
        assert!(pool.is_empty());
        assert!(quotes.is_empty());
    }

    #[test]
    fn test_shutdown_flag_survives_merges() {
        let pool = pool(8);
        assert!(!pool.merge_staged(&mut staged(&["a"])));
        pool.request_shutdown();
        assert!(pool.merge_staged(&mut Vec::new()));
    }
}
