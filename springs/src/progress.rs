//! Progress reporting for long counting runs.
//!
//! Dispatchers take a `&dyn Progress` instead of keeping global counters, so
//! callers decide whether and how progress shows up.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use log::info;

/// Default minimum time between two progress lines.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(3);

/// Receiver of progress events. All methods default to no-ops.
///
/// `advanced` may be called concurrently from several worker threads.
pub trait Progress: Sync {
    /// Counting of `total` problems is about to start.
    fn started(&self, _total: usize) {}

    /// `done` of `total` problems have been counted.
    fn advanced(&self, _done: usize, _total: usize) {}

    /// All `total` problems have been counted.
    fn finished(&self, _total: usize) {}
}

/// Reports nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Progress for Silent {}

/// Time-throttled gate: opens at most once per period.
#[derive(Debug)]
struct Ticker {
    update_at: Instant,
    period: Duration,
}

impl Ticker {
    fn should_update(&mut self, now: Instant) -> bool {
        if now >= self.update_at {
            self.update_at = now + self.period;
            true
        } else {
            false
        }
    }
}

/// Logs progress at `info` level, at most once per period.
///
/// Start and finish are always logged.
#[derive(Debug)]
pub struct LogProgress {
    label: String,
    started_at: Instant,
    ticker: Mutex<Ticker>,
}

impl LogProgress {
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_period(label, DEFAULT_PERIOD)
    }

    pub fn with_period(label: impl Into<String>, period: Duration) -> Self {
        let now = Instant::now();
        Self {
            label: label.into(),
            started_at: now,
            ticker: Mutex::new(Ticker {
                update_at: now + period,
                period,
            }),
        }
    }
}

impl Progress for LogProgress {
    fn started(&self, total: usize) {
        info!("{}: counting {} records", self.label, total);
    }

    fn advanced(&self, done: usize, total: usize) {
        let due = self
            .ticker
            .lock()
            .map(|mut ticker| ticker.should_update(Instant::now()))
            .unwrap_or(false);
        if due && total > 0 {
            info!(
                "{}: {:.1}% ({}/{})",
                self.label,
                done as f64 / total as f64 * 100.0,
                done,
                total
            );
        }
    }

    fn finished(&self, total: usize) {
        info!(
            "{}: counted {} records in {:.2?}",
            self.label,
            total,
            self.started_at.elapsed()
        );
    }
}
