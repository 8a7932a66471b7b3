//! Time source for the simulated delays.
//!
//! The screens suspend on fixed delays (auth round trip, per-file transfer).
//! The browser backs [`Clock`] with `gloo-timers`, the CLI with
//! `tokio::time`; [`InstantClock`] skips the wait entirely and remembers what
//! was asked of it.

use chrono::{DateTime, Utc};
use std::cell::RefCell;
use std::future::Future;
use std::time::Duration;

/// Sleep and wall-clock access.
///
/// Futures are not required to be `Send`: everything runs on one
/// cooperative thread.
pub trait Clock {
    /// Suspend for `duration`.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;

    /// Current wall-clock time.
    fn now(&self) -> DateTime<Utc>;
}

/// Resolves every sleep immediately.
#[derive(Debug, Default)]
pub struct InstantClock {
    fixed_now: Option<DateTime<Utc>>,
    sleeps: RefCell<Vec<Duration>>,
}

impl InstantClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock whose `now()` always returns `at`.
    pub fn frozen(at: DateTime<Utc>) -> Self {
        Self {
            fixed_now: Some(at),
            sleeps: RefCell::new(Vec::new()),
        }
    }

    /// Every duration passed to [`Clock::sleep`], in call order.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.borrow().clone()
    }
}

impl Clock for InstantClock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        self.sleeps.borrow_mut().push(duration);
        std::future::ready(())
    }

    fn now(&self) -> DateTime<Utc> {
        self.fixed_now.unwrap_or_else(Utc::now)
    }
}

/// Tokio-backed clock for the CLI.
#[cfg(feature = "cli")]
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioClock;

#[cfg(feature = "cli")]
impl Clock for TokioClock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
