//! Browser time source backed by `setTimeout`.

use chrono::{DateTime, Utc};
use std::future::Future;
use std::time::Duration;
use zipslides::Clock;

/// [`Clock`] for the page: `gloo-timers` sleeps, JS `Date` for now.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        gloo_timers::future::sleep(duration)
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
