//! Periodic clock tick.

use gloo_timers::callback::Interval;
use log::debug;

/// A repeating wall-clock timer. Ticks are not drift-corrected.
///
/// The timer keeps firing for as long as the `Scheduler` is alive; dropping
/// it cancels the underlying interval.
pub struct Scheduler {
    _interval: Interval,
}

impl Scheduler {
    pub fn start<F>(period_ms: u32, on_tick: F) -> Self
    where
        F: FnMut() + 'static,
    {
        debug!("Starting clock scheduler every {} ms", period_ms);
        Self {
            _interval: Interval::new(period_ms, on_tick),
        }
    }
}
