//! Wall-clock pacing for the cooperative tick loop.
//!
//! The board owns no thread and no timer. A host loop polls `TickDriver`
//! between command reads and applies one `Session::tick_second` per due
//! tick, so ticks and commands interleave only at step boundaries — never
//! mid-mutation.

use std::time::{Duration, Instant};

/// Interval between scheduler ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Counts whole one-second ticks against a monotonic clock.
#[derive(Debug, Clone)]
pub struct TickDriver {
    last_tick: Instant,
}

impl TickDriver {
    pub fn new(now: Instant) -> Self {
        Self { last_tick: now }
    }

    pub fn start() -> Self {
        Self::new(Instant::now())
    }

    /// Whole seconds elapsed since the previous poll.
    ///
    /// A late poll catches up: polling after 3.4 s returns 3 and banks the
    /// 0.4 s remainder, so long command handling never loses match time.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let Some(elapsed) = now.checked_duration_since(self.last_tick) else {
            return 0;
        };
        let ticks = (elapsed.as_millis() / TICK_INTERVAL.as_millis()) as u32;
        self.last_tick += TICK_INTERVAL * ticks;
        ticks
    }
}
