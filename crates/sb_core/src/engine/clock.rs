//! Countdown clock primitive.
//!
//! Three instances drive the board: the main match clock and the two
//! per-corner rest clocks. All share one contract: one-second ticks, a hard
//! floor at zero, and an expiry that fires exactly once per run-down.

use serde::{Deserialize, Serialize};

/// Outcome of a one-second tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickOutcome {
    /// The clock is stopped; the tick was ignored.
    Idle,
    /// One second was consumed and the clock keeps running.
    Continuing,
    /// The clock was ticked at zero and stopped itself. Reported once:
    /// later ticks see a stopped clock and return `Idle`.
    Expired,
}

/// One-second countdown clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    remaining_seconds: u32,
    is_running: bool,
}

impl Clock {
    /// A stopped clock holding `seconds`.
    pub const fn new(seconds: u32) -> Self {
        Self { remaining_seconds: seconds, is_running: false }
    }

    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub const fn is_running(&self) -> bool {
        self.is_running
    }

    /// Idempotent.
    pub fn start(&mut self) {
        self.is_running = true;
    }

    /// Idempotent.
    pub fn stop(&mut self) {
        self.is_running = false;
    }

    /// Consume one second of a running clock.
    ///
    /// Counting down to zero still reports `Continuing`; the expiry fires on
    /// the following tick, when a running clock is ticked at zero.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running {
            return TickOutcome::Idle;
        }

        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
            TickOutcome::Continuing
        } else {
            self.is_running = false;
            TickOutcome::Expired
        }
    }

    /// Add a signed number of seconds, clamped at a floor of zero.
    ///
    /// A negative adjustment that would cross zero lands on exactly zero.
    /// The running flag is never touched.
    pub fn adjust(&mut self, delta: i32) {
        let next = self.remaining_seconds as i64 + delta as i64;
        self.remaining_seconds = next.max(0) as u32;
    }

    /// Overwrite the remaining time, clamped at zero. Running flag untouched.
    pub fn set_remaining(&mut self, seconds: i32) {
        self.remaining_seconds = seconds.max(0) as u32;
    }

    /// Remaining time rendered for the display.
    pub fn formatted(&self) -> String {
        format_seconds(self.remaining_seconds)
    }
}

/// Render seconds as `M:SS` — minutes unpadded, seconds two-digit.
///
/// 360 → "6:00", 90 → "1:30", 0 → "0:00".
pub fn format_seconds(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_seconds_table() {
        assert_eq!(format_seconds(360), "6:00");
        assert_eq!(format_seconds(180), "3:00");
        assert_eq!(format_seconds(90), "1:30");
        assert_eq!(format_seconds(0), "0:00");
        assert_eq!(format_seconds(61), "1:01");
        assert_eq!(format_seconds(600), "10:00");
    }

    #[test]
    fn test_start_stop_idempotent() {
        let mut clock = Clock::new(10);
        assert!(!clock.is_running());

        clock.start();
        clock.start();
        assert!(clock.is_running());

        clock.stop();
        clock.stop();
        assert!(!clock.is_running());
        assert_eq!(clock.remaining_seconds(), 10);
    }

    #[test]
    fn test_tick_counts_down_while_running() {
        let mut clock = Clock::new(3);
        clock.start();

        assert_eq!(clock.tick(), TickOutcome::Continuing);
        assert_eq!(clock.tick(), TickOutcome::Continuing);
        assert_eq!(clock.tick(), TickOutcome::Continuing);
        assert_eq!(clock.remaining_seconds(), 0);
        assert!(clock.is_running());
    }

    #[test]
    fn test_tick_on_stopped_clock_is_noop() {
        let mut clock = Clock::new(5);
        assert_eq!(clock.tick(), TickOutcome::Idle);
        assert_eq!(clock.remaining_seconds(), 5);
    }

    #[test]
    fn test_expiry_fires_exactly_once() {
        let mut clock = Clock::new(1);
        clock.start();

        assert_eq!(clock.tick(), TickOutcome::Continuing);
        assert_eq!(clock.tick(), TickOutcome::Expired);
        assert!(!clock.is_running());
        assert_eq!(clock.remaining_seconds(), 0);

        // Later ticks see a stopped clock, not a repeated expiry.
        assert_eq!(clock.tick(), TickOutcome::Idle);
        assert_eq!(clock.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_adjust_clamps_at_zero() {
        let mut clock = Clock::new(5);
        clock.start();

        clock.adjust(-10);
        assert_eq!(clock.remaining_seconds(), 0);
        // Crossing zero never stops the clock as a side effect.
        assert!(clock.is_running());

        clock.adjust(42);
        assert_eq!(clock.remaining_seconds(), 42);
    }

    #[test]
    fn test_set_remaining_clamps_and_keeps_running_flag() {
        let mut clock = Clock::new(100);
        clock.start();

        clock.set_remaining(-3);
        assert_eq!(clock.remaining_seconds(), 0);
        assert!(clock.is_running());

        clock.stop();
        clock.set_remaining(180);
        assert_eq!(clock.remaining_seconds(), 180);
        assert!(!clock.is_running());
    }

    proptest! {
        #[test]
        fn prop_format_matches_minutes_seconds(seconds in 0u32..100_000) {
            let formatted = format_seconds(seconds);
            let (minutes, secs) = formatted.split_once(':').unwrap();
            prop_assert_eq!(minutes.parse::<u32>().unwrap(), seconds / 60);
            prop_assert_eq!(secs.len(), 2);
            prop_assert_eq!(secs.parse::<u32>().unwrap(), seconds % 60);
        }

        #[test]
        fn prop_adjust_tracks_saturating_model(start in 0u32..10_000, deltas in proptest::collection::vec(-600i32..600, 0..32)) {
            let mut clock = Clock::new(start);
            let mut model = start as i64;
            for delta in deltas {
                clock.adjust(delta);
                model = (model + delta as i64).max(0);
                prop_assert_eq!(clock.remaining_seconds() as i64, model);
            }
        }
    }
}
