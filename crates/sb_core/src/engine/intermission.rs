//! Intermission handling on the main clock.
//!
//! A break repurposes the main clock for a fixed countdown and restores the
//! match time it displaced when it ends. Two exits exist: the operator
//! cancels, or the countdown runs out. Both restore the saved time and leave
//! the main clock stopped.

use serde::{Deserialize, Serialize};

use super::scoreboard::Scoreboard;

/// Default intermission length in seconds.
pub const BREAK_SECONDS: u32 = 30;

/// Match time displaced by a running break.
///
/// Only exists while a break is active — the board holds
/// `Option<BreakState>`, so a stale saved value is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakState {
    pub saved_main_seconds: u32,
}

impl Scoreboard {
    pub const fn is_break_active(&self) -> bool {
        self.break_state.is_some()
    }

    /// Begin an intermission of `seconds` on the main clock.
    ///
    /// Captures the current match time, loads the break countdown, and
    /// starts the main clock if it was not already running. Returns `false`
    /// (no-op) if a break is already active.
    pub fn start_break(&mut self, seconds: u32) -> bool {
        if self.break_state.is_some() {
            return false;
        }

        self.break_state = Some(BreakState {
            saved_main_seconds: self.main_clock.remaining_seconds(),
        });
        self.main_clock.set_remaining(seconds as i32);
        if !self.main_clock.is_running() {
            self.main_clock.start();
        }
        true
    }

    /// Operator-cancelled break: stop the main clock, restore the displaced
    /// match time, clear the break. Returns `false` (no-op) when no break is
    /// active.
    pub fn cancel_break(&mut self) -> bool {
        let Some(break_state) = self.break_state.take() else {
            return false;
        };

        self.main_clock.stop();
        self.main_clock
            .set_remaining(break_state.saved_main_seconds as i32);
        true
    }

    /// Natural break expiry: the clock has already stopped itself; restore
    /// the displaced match time. Returns the restored seconds.
    pub(crate) fn finish_break(&mut self) -> u32 {
        debug_assert!(!self.main_clock.is_running());

        let saved = self
            .break_state
            .take()
            .map(|state| state.saved_main_seconds)
            .unwrap_or(0);
        self.main_clock.set_remaining(saved as i32);
        saved
    }
}
