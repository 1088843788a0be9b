//! Aggregate board state for one bout.
//!
//! One `Scoreboard` instance exists per controlling session. It is a pure
//! state machine: every operation is a synchronous transition with no
//! rendering side effects. The session wrapper (`session.rs`) forwards the
//! resulting snapshot to the display.

use serde::{Deserialize, Serialize};

use super::clock::{Clock, TickOutcome};
use super::intermission::BreakState;
use super::penalty::PenaltyTracker;
use super::period::Period;
use super::score::ScoreTracker;
use crate::models::Corner;

/// Nominal rest-clock time for each corner.
pub const REST_CLOCK_SECONDS: u32 = 30;

/// What a main-clock tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainTickEvent {
    /// Clock stopped; nothing happened.
    Idle,
    /// One second consumed, time remains.
    Continuing,
    /// A running break reached zero. Match time was restored and the main
    /// clock left stopped — no operator input required.
    BreakFinished { restored_seconds: u32 },
    /// Match time ran out outside a break. End-of-period notice only:
    /// neither the period nor the score auto-advances.
    PeriodExpired,
}

/// Board state for one bout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub(crate) score: ScoreTracker,
    pub(crate) penalties: PenaltyTracker,
    pub(crate) period: Period,
    pub(crate) main_clock: Clock,
    pub(crate) red_rest: Clock,
    pub(crate) blue_rest: Clock,
    pub(crate) break_state: Option<BreakState>,
    pub(crate) winner: Option<Corner>,
}

impl Scoreboard {
    /// Fresh board: period 1, scores and cautions zero, main clock at the
    /// period-1 duration, rest clocks at nominal, everything stopped, no
    /// winner declared.
    pub fn new() -> Self {
        Self {
            score: ScoreTracker::new(),
            penalties: PenaltyTracker::new(),
            period: Period::One,
            main_clock: Clock::new(Period::One.duration_seconds()),
            red_rest: Clock::new(REST_CLOCK_SECONDS),
            blue_rest: Clock::new(REST_CLOCK_SECONDS),
            break_state: None,
            winner: None,
        }
    }

    /// Return every field to the initial configuration in one assignment —
    /// no partially reset board is ever observable.
    pub fn reset(&mut self) {
        *self = Scoreboard::new();
    }

    // ----- score -----

    /// Apply a signed score delta; returns the corner's new score.
    pub fn adjust_score(&mut self, corner: Corner, delta: i32) -> u32 {
        self.score.apply(corner, delta)
    }

    pub const fn score(&self, corner: Corner) -> u32 {
        self.score.get(corner)
    }

    /// Corner ahead on points, `None` on a tie. Never touches the declared
    /// winner.
    pub fn leader(&self) -> Option<Corner> {
        self.score.leader()
    }

    // ----- cautions -----

    pub fn cycle_penalty(&mut self, corner: Corner) -> u8 {
        self.penalties.cycle(corner)
    }

    pub const fn penalty(&self, corner: Corner) -> u8 {
        self.penalties.get(corner)
    }

    // ----- period -----

    /// Select a period. Out-of-range numbers are rejected silently. On
    /// acceptance the main clock is loaded with the canonical duration;
    /// its running flag is left alone — switching periods neither starts
    /// nor stops the clock.
    pub fn set_period(&mut self, number: u8) -> Option<Period> {
        let period = Period::from_number(number)?;
        self.period = period;
        self.main_clock.set_remaining(period.duration_seconds() as i32);
        Some(period)
    }

    pub const fn period(&self) -> Period {
        self.period
    }

    // ----- clocks -----

    pub const fn main_clock(&self) -> &Clock {
        &self.main_clock
    }

    pub fn start_main_clock(&mut self) {
        self.main_clock.start();
    }

    pub fn stop_main_clock(&mut self) {
        self.main_clock.stop();
    }

    pub fn adjust_main_clock(&mut self, delta: i32) {
        self.main_clock.adjust(delta);
    }

    pub fn set_main_clock(&mut self, seconds: i32) {
        self.main_clock.set_remaining(seconds);
    }

    pub const fn rest_clock(&self, corner: Corner) -> &Clock {
        match corner {
            Corner::Red => &self.red_rest,
            Corner::Blue => &self.blue_rest,
        }
    }

    pub(crate) fn rest_clock_mut(&mut self, corner: Corner) -> &mut Clock {
        match corner {
            Corner::Red => &mut self.red_rest,
            Corner::Blue => &mut self.blue_rest,
        }
    }

    pub fn start_rest_clock(&mut self, corner: Corner) {
        self.rest_clock_mut(corner).start();
    }

    pub fn stop_rest_clock(&mut self, corner: Corner) {
        self.rest_clock_mut(corner).stop();
    }

    pub fn adjust_rest_clock(&mut self, corner: Corner, delta: i32) {
        self.rest_clock_mut(corner).adjust(delta);
    }

    // ----- winner -----

    /// Declare a winner. Mutually exclusive by construction: declaring one
    /// corner clears the other. Always stops the main clock. Score and
    /// period are untouched; a new bout starts with `reset()`.
    pub fn declare_winner(&mut self, corner: Corner) {
        self.winner = Some(corner);
        self.main_clock.stop();
    }

    /// Back to the no-decision state.
    pub fn clear_winner(&mut self) {
        self.winner = None;
    }

    pub const fn winner(&self) -> Option<Corner> {
        self.winner
    }

    // ----- ticking -----

    /// Advance the main clock one second and resolve break expiry.
    pub fn tick_main(&mut self) -> MainTickEvent {
        match self.main_clock.tick() {
            TickOutcome::Idle => MainTickEvent::Idle,
            TickOutcome::Continuing => MainTickEvent::Continuing,
            TickOutcome::Expired => {
                if self.break_state.is_some() {
                    let restored_seconds = self.finish_break();
                    MainTickEvent::BreakFinished { restored_seconds }
                } else {
                    MainTickEvent::PeriodExpired
                }
            }
        }
    }

    /// Advance one corner's rest clock one second.
    pub fn tick_rest(&mut self, corner: Corner) -> TickOutcome {
        self.rest_clock_mut(corner).tick()
    }

    /// Current state condensed for a display or host.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            red_score: self.score.red(),
            blue_score: self.score.blue(),
            red_penalties: self.penalties.get(Corner::Red),
            blue_penalties: self.penalties.get(Corner::Blue),
            period: self.period.number(),
            main_remaining_seconds: self.main_clock.remaining_seconds(),
            main_clock_display: self.main_clock.formatted(),
            main_clock_running: self.main_clock.is_running(),
            red_rest_seconds: self.red_rest.remaining_seconds(),
            red_rest_running: self.red_rest.is_running(),
            blue_rest_seconds: self.blue_rest.remaining_seconds(),
            blue_rest_running: self.blue_rest.is_running(),
            break_active: self.break_state.is_some(),
            break_seconds: self
                .break_state
                .as_ref()
                .map(|_| self.main_clock.remaining_seconds()),
            winner: self.winner,
        }
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal board state pushed over a boundary after a mutation.
///
/// During a break the main clock carries the break countdown, so
/// `break_seconds` mirrors `main_remaining_seconds` while `break_active`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub red_score: u32,
    pub blue_score: u32,
    pub red_penalties: u8,
    pub blue_penalties: u8,
    pub period: u8,
    pub main_remaining_seconds: u32,
    pub main_clock_display: String,
    pub main_clock_running: bool,
    pub red_rest_seconds: u32,
    pub red_rest_running: bool,
    pub blue_rest_seconds: u32,
    pub blue_rest_running: bool,
    pub break_active: bool,
    pub break_seconds: Option<u32>,
    pub winner: Option<Corner>,
}
