//! Caution counters.
//!
//! Cautions only escalate during a bout: the single mutation is a cyclic
//! increment that wraps back to zero after the third caution. There is no
//! decrement and no direct set.

use serde::{Deserialize, Serialize};

use crate::models::Corner;

/// Number of caution states a corner cycles through (0..=3, then back to 0).
pub const PENALTY_WRAP: u8 = 4;

/// Per-corner caution counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyTracker {
    red: u8,
    blue: u8,
}

impl PenaltyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn get(&self, corner: Corner) -> u8 {
        match corner {
            Corner::Red => self.red,
            Corner::Blue => self.blue,
        }
    }

    /// Advance a corner's caution count by one, wrapping after three.
    /// Returns the new value.
    pub fn cycle(&mut self, corner: Corner) -> u8 {
        let slot = match corner {
            Corner::Red => &mut self.red,
            Corner::Blue => &mut self.blue,
        };
        *slot = (*slot + 1) % PENALTY_WRAP;
        *slot
    }
}
