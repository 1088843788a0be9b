//! Technical-point counters for the two corners.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::Corner;

/// Non-negative score counters, one per corner.
///
/// Judges enter bounded deltas (±1..±5 on the console), but any signed delta
/// is accepted; the floor at zero is the only enforced invariant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    red: u32,
    blue: u32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn get(&self, corner: Corner) -> u32 {
        match corner {
            Corner::Red => self.red,
            Corner::Blue => self.blue,
        }
    }

    pub const fn red(&self) -> u32 {
        self.red
    }

    pub const fn blue(&self) -> u32 {
        self.blue
    }

    /// Apply a signed delta and return the new value for that corner.
    pub fn apply(&mut self, corner: Corner, delta: i32) -> u32 {
        let slot = match corner {
            Corner::Red => &mut self.red,
            Corner::Blue => &mut self.blue,
        };
        *slot = (*slot as i64 + delta as i64).max(0) as u32;
        *slot
    }

    /// Corner currently ahead on points, `None` on a tie.
    ///
    /// Pure query — it never touches winner declaration. A tie is a normal
    /// answer, not an error.
    pub fn leader(&self) -> Option<Corner> {
        match self.red.cmp(&self.blue) {
            Ordering::Greater => Some(Corner::Red),
            Ordering::Less => Some(Corner::Blue),
            Ordering::Equal => None,
        }
    }
}
