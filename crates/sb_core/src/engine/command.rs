//! Operator command surface.
//!
//! Commands arrive from the console (or any host) as discrete, self-contained
//! requests. The wire format is a `cmd`-tagged JSON object, so hosts in other
//! languages can drive a session without sharing Rust types. A small FIFO
//! queue lets hosts collect input between scheduler ticks.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::models::Corner;

/// One operator request against the board.
///
/// There is no invalid-command error anywhere downstream: requests that are
/// out of range (period 5, negative-crossing clock adjustments) are clamped
/// or ignored so the console stays usable during live competition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Command {
    AdjustScore { corner: Corner, delta: i32 },
    CyclePenalty { corner: Corner },
    SetPeriod { period: u8 },
    StartMainClock,
    StopMainClock,
    AdjustMainClock { delta: i32 },
    SetMainClock { seconds: i32 },
    StartBreak,
    CancelBreak,
    StartRestClock { corner: Corner },
    StopRestClock { corner: Corner },
    AdjustRestClock { corner: Corner, delta: i32 },
    DeclareWinner { corner: Corner },
    ClearWinner,
    SetWrestlers { red: String, blue: String },
    SetWeightCategory { label: String },
    SetStage { label: String },
    SetStyle { label: String },
    Reset,
}

/// Operator command queue (FIFO).
#[derive(Debug, Default)]
pub struct CommandQueue {
    queue: VecDeque<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self { queue: VecDeque::new() }
    }

    pub fn enqueue(&mut self, command: Command) {
        self.queue.push_back(command);
    }

    pub fn pop_front(&mut self) -> Option<Command> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
