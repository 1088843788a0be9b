//! Match periods and their canonical clock durations.

use serde::{Deserialize, Serialize};

/// First period runs six minutes.
pub const PERIOD_ONE_SECONDS: u32 = 360;
/// Second period runs three minutes.
pub const PERIOD_TWO_SECONDS: u32 = 180;

/// Bout period. A bout has exactly two; the type makes a third unrepresentable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    #[default]
    One,
    Two,
}

impl Period {
    /// Accepts only 1 or 2. Anything else yields `None` and the caller
    /// treats the selection as a silent no-op.
    pub const fn from_number(n: u8) -> Option<Period> {
        match n {
            1 => Some(Period::One),
            2 => Some(Period::Two),
            _ => None,
        }
    }

    pub const fn number(self) -> u8 {
        match self {
            Period::One => 1,
            Period::Two => 2,
        }
    }

    /// Canonical main-clock duration for this period.
    pub const fn duration_seconds(self) -> u32 {
        match self {
            Period::One => PERIOD_ONE_SECONDS,
            Period::Two => PERIOD_TWO_SECONDS,
        }
    }
}
