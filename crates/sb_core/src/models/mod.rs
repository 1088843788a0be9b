pub mod bout;

pub use bout::BoutCard;

use serde::{Deserialize, Serialize};

/// Mat corner.
///
/// Every per-competitor counter on the board (score, cautions, rest clock)
/// is addressed by corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    Red,
    Blue,
}

impl Corner {
    #[inline]
    pub const fn opposite(self) -> Corner {
        match self {
            Corner::Red => Corner::Blue,
            Corner::Blue => Corner::Red,
        }
    }

    /// Scoreboard label for this corner.
    pub const fn label(self) -> &'static str {
        match self {
            Corner::Red => "RED",
            Corner::Blue => "BLUE",
        }
    }
}
