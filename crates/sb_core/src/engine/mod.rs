//! Board state machine and tick logic.

pub mod clock;
pub mod command;
pub mod intermission;
pub mod penalty;
pub mod period;
pub mod score;
pub mod scoreboard;
pub mod session;
pub mod ticker;

pub use clock::{format_seconds, Clock, TickOutcome};
pub use command::{Command, CommandQueue};
pub use intermission::{BreakState, BREAK_SECONDS};
pub use penalty::{PenaltyTracker, PENALTY_WRAP};
pub use period::{Period, PERIOD_ONE_SECONDS, PERIOD_TWO_SECONDS};
pub use score::ScoreTracker;
pub use scoreboard::{BoardSnapshot, MainTickEvent, Scoreboard, REST_CLOCK_SECONDS};
pub use session::{Session, TickReport};
pub use ticker::{TickDriver, TICK_INTERVAL};
