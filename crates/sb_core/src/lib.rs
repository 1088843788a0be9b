//! # sb_core - Wrestling Bout Scoreboard Engine
//!
//! Pure state machine for a two-corner wrestling bout: score, cautions,
//! periods, a main match clock with intermission handling, and two
//! per-corner rest clocks. Every mutation is mirrored best-effort to an
//! attached audience display through a narrow push contract.
//!
//! ## Design
//! - Single controlling session, cooperative one-second ticking, no
//!   internal locking
//! - Operator input is never a hard error: out-of-range requests are
//!   clamped or silently ignored so the console stays usable mid-bout
//! - The display consumer is optional and fallible; its failures are
//!   logged and can never corrupt board state

pub mod api;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;

pub use api::{apply_command_json, snapshot_json};
pub use display::{DisplaySink, NullDisplay};
pub use engine::{
    format_seconds, BoardSnapshot, Clock, Command, CommandQueue, MainTickEvent, Period, Scoreboard,
    Session, TickDriver, TickOutcome, TickReport, BREAK_SECONDS, REST_CLOCK_SECONDS,
    TICK_INTERVAL,
};
pub use error::{BoardError, DisplayError, Result};
pub use models::{BoutCard, Corner};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    /// A full bout driven through the JSON API, end to end.
    #[test]
    fn test_scripted_bout() {
        let mut session = Session::new();

        let script = [
            r#"{"cmd":"set_wrestlers","red":"N. Makhin","blue":"P. Orlov"}"#,
            r#"{"cmd":"set_weight_category","label":"65 kg"}"#,
            r#"{"cmd":"set_stage","label":"FINAL 1-2"}"#,
            r#"{"cmd":"start_main_clock"}"#,
            r#"{"cmd":"adjust_score","corner":"red","delta":2}"#,
            r#"{"cmd":"adjust_score","corner":"blue","delta":4}"#,
            r#"{"cmd":"cycle_penalty","corner":"red"}"#,
        ];
        for request in script {
            apply_command_json(&mut session, request).unwrap();
        }

        // First period runs out.
        for _ in 0..=360 {
            session.tick_second();
        }
        assert_eq!(session.board().main_clock().remaining_seconds(), 0);
        assert!(!session.board().main_clock().is_running());

        // Operator moves to the second period and finishes the bout.
        apply_command_json(&mut session, r#"{"cmd":"set_period","period":2}"#).unwrap();
        apply_command_json(&mut session, r#"{"cmd":"start_main_clock"}"#).unwrap();
        apply_command_json(&mut session, r#"{"cmd":"adjust_score","corner":"blue","delta":2}"#)
            .unwrap();

        assert_eq!(session.board().leader(), Some(Corner::Blue));
        apply_command_json(&mut session, r#"{"cmd":"declare_winner","corner":"blue"}"#).unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.winner, Some(Corner::Blue));
        assert_eq!(snapshot.red_score, 2);
        assert_eq!(snapshot.blue_score, 6);
        assert!(!snapshot.main_clock_running);

        // New bout.
        apply_command_json(&mut session, r#"{"cmd":"reset"}"#).unwrap();
        assert_eq!(session.snapshot(), Scoreboard::new().snapshot());
        assert_eq!(session.bout().red_wrestler, "N. Makhin");
    }

    #[test]
    fn test_version_is_exported() {
        assert!(!VERSION.is_empty());
    }
}
