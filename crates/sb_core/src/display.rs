//! Audience display push boundary.
//!
//! The display is a narrow fire-and-forget surface: the session calls it
//! after every mutation with the minimal delta, and nothing the display does
//! (or fails to do) can affect board state. A consumer may be absent at any
//! time — the session simply skips notification when no sink is attached.

use crate::error::DisplayError;
use crate::models::Corner;

/// Push contract for an audience-facing display.
///
/// Implementations render however they like (second monitor, LED panel,
/// terminal). Every method is best-effort: a returned error is logged by the
/// session and otherwise ignored, so implementations should report transport
/// failures rather than panic.
pub trait DisplaySink {
    fn update_score(&mut self, red: u32, blue: u32) -> Result<(), DisplayError>;

    /// Main clock, pre-rendered as `M:SS`.
    fn update_timer(&mut self, time: &str) -> Result<(), DisplayError>;

    /// Per-corner rest clock, pre-rendered as `M:SS`.
    fn update_rest_timer(&mut self, corner: Corner, time: &str) -> Result<(), DisplayError>;

    fn update_period(&mut self, period: u8) -> Result<(), DisplayError>;

    fn update_wrestlers(&mut self, red: &str, blue: &str) -> Result<(), DisplayError>;

    fn update_weight_category(&mut self, label: &str) -> Result<(), DisplayError>;

    fn update_stage(&mut self, label: &str) -> Result<(), DisplayError>;

    fn update_style(&mut self, label: &str) -> Result<(), DisplayError>;

    /// `Some(corner)` shows that corner's winner banner (and hides the
    /// other); `None` hides both.
    fn show_winner(&mut self, winner: Option<Corner>) -> Result<(), DisplayError>;

    /// Break indicator with its current countdown.
    fn show_break(&mut self, active: bool, seconds: u32) -> Result<(), DisplayError>;
}

/// Sink that renders nothing. Useful for tests and headless hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn update_score(&mut self, _red: u32, _blue: u32) -> Result<(), DisplayError> {
        Ok(())
    }

    fn update_timer(&mut self, _time: &str) -> Result<(), DisplayError> {
        Ok(())
    }

    fn update_rest_timer(&mut self, _corner: Corner, _time: &str) -> Result<(), DisplayError> {
        Ok(())
    }

    fn update_period(&mut self, _period: u8) -> Result<(), DisplayError> {
        Ok(())
    }

    fn update_wrestlers(&mut self, _red: &str, _blue: &str) -> Result<(), DisplayError> {
        Ok(())
    }

    fn update_weight_category(&mut self, _label: &str) -> Result<(), DisplayError> {
        Ok(())
    }

    fn update_stage(&mut self, _label: &str) -> Result<(), DisplayError> {
        Ok(())
    }

    fn update_style(&mut self, _label: &str) -> Result<(), DisplayError> {
        Ok(())
    }

    fn show_winner(&mut self, _winner: Option<Corner>) -> Result<(), DisplayError> {
        Ok(())
    }

    fn show_break(&mut self, _active: bool, _seconds: u32) -> Result<(), DisplayError> {
        Ok(())
    }
}
