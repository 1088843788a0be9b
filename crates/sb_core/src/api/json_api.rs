//! String-in/string-out command API.
//!
//! Hosts that cannot share Rust types (UI shells, scripting layers) drive a
//! session with one JSON command per call and read back the resulting board
//! snapshot. Parse failures happen before any mutation, so a malformed
//! request never leaves the board half-changed.

use crate::engine::{Command, Session};
use crate::error::Result;

/// Parse one `cmd`-tagged command, apply it, and return the resulting
/// snapshot as JSON.
pub fn apply_command_json(session: &mut Session, request: &str) -> Result<String> {
    let command: Command = serde_json::from_str(request)?;
    session.apply(command);
    snapshot_json(session)
}

/// Current board snapshot as JSON.
pub fn snapshot_json(session: &Session) -> Result<String> {
    Ok(serde_json::to_string(&session.snapshot())?)
}
