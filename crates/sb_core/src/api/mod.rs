//! JSON boundary for host integrations.

pub mod json_api;

pub use json_api::{apply_command_json, snapshot_json};
