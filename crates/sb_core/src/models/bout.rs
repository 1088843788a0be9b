//! Bout card labels.
//!
//! The roster collaborator supplies these strings (competitor names, weight
//! category, competition stage, wrestling style). The engine forwards them
//! to the display verbatim and never interprets them.

use serde::{Deserialize, Serialize};

/// Opaque display labels for the current bout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoutCard {
    pub red_wrestler: String,
    pub blue_wrestler: String,
    pub weight_category: String,
    pub stage: String,
    /// Wrestling style code, e.g. "FS" (freestyle) or "GR" (greco-roman).
    pub style: String,
}

impl BoutCard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for BoutCard {
    fn default() -> Self {
        Self {
            red_wrestler: String::new(),
            blue_wrestler: String::new(),
            weight_category: String::new(),
            stage: String::new(),
            style: "FS".to_string(),
        }
    }
}
