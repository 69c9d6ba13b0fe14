// Data-driven instrument selection.
//
// Front ends describe which recorder to build as a small JSON document
// rather than an integer code:
//
//   { "category": { "size": "alto", "convention": "german" } }
//
// Missing fields fall back to the soprano with Baroque fingering, matching
// `InstrumentCategory::default()`.

use serde::{Deserialize, Serialize};

use crate::category::InstrumentCategory;
use crate::recorder::Recorder;

/// Which recorder to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecorderConfig {
    pub category: InstrumentCategory,
}

impl RecorderConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn build(&self) -> Recorder {
        Recorder::new(self.category)
    }
}
