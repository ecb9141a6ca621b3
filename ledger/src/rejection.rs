//! Structured rejection payloads.
//!
//! All business-rule failures share one numeric code; callers distinguish
//! failure kinds only by parsing the message text. Unknown-method failures
//! at the dispatch layer deliberately do NOT use this shape.

use serde::Serialize;
use std::fmt;

/// The single error code shared by every business-rule rejection.
pub const REJECT_CODE: u32 = 1000;

/// The payload returned to callers when a handler rejects an operation.
///
/// Serializes as `{"error": 1000, "message": "ERROR::[<op>] <desc>", "data": null}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Rejection {
    pub error: u32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

impl Rejection {
    /// Build a rejection for `operation` with a human-readable description.
    pub fn new(operation: &str, description: impl fmt::Display) -> Self {
        Self {
            error: REJECT_CODE,
            message: format!("ERROR::[{operation}] {description}"),
            data: None,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
