use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::NormalizedRecord;

/// Envelope outcome: `"ok"` or `"error"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "ok"),
            Status::Error => write!(f, "error"),
        }
    }
}

/// Uniform response wrapper returned for every event, success or failure.
///
/// Invariant: `status == Ok` iff `errors` is empty and `data` is populated;
/// `status == Error` iff `errors` is non-empty and `data` is `{}`. The
/// constructors are the only way handlers build envelopes, which keeps the
/// invariant out of their hands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub status: Status,
    pub message: String,
    pub data: NormalizedRecord,
    pub errors: Vec<String>,
}

impl Envelope {
    /// Success envelope carrying a normalized record.
    pub fn ok(message: impl Into<String>, data: NormalizedRecord) -> Self {
        Self {
            status: Status::Ok,
            message: message.into(),
            data,
            errors: Vec::new(),
        }
    }

    /// Error envelope carrying the accumulated violations and empty data.
    pub fn error(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
            data: NormalizedRecord::empty(),
            errors,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}
