use std::fmt;

// NOTE: Why a closed enum (not a string registry)?
// The handler supports exactly three event kinds and unknown kinds are an
// error case with their own envelope, so an open-ended lookup table would
// only obscure the dispatch. A match over EventKind makes "did we handle
// every kind" a compiler question.

/// The three event kinds the handler recognizes.
///
/// The wire discriminator is the `type` field of the incoming event,
/// spelled in SCREAMING_SNAKE_CASE (`USER_SIGNUP`, `PAYMENT`, `FILE_UPLOAD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    UserSignup,
    Payment,
    FileUpload,
}

impl EventKind {
    /// Parse a wire discriminator. Exact match, no case folding.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "USER_SIGNUP" => Some(EventKind::UserSignup),
            "PAYMENT" => Some(EventKind::Payment),
            "FILE_UPLOAD" => Some(EventKind::FileUpload),
            _ => None,
        }
    }

    /// Wire name of this kind (`type` field value).
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::UserSignup => "USER_SIGNUP",
            EventKind::Payment => "PAYMENT",
            EventKind::FileUpload => "FILE_UPLOAD",
        }
    }

    /// All recognized kinds, in dispatch order.
    pub fn all() -> &'static [EventKind] {
        &[EventKind::UserSignup, EventKind::Payment, EventKind::FileUpload]
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
