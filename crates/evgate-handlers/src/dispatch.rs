use evgate_types::{Envelope, EventKind};
use serde_json::Value;

use crate::{payment, signup, upload};

/// Route a raw event to its validator and return the resulting envelope.
///
/// Total over arbitrary JSON values: anything that is not an object with a
/// recognized `type` comes back as an error envelope, never a panic or a
/// Rust-level error.
pub fn handle(event: &Value) -> Envelope {
    let Some(event) = event.as_object() else {
        return Envelope::error(
            "event must be a JSON object",
            vec!["expected a JSON object".to_string()],
        );
    };

    let kind = match event.get("type") {
        None | Some(Value::Null) => Err("missing".to_string()),
        Some(Value::String(value)) => {
            EventKind::parse(value).ok_or_else(|| format!("unsupported type: {value}"))
        }
        Some(other) => Err(format!("unsupported type: {other}")),
    };

    match kind {
        Ok(EventKind::UserSignup) => signup::handle(event),
        Ok(EventKind::Payment) => payment::handle(event),
        Ok(EventKind::FileUpload) => upload::handle(event),
        Err(offender) => Envelope::error("unsupported or missing event type", vec![offender]),
    }
}
