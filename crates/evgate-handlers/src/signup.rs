use evgate_types::{Envelope, NormalizedRecord, Plan, SignupRecord};
use serde_json::{Map, Value};

use crate::fields::{FieldReader, is_email};

/// Validate and normalize a USER_SIGNUP event.
///
/// Requires `email` (valid syntax) and `plan` (one of `free`, `pro`, `edu`,
/// exact match). The normalized record carries the lowercased email.
pub fn handle(event: &Map<String, Value>) -> Envelope {
    let mut fields = FieldReader::new(event);

    let email = match fields.string("email") {
        Some(value) if is_email(value) => Some(value),
        Some(_) => {
            fields.reject("invalid email");
            None
        }
        None => None,
    };

    let plan = match fields.string("plan") {
        Some(value) => match Plan::parse(value) {
            Some(plan) => Some(plan),
            None => {
                fields.reject("invalid plan");
                None
            }
        },
        None => None,
    };

    let errors = fields.finish();
    match (email, plan) {
        (Some(email), Some(plan)) if errors.is_empty() => Envelope::ok(
            "user registered",
            NormalizedRecord::Signup(SignupRecord::new(email, plan)),
        ),
        _ => Envelope::error("validation failed", errors),
    }
}
