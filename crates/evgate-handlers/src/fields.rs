use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

/// Email syntax: non-empty local part, `@`, and a domain containing a dot.
/// Deliberately loose; the handler checks shape, not deliverability.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

pub(crate) fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Typed field extraction over a raw event object, accumulating one error
/// message per violation instead of short-circuiting.
///
/// Each accessor returns `None` exactly when it pushed an error, so once
/// `finish()` comes back empty every extracted value is `Some`.
pub(crate) struct FieldReader<'a> {
    event: &'a Map<String, Value>,
    errors: Vec<String>,
}

impl<'a> FieldReader<'a> {
    pub fn new(event: &'a Map<String, Value>) -> Self {
        Self {
            event,
            errors: Vec::new(),
        }
    }

    /// Required string field. JSON null counts as missing.
    pub fn string(&mut self, name: &str) -> Option<&'a str> {
        match self.event.get(name) {
            None | Some(Value::Null) => {
                self.errors.push(format!("missing {name}"));
                None
            }
            Some(Value::String(s)) => Some(s),
            Some(_) => {
                self.errors.push(format!("{name} must be a string"));
                None
            }
        }
    }

    /// Required numeric field (integer or float).
    pub fn number(&mut self, name: &str) -> Option<f64> {
        match self.event.get(name) {
            None | Some(Value::Null) => {
                self.errors.push(format!("missing {name}"));
                None
            }
            Some(Value::Number(n)) => match n.as_f64() {
                Some(v) => Some(v),
                None => {
                    self.errors.push(format!("{name} must be a number"));
                    None
                }
            },
            Some(_) => {
                self.errors.push(format!("{name} must be a number"));
                None
            }
        }
    }

    /// Required integer field. A float like `10.5` is a type violation.
    pub fn integer(&mut self, name: &str) -> Option<i64> {
        match self.event.get(name) {
            None | Some(Value::Null) => {
                self.errors.push(format!("missing {name}"));
                None
            }
            Some(Value::Number(n)) => match n.as_i64() {
                Some(i) => Some(i),
                None => {
                    self.errors.push(format!("{name} must be an integer"));
                    None
                }
            },
            Some(_) => {
                self.errors.push(format!("{name} must be an integer"));
                None
            }
        }
    }

    /// Record a rule violation for a field that extracted cleanly.
    pub fn reject(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn finish(self) -> Vec<String> {
        self.errors
    }
}
