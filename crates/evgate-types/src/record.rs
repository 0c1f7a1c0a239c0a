use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Subscription plan accepted for signups.
///
/// Matching is case-sensitive: `"Free"` is rejected, `"free"` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Free,
    Pro,
    Edu,
}

impl Plan {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "free" => Some(Plan::Free),
            "pro" => Some(Plan::Pro),
            "edu" => Some(Plan::Edu),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Free => "free",
            Plan::Pro => "pro",
            Plan::Edu => "edu",
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settlement currency accepted for payments.
///
/// Input is case-folded to uppercase before matching, so `"usd"` and `"USD"`
/// both settle as [`Currency::Usd`]; the normalized record always carries
/// the uppercase code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Bhd,
    Usd,
    Eur,
}

impl Currency {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_uppercase().as_str() {
            "BHD" => Some(Currency::Bhd),
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Bhd => "BHD",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage tier assigned to an upload by size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageClass {
    Standard,
    StandardIa,
    Glacier,
}

/// 1 MB tier boundary (binary megabyte).
pub const STANDARD_IA_THRESHOLD: u64 = 1_048_576;

/// 50 MB tier boundary (binary megabytes).
pub const GLACIER_THRESHOLD: u64 = 52_428_800;

impl StorageClass {
    /// Classify by byte size. Lower bound inclusive, upper bound exclusive:
    /// 1_048_575 is STANDARD, 1_048_576 is STANDARD_IA, 52_428_800 is GLACIER.
    pub fn from_size(size_bytes: u64) -> Self {
        if size_bytes < STANDARD_IA_THRESHOLD {
            StorageClass::Standard
        } else if size_bytes < GLACIER_THRESHOLD {
            StorageClass::StandardIa
        } else {
            StorageClass::Glacier
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageClass::Standard => "STANDARD",
            StorageClass::StandardIa => "STANDARD_IA",
            StorageClass::Glacier => "GLACIER",
        }
    }
}

impl fmt::Display for StorageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical record for a validated USER_SIGNUP event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRecord {
    /// Account email, lowercased.
    pub email: String,
    pub plan: Plan,
    pub status: String,
}

impl SignupRecord {
    pub fn new(email: &str, plan: Plan) -> Self {
        Self {
            email: email.to_lowercase(),
            plan,
            status: "registered".to_string(),
        }
    }
}

/// Canonical record for a validated PAYMENT event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub amount: f64,
    pub currency: Currency,
    /// Processing fee, rounded to 2 decimals.
    pub fee: f64,
    /// Amount minus fee, rounded to 2 decimals.
    pub net: f64,
    pub status: String,
}

impl PaymentRecord {
    pub fn new(amount: f64, currency: Currency, fee: f64, net: f64) -> Self {
        Self {
            amount,
            currency,
            fee,
            net,
            status: "processed".to_string(),
        }
    }
}

/// Canonical record for a validated FILE_UPLOAD event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadRecord {
    /// Uploader email, lowercased.
    pub uploader_email: String,
    pub size_bytes: u64,
    pub storage_class: StorageClass,
    pub status: String,
}

impl UploadRecord {
    pub fn new(uploader_email: &str, size_bytes: u64) -> Self {
        Self {
            uploader_email: uploader_email.to_lowercase(),
            size_bytes,
            storage_class: StorageClass::from_size(size_bytes),
            status: "uploaded".to_string(),
        }
    }
}

/// Normalized payload carried in the `data` field of an envelope.
///
/// Untagged: each record serializes as a plain object, and the `Empty`
/// variant (used by every error envelope) serializes as `{}`. On the
/// deserialize side `Empty` sits last so it only catches objects that match
/// no record shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NormalizedRecord {
    Signup(SignupRecord),
    Payment(PaymentRecord),
    Upload(UploadRecord),
    Empty(Map<String, Value>),
}

impl NormalizedRecord {
    /// The empty object every error envelope carries.
    pub fn empty() -> Self {
        NormalizedRecord::Empty(Map::new())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, NormalizedRecord::Empty(map) if map.is_empty())
    }
}

impl Default for NormalizedRecord {
    fn default() -> Self {
        Self::empty()
    }
}
