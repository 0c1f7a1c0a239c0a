use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::fs;
use std::path::Path;

/// Sample events covering all three kinds, valid and invalid, plus the
/// unknown-type case.
fn sample_events() -> Vec<(&'static str, Value)> {
    vec![
        (
            "signup_ok.json",
            json!({ "type": "USER_SIGNUP", "email": "Ada@Example.com", "plan": "pro" }),
        ),
        (
            "signup_bad_email.json",
            json!({ "type": "USER_SIGNUP", "email": "bad-email", "plan": "free" }),
        ),
        (
            "payment_ok.json",
            json!({ "type": "PAYMENT", "amount": 100, "currency": "USD" }),
        ),
        (
            "payment_rejected.json",
            json!({ "type": "PAYMENT", "amount": -5, "currency": "XRP" }),
        ),
        (
            "upload_standard.json",
            json!({ "type": "FILE_UPLOAD", "uploader_email": "ops@example.com", "size_bytes": 2048 }),
        ),
        (
            "upload_glacier.json",
            json!({ "type": "FILE_UPLOAD", "uploader_email": "ops@example.com", "size_bytes": 52_428_800_u64 }),
        ),
        (
            "unknown_type.json",
            json!({ "type": "DELETE_USER", "user_id": 7 }),
        ),
    ]
}

pub fn handle(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create sample directory: {}", dir.display()))?;

    let events = sample_events();
    for (name, event) in &events {
        let path = dir.join(name);
        let contents = serde_json::to_string_pretty(event)?;
        fs::write(&path, contents)
            .with_context(|| format!("failed to write sample event: {}", path.display()))?;
    }

    println!("wrote {} sample event(s) to {}", events.len(), dir.display());
    Ok(())
}
