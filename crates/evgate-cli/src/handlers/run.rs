use anyhow::{Context, Result};
use evgate_types::Envelope;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::output;
use crate::types::OutputFormat;

pub fn handle(file: &Path, format: OutputFormat) -> Result<()> {
    let envelope = process(file)?;
    output::print_envelope(file, &envelope, format)
}

/// Read and parse one event file, then dispatch it.
///
/// I/O and JSON syntax failures are CLI errors; everything past parsing
/// comes back as an envelope.
pub(crate) fn process(file: &Path) -> Result<Envelope> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("failed to read event file: {}", file.display()))?;
    let event: Value = serde_json::from_str(&raw)
        .with_context(|| format!("invalid JSON in event file: {}", file.display()))?;
    Ok(evgate_handlers::handle(&event))
}
