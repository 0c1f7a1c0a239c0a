use anyhow::Result;
use evgate_types::Envelope;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::path::Path;

use crate::types::OutputFormat;

/// Print one envelope for one event source.
///
/// `json` emits a single compact line per event for piping; `plain` prefixes
/// a status line (colored when stdout is a terminal) and pretty-prints.
pub fn print_envelope(source: &Path, envelope: &Envelope, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(envelope)?);
        }
        OutputFormat::Plain => {
            println!("{} {}", status_label(envelope), source.display());
            println!("{}", serde_json::to_string_pretty(envelope)?);
        }
    }
    Ok(())
}

fn status_label(envelope: &Envelope) -> String {
    let color = std::io::stdout().is_terminal();
    match (envelope.is_ok(), color) {
        (true, true) => "ok".green().to_string(),
        (true, false) => "ok".to_string(),
        (false, true) => "error".red().to_string(),
        (false, false) => "error".to_string(),
    }
}
