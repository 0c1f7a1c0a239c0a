use anyhow::{Result, ensure};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::handlers::run;
use crate::output;
use crate::types::OutputFormat;

/// Handle every `.json` file under `dir`, in path order.
///
/// Files that cannot be read or parsed are reported on stderr and counted,
/// but do not abort the batch; a rejected event is a normal envelope.
pub fn handle(dir: &Path, format: OutputFormat) -> Result<()> {
    ensure!(dir.is_dir(), "not a directory: {}", dir.display());

    let files: Vec<PathBuf> = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();

    let mut ok = 0usize;
    let mut rejected = 0usize;
    let mut unreadable = 0usize;

    for file in &files {
        match run::process(file) {
            Ok(envelope) => {
                if envelope.is_ok() {
                    ok += 1;
                } else {
                    rejected += 1;
                }
                output::print_envelope(file, &envelope, format)?;
            }
            Err(err) => {
                unreadable += 1;
                eprintln!("skipping {}: {:#}", file.display(), err);
            }
        }
    }

    if format == OutputFormat::Plain {
        println!(
            "{} event(s): {} ok, {} rejected, {} unreadable",
            files.len(),
            ok,
            rejected,
            unreadable
        );
    }

    Ok(())
}
