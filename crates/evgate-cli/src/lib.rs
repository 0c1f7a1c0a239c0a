// NOTE: evgate CLI layering
//
// The binary is plumbing only: read files, hand each parsed value to
// evgate_handlers::handle, print the envelope. A rejected event is a normal
// envelope and exits 0; only I/O and JSON parse failures surface as
// anyhow errors (exit 1 in `run`, counted per-file in `batch`).

mod args;
mod commands;
mod handlers;
mod output;
mod types;

pub use args::{Cli, Commands};
pub use commands::run;
pub use types::OutputFormat;
