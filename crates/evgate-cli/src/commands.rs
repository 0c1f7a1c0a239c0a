use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::handlers;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run { file } => handlers::run::handle(&file, cli.format),
        Commands::Batch { dir } => handlers::batch::handle(&dir, cli.format),
        Commands::Sample { dir } => handlers::sample::handle(&dir),
    }
}
