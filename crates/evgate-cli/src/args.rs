use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::OutputFormat;

#[derive(Parser)]
#[command(name = "evgate")]
#[command(about = "Simulate a serverless event handler over local JSON files", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Handle a single JSON event file")]
    Run {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    #[command(about = "Handle every .json event file under a directory")]
    Batch {
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },

    #[command(about = "Write sample event files to experiment with")]
    Sample {
        #[arg(value_name = "DIR", default_value = "events")]
        dir: PathBuf,
    },
}
