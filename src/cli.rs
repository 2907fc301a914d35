//! Command-line interface implementation for the stamp runner.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for the standalone runner.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "stamp: in-place placeholder replacement for scaffolded files",
    long_about = None
)]
pub struct Args {
    /// Path to the task definition file (JSON or YAML)
    #[arg(value_name = "TASK_FILE")]
    pub task_file: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
