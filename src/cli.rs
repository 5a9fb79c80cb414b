use clap::Parser;
use std::path::PathBuf;

use crate::core::{DEFAULT_MAX_IN_FLIGHT, MAX_IN_FLIGHT_LIMIT};

#[derive(Parser, Debug)]
#[command(name = "flatwalk")]
#[command(
    about = "Concurrently walk a directory tree and print its files as a flat JSON list",
    long_about = None
)]
pub struct Cli {
    /// Root directory to walk (defaults to current directory)
    pub path: Option<PathBuf>,

    /// Maximum number of filesystem operations in flight at once
    #[arg(
        short = 'j',
        long,
        value_name = "NUM",
        default_value_t = DEFAULT_MAX_IN_FLIGHT as u64,
        value_parser = clap::value_parser!(u64).range(1..=MAX_IN_FLIGHT_LIMIT as u64)
    )]
    pub max_in_flight: u64,

    /// Log per-directory progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
