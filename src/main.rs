use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use flatwalk::cli::Cli;
use flatwalk::core::{WalkOptions, Walker, flatten, write_flat_list};
use flatwalk::fs::RealFileSystem;
use flatwalk::process::IdentityProcessor;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("flatwalk=debug,warn")
    } else {
        EnvFilter::new("flatwalk=warn")
    };

    // Diagnostics go to stderr; stdout carries only the JSON result.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let requested = cli.path.unwrap_or_else(|| PathBuf::from("."));

    // Resolve the root up front: a bad root is a usage error, reported
    // in the binary's own voice rather than as a walk failure.
    let root = match std::fs::canonicalize(&requested) {
        Ok(root) => root,
        Err(err) => {
            eprintln!("flatwalk: {}: {}", requested.display(), err);
            return ExitCode::from(1);
        }
    };

    match std::fs::metadata(&root) {
        Ok(metadata) if metadata.is_dir() => {}
        Ok(_) => {
            eprintln!("flatwalk: {}: not a directory", requested.display());
            return ExitCode::from(1);
        }
        Err(err) => {
            eprintln!("flatwalk: {}: {}", requested.display(), err);
            return ExitCode::from(1);
        }
    }

    let options = WalkOptions {
        max_in_flight: cli.max_in_flight as usize,
    };
    let walker = Walker::new(
        Arc::new(RealFileSystem),
        Arc::new(IdentityProcessor),
        &options,
    );

    match walker.explore(&root).await {
        Ok(tree) => {
            let values = flatten(&tree);
            let stdout = std::io::stdout();
            let mut stdout = stdout.lock();
            if let Err(err) = write_flat_list(&mut stdout, &values) {
                eprintln!("flatwalk: failed to write output: {err}");
                return ExitCode::from(1);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "walk failed");
            eprintln!("flatwalk: {err}");
            ExitCode::from(1)
        }
    }
}
