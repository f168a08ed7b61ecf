//! CLI Adapter.

use std::io::{self, Write};

use clap::Parser;

use crate::app::{api, logging};
use crate::domain::{AppError, SessionOutcome};

#[derive(Parser)]
#[command(name = "level-gen")]
#[command(version)]
#[command(
    about = "Collect demo/*png image paths for level generation",
    long_about = "Prompts for image paths until `q` (quit) or `n` (next step). \
                  Paths must start with `demo/` and end with `png`. \
                  On `n`, accepted paths are printed to stdout one per line."
)]
struct Cli {}

/// Entry point for the CLI.
pub fn run() {
    let _cli = Cli::parse();
    logging::init();

    let result = api::collect_images().and_then(|outcome| write_handoff(&outcome));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn write_handoff(outcome: &SessionOutcome) -> Result<(), AppError> {
    let mut stdout = io::stdout().lock();
    for path in outcome.handoff() {
        writeln!(stdout, "{path}")?;
    }
    stdout.flush()?;
    Ok(())
}
