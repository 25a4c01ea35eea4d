#![forbid(unsafe_code)]

//! # Antigrav
//!
//! Simulate a point mass in an oscillating anti-gravity field.
//!
//! ## Usage
//!
//! ```bash
//! antigrav --mass 5 trajectory --plot
//! antigrav optimize --target 20 --apply
//! ```

use std::io::Write;

use anyhow::Context;
use antigrav_cli::{Cli, logging, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let output = run(&cli)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("failed to write output")?;
    stdout.flush().context("failed to flush output")?;
    Ok(())
}
