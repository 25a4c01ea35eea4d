#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Antigrav CLI
//!
//! Command-line front end for the [`antigrav`] field model.
//!
//! ## Usage
//!
//! ```bash
//! antigrav --mass 5 force --time 1.0
//! antigrav trajectory --duration 10 --steps 100 --plot
//! antigrav profile --duration 5 --plot
//! antigrav optimize --target 20 --apply
//! antigrav surface --resolution 30
//! antigrav --config lab.toml --format json demo
//! ```
//!
//! ## Library use
//!
//! ```rust
//! use antigrav_cli::{Cli, run};
//!
//! let cli = Cli::try_parse_from(["antigrav", "--format", "csv", "trajectory", "--steps", "5"])
//!     .unwrap();
//! let output = run(&cli).unwrap();
//! assert!(output.starts_with("time,height\n"));
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod plot;
pub mod report;

use anyhow::{Context, Result};

pub use cli::{Cli, Command, OutputFormat};
pub use config::{ConfigError, FileConfig, Settings};
pub use report::Report;

/// Resolves settings, runs the selected command and renders its report.
///
/// # Errors
///
/// Fails on config loading, invalid parameters or serialization errors.
pub fn run(cli: &Cli) -> Result<String> {
    let settings = Settings::from_cli(cli).context("failed to load configuration")?;
    let report = commands::execute(&cli.command, &settings)?;
    report
        .render(cli.format)
        .context("failed to render report")
}
