//! Command-line interface for `antigrav`.
//!
//! # Examples
//!
//! ```bash
//! # Force at a given time for a 5 kg mass
//! antigrav --mass 5 force --time 1.0
//!
//! # Ten-second trajectory with a chart
//! antigrav --mass 5 trajectory --duration 10 --plot
//!
//! # Tune the field for 20 m and re-run with it
//! antigrav optimize --target 20 --apply
//!
//! # Machine-readable output
//! antigrav --format json trajectory --steps 50
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Simulate a point mass in an oscillating anti-gravity field.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "antigrav",
    author,
    version,
    about = "Simulate a point mass in an oscillating anti-gravity field",
    long_about = "Evaluate field forces, integrate height trajectories and tune \
                  the field toward a target levitation height."
)]
pub struct Cli {
    /// Mass of the object in kilograms [default: 1.0, or 5.0 for `demo`]
    #[arg(long, short = 'm', global = true, env = "ANTIGRAV_MASS")]
    pub mass: Option<f64>,

    /// Path to a TOML config file
    #[arg(long, short = 'c', global = true, env = "ANTIGRAV_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub field: FieldArgs,

    /// Output format
    #[arg(long, short = 'f', global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable colored output
    ///
    /// Respects the `NO_COLOR` environment variable
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Enable verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Field parameter overrides. Anything left unset falls back to the config
/// file and then to the built-in defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct FieldArgs {
    /// Field strength (0.0 to 1.0)
    #[arg(long, global = true)]
    pub strength: Option<f64>,

    /// Oscillation frequency in Hz
    #[arg(long, global = true)]
    pub frequency: Option<f64>,

    /// Field radius in meters
    #[arg(long, global = true)]
    pub radius: Option<f64>,

    /// Field stability (0.0 to 1.0)
    #[arg(long, global = true)]
    pub stability: Option<f64>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Evaluate the field force
    Force(ForceArgs),

    /// Integrate the height trajectory over time
    Trajectory(TrajectoryArgs),

    /// Sample the field force over time
    Profile(ProfileArgs),

    /// Suggest a field configuration for a target height
    Optimize(OptimizeArgs),

    /// Sample the spatial field profile on a grid
    Surface(SurfaceArgs),

    /// Run the guided walk-through
    Demo,
}

/// Arguments for `force`.
#[derive(Args, Debug, Clone)]
pub struct ForceArgs {
    /// Explicit time in seconds; omit to step a cursor from t = 0
    #[arg(long, short = 't', allow_negative_numbers = true)]
    pub time: Option<f64>,

    /// Number of cursor readings when no time is given
    #[arg(long, short = 'n', default_value_t = 1, conflicts_with = "time")]
    pub count: usize,
}

/// Arguments for `trajectory`.
#[derive(Args, Debug, Clone)]
pub struct TrajectoryArgs {
    /// Simulation duration in seconds
    #[arg(long, short = 'd')]
    pub duration: Option<f64>,

    /// Number of time steps
    #[arg(long, short = 's')]
    pub steps: Option<usize>,

    /// Draw an ASCII chart of height over time (text format only)
    #[arg(long)]
    pub plot: bool,
}

/// Arguments for `profile`.
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// Sampling window in seconds
    #[arg(long, short = 'd', default_value_t = 5.0)]
    pub duration: f64,

    /// Number of samples
    #[arg(long, short = 's', default_value_t = 200)]
    pub samples: usize,

    /// Draw an ASCII chart of force over time (text format only)
    #[arg(long)]
    pub plot: bool,
}

/// Arguments for `optimize`.
#[derive(Args, Debug, Clone)]
pub struct OptimizeArgs {
    /// Desired levitation height in meters
    #[arg(long, short = 't', default_value_t = 10.0, allow_negative_numbers = true)]
    pub target: f64,

    /// Re-run the trajectory with the optimized field and compare
    #[arg(long)]
    pub apply: bool,

    /// Duration of the comparison run (with --apply)
    #[arg(long, short = 'd', requires = "apply")]
    pub duration: Option<f64>,

    /// Steps of the comparison run (with --apply)
    #[arg(long, short = 's', requires = "apply")]
    pub steps: Option<usize>,
}

/// Arguments for `surface`.
#[derive(Args, Debug, Clone)]
pub struct SurfaceArgs {
    /// Grid points per axis
    #[arg(long, short = 'r', default_value_t = 30)]
    pub resolution: usize,
}

/// Output formats.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// Comma-separated values with a header row
    Csv,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }
}
