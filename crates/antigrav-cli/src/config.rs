//! Runtime configuration for `antigrav`.
//!
//! [`Settings`] is the single source of truth for a run. It is resolved in
//! layers, each overriding the one before:
//!
//! 1. built-in defaults
//! 2. the TOML config file (`--config` / `ANTIGRAV_CONFIG`)
//! 3. command-line flags and their environment variables
//!
//! # Config file
//!
//! Every key is optional:
//!
//! ```toml
//! mass = 5.0
//!
//! [field]
//! strength = 0.8
//! frequency = 9.8
//! radius = 5.0
//! stability = 0.95
//!
//! [trajectory]
//! duration = 10.0
//! steps = 100
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use antigrav::{FieldConfig, ValidationError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::cli::{Cli, FieldArgs};

/// Trajectory duration used when neither the file nor the flags set one.
pub const DEFAULT_DURATION: f64 = 10.0;
/// Trajectory step count used when neither the file nor the flags set one.
pub const DEFAULT_STEPS: usize = 100;

/// Errors raised while loading or resolving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has unknown keys.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path that was being parsed.
        path: PathBuf,
        /// The underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// The merged field parameters or mass are invalid.
    #[error("invalid configuration: {0}")]
    Field(#[from] ValidationError),
}

/// On-disk shape of the config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Mass in kilograms.
    pub mass: Option<f64>,
    /// Field parameter overrides.
    pub field: FieldOverrides,
    /// Trajectory defaults.
    pub trajectory: TrajectoryConfig,
}

/// Optional field parameters; unset keys keep their lower-layer value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldOverrides {
    pub strength: Option<f64>,
    pub frequency: Option<f64>,
    pub radius: Option<f64>,
    pub stability: Option<f64>,
}

/// Optional trajectory defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrajectoryConfig {
    pub duration: Option<f64>,
    pub steps: Option<usize>,
}

impl FileConfig {
    /// Loads a config file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] or [`ConfigError::Parse`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Parses config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error for malformed input or unknown keys.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

impl FieldOverrides {
    /// Layers `self` on top of `base`, validating the result.
    fn apply(&self, base: FieldConfig) -> Result<FieldConfig, ValidationError> {
        FieldConfig::new(
            self.strength.unwrap_or(base.strength()),
            self.frequency.unwrap_or(base.frequency()),
            self.radius.unwrap_or(base.radius()),
            self.stability.unwrap_or(base.stability()),
        )
    }
}

impl From<&FieldArgs> for FieldOverrides {
    fn from(args: &FieldArgs) -> Self {
        Self {
            strength: args.strength,
            frequency: args.frequency,
            radius: args.radius,
            stability: args.stability,
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    /// Mass in kilograms, when a flag, env var or the config file sets one.
    ///
    /// Left unset so each command can pick its own default; see
    /// [`Settings::mass_or`].
    pub mass: Option<f64>,
    /// Field acting on the mass.
    pub field: FieldConfig,
    /// Default trajectory duration in seconds.
    pub duration: f64,
    /// Default trajectory step count.
    pub steps: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mass: None,
            field: FieldConfig::default(),
            duration: DEFAULT_DURATION,
            steps: DEFAULT_STEPS,
        }
    }
}

impl Settings {
    /// Resolves settings from CLI arguments, loading the config file if one
    /// was given.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be loaded or the merged field is invalid.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::resolve(&file, cli.mass, &FieldOverrides::from(&cli.field))
    }

    /// Merges defaults, file config and flag overrides.
    ///
    /// # Errors
    ///
    /// Fails if either layer produces an invalid field.
    pub fn resolve(
        file: &FileConfig,
        mass: Option<f64>,
        flags: &FieldOverrides,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let field = flags.apply(file.field.apply(defaults.field)?)?;

        let settings = Self {
            mass: mass.or(file.mass),
            field,
            duration: file.trajectory.duration.unwrap_or(defaults.duration),
            steps: file.trajectory.steps.unwrap_or(defaults.steps),
        };
        debug!(?settings, "resolved settings");
        Ok(settings)
    }

    /// The configured mass, or `default` when nothing set one.
    #[must_use]
    pub fn mass_or(&self, default: f64) -> f64 {
        self.mass.unwrap_or(default)
    }
}
