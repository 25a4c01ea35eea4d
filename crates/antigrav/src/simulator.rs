//! Point-mass simulator driven by an anti-gravity field.
//!
//! The force on the mass is
//!
//! ```text
//! F(t) = strength × sin(2π × frequency × t) × stability / (1 + 0.1 × mass)
//! ```
//!
//! rounded to four decimal places. Since strength and stability are
//! fractions and the damping factor never exceeds one for a positive mass,
//! `|F(t)| ≤ 1` for every `t`.

use std::f64::consts::TAU;

use tracing::{debug, trace, warn};

use crate::cursor::TimeCursor;
use crate::error::{Result, ValidationError};
use crate::field::FieldConfig;
use crate::trajectory::{ForceSeries, Trajectory, linspace};

/// Mass used by [`Simulator::default`], in kilograms.
pub const DEFAULT_MASS: f64 = 1.0;

/// Per-kilogram damping applied to the raw field force.
const MASS_DAMPING: f64 = 0.1;

/// Strength gained per meter of target height by [`Simulator::optimize_field`].
const STRENGTH_GAIN_PER_METER: f64 = 0.05;

/// Stability floor enforced by [`Simulator::optimize_field`].
const MIN_OPTIMIZED_STABILITY: f64 = 0.8;

/// Decimal places kept in force readings.
const FORCE_SCALE: f64 = 10_000.0;

/// A point mass sitting in an anti-gravity field.
///
/// The simulator owns its [`FieldConfig`] and a [`TimeCursor`] that is used
/// only by [`calculate_force(None)`](Self::calculate_force). Every other
/// operation takes explicit times and borrows `self` immutably.
///
/// # Example
///
/// ```rust
/// use antigrav::Simulator;
///
/// let mut sim = Simulator::new(5.0).unwrap();
///
/// // Explicit time: cursor untouched
/// let f = sim.calculate_force(Some(1.0));
/// assert!((-1.0..=1.0).contains(&f));
///
/// // Cursor-driven: reads t = 0.0, then moves to 0.1
/// assert_eq!(sim.calculate_force(None), 0.0);
/// assert!((sim.cursor().current() - 0.1).abs() < 1e-12);
///
/// let tuned = sim.optimize_field(20.0).unwrap();
/// assert_eq!(tuned.strength(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Simulator {
    mass: f64,
    field: FieldConfig,
    cursor: TimeCursor,
}

impl Simulator {
    /// Creates a simulator with the default field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidMass`] unless `mass` is finite and
    /// strictly positive.
    pub fn new(mass: f64) -> Result<Self> {
        Self::with_field(mass, FieldConfig::default())
    }

    /// Creates a simulator with a specific field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidMass`] unless `mass` is finite and
    /// strictly positive.
    pub fn with_field(mass: f64, field: FieldConfig) -> Result<Self> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(ValidationError::InvalidMass(mass));
        }
        debug!(
            mass,
            strength = field.strength(),
            frequency = field.frequency(),
            stability = field.stability(),
            "simulator created"
        );
        Ok(Self {
            mass,
            field,
            cursor: TimeCursor::new(),
        })
    }

    /// Mass in kilograms.
    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// The field currently acting on the mass.
    #[inline]
    pub fn field(&self) -> &FieldConfig {
        &self.field
    }

    /// The internal cursor used by cursor-driven force readings.
    #[inline]
    pub fn cursor(&self) -> TimeCursor {
        self.cursor
    }

    /// Replaces the field wholesale, returning the previous one.
    pub fn set_field(&mut self, field: FieldConfig) -> FieldConfig {
        std::mem::replace(&mut self.field, field)
    }

    /// Moves the internal cursor back to `t = 0`.
    pub fn reset_cursor(&mut self) {
        self.cursor.reset();
    }

    /// Force on the mass at time `t`, in Newtons, rounded to 4 decimals.
    ///
    /// Positive values push upward. NaN or infinite `t` propagates into the
    /// result as NaN.
    ///
    /// Exact ties at the fifth decimal round away from zero, so `0.03125`
    /// becomes `0.0313` rather than the ties-to-even `0.0312`.
    pub fn force_at(&self, t: f64) -> f64 {
        let raw = self.field.strength()
            * (TAU * self.field.frequency() * t).sin()
            * self.field.stability();
        let damped = raw * (1.0 / (1.0 + MASS_DAMPING * self.mass));
        round_force(damped)
    }

    /// Force at an explicit time, or at the internal cursor when `time` is
    /// `None`.
    ///
    /// The `None` path reads the cursor and then advances it by
    /// [`TIME_STEP`](crate::TIME_STEP), so two consecutive `None` calls
    /// return readings 0.1 s apart. `Some(t)` never touches the cursor.
    pub fn calculate_force(&mut self, time: Option<f64>) -> f64 {
        match time {
            Some(t) => self.force_at(t),
            None => {
                let t = self.cursor.advance();
                trace!(t, "cursor-driven force reading");
                self.force_at(t)
            }
        }
    }

    /// Force at a caller-owned cursor, advancing that cursor.
    ///
    /// Unlike `calculate_force(None)`, this leaves the simulator's own
    /// cursor alone, so several independent cursors can share one
    /// simulator.
    pub fn force_with_cursor(&self, cursor: &mut TimeCursor) -> f64 {
        self.force_at(cursor.advance())
    }

    /// Integrates the height of the mass from rest over `duration` seconds.
    ///
    /// Timestamps are `steps` evenly spaced points on `[0, duration]`, both
    /// ends included. At each timestamp the force is evaluated exactly as
    /// [`force_at`](Self::force_at) does, divided by the mass, and folded
    /// into velocity and height with forward Euler using
    /// `dt = duration / steps`.
    ///
    /// Velocity starts at zero on every call. The internal cursor is not
    /// used.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroSteps`] when `steps == 0` and
    /// [`ValidationError::InvalidDuration`] when `duration` is negative or
    /// not finite.
    #[allow(clippy::cast_precision_loss)]
    pub fn simulate_trajectory(&self, duration: f64, steps: usize) -> Result<Trajectory> {
        validate_sampling(duration, steps)?;
        let dt = duration / steps as f64;
        debug!(mass = self.mass, duration, steps, dt, "simulating trajectory");

        let trajectory = Trajectory::integrate(linspace(0.0, duration, steps), dt, self.mass, |t| {
            self.force_at(t)
        });

        debug!(
            final_height = trajectory.final_height(),
            max_height = trajectory.max_height(),
            "trajectory complete"
        );
        Ok(trajectory)
    }

    /// Samples the force at `samples` evenly spaced times on `[0, duration]`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`simulate_trajectory`](Self::simulate_trajectory).
    pub fn force_series(&self, duration: f64, samples: usize) -> Result<ForceSeries> {
        validate_sampling(duration, samples)?;
        debug!(duration, samples, "sampling force series");
        Ok(ForceSeries::sample(linspace(0.0, duration, samples), |t| {
            self.force_at(t)
        }))
    }

    /// Suggests a field for reaching `target_height` meters.
    ///
    /// This is a fixed heuristic, not a search:
    ///
    /// - strength becomes `min(1.0, strength × (1 + 0.05 × target_height))`
    /// - stability is raised to at least 0.8
    /// - frequency and radius carry over
    ///
    /// The returned config is new; the simulator's own field is unchanged.
    /// Use [`set_field`](Self::set_field) to adopt it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::StrengthOutOfRange`] when a negative
    /// target drives the strength below zero.
    pub fn optimize_field(&self, target_height: f64) -> Result<FieldConfig> {
        let current = &self.field;
        let scaled = current.strength() * (1.0 + target_height * STRENGTH_GAIN_PER_METER);
        let strength = scaled.min(1.0);
        let stability = current.stability().max(MIN_OPTIMIZED_STABILITY);

        if scaled > 1.0 {
            warn!(
                target_height,
                requested = scaled,
                "field strength saturated at 1.0"
            );
        }

        let optimized = FieldConfig::new(strength, current.frequency(), current.radius(), stability)?;
        debug!(
            target_height,
            from = current.strength(),
            to = optimized.strength(),
            stability = optimized.stability(),
            "field optimized"
        );
        Ok(optimized)
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self {
            mass: DEFAULT_MASS,
            field: FieldConfig::default(),
            cursor: TimeCursor::new(),
        }
    }
}

fn validate_sampling(duration: f64, steps: usize) -> Result<()> {
    if steps == 0 {
        return Err(ValidationError::ZeroSteps);
    }
    if !(duration.is_finite() && duration >= 0.0) {
        return Err(ValidationError::InvalidDuration(duration));
    }
    Ok(())
}

#[inline]
fn round_force(value: f64) -> f64 {
    (value * FORCE_SCALE).round() / FORCE_SCALE
}
