#![forbid(unsafe_code)]
// Allow these clippy lints for physics/math code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::float_cmp)]

//! # Antigrav
//!
//! A toy model of an oscillating "anti-gravity" field acting on a point
//! mass.
//!
//! Antigrav provides:
//! - **FieldConfig**: validated oscillation parameters (strength, frequency,
//!   radius, stability)
//! - **Simulator**: force evaluation, forward-Euler height trajectories and a
//!   fixed heuristic for tuning the field toward a target height
//! - **TimeCursor**: an explicit, copyable clock for step-by-step readings
//!
//! ## Example
//!
//! ```rust
//! use antigrav::{FieldConfig, Simulator};
//!
//! let mut sim = Simulator::new(5.0)?;
//!
//! let force = sim.calculate_force(Some(1.0));
//! assert!((-1.0..=1.0).contains(&force));
//!
//! let trajectory = sim.simulate_trajectory(10.0, 100)?;
//! println!("final height: {:.2} m", trajectory.final_height().unwrap_or(0.0));
//!
//! let tuned: FieldConfig = sim.optimize_field(20.0)?;
//! sim.set_field(tuned);
//! # Ok::<(), antigrav::ValidationError>(())
//! ```
//!
//! ## Force model
//!
//! ```text
//! F(t) = strength · sin(2π · frequency · t) · stability · 1 / (1 + 0.1 · mass)
//! ```
//!
//! Readings are rounded to four decimal places. Trajectories integrate
//! `a = F / mass` from rest with `dt = duration / steps`; accuracy improves
//! with more steps, there is no adaptive step control.
//!
//! ## Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`FieldConfig`] (validated on
//!   the way in) and `Serialize` for the sampled outputs.

mod cursor;
mod error;
mod field;
mod simulator;
mod trajectory;

pub use cursor::{TIME_STEP, TimeCursor};
pub use error::{Result, ValidationError};
pub use field::{
    DEFAULT_FREQUENCY, DEFAULT_RADIUS, DEFAULT_STABILITY, DEFAULT_STRENGTH, FieldConfig,
    FieldSurface,
};
pub use simulator::{DEFAULT_MASS, Simulator};
pub use trajectory::{ForceSeries, Trajectory, linspace};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cursor::{TIME_STEP, TimeCursor};
    pub use crate::error::ValidationError;
    pub use crate::field::{FieldConfig, FieldSurface};
    pub use crate::simulator::Simulator;
    pub use crate::trajectory::{ForceSeries, Trajectory};
}
