//! Anti-gravity field configuration.
//!
//! A [`FieldConfig`] describes the oscillation driving the field: how strong
//! it is, how fast it oscillates, how far it reaches and how stable it is.
//! Strength and stability are fractions and are validated on every
//! construction path, including deserialization, so a config that exists is
//! always a valid one.
//!
//! # Example
//!
//! ```rust
//! use antigrav::FieldConfig;
//!
//! let field = FieldConfig::default();
//! assert_eq!(field.strength(), 0.8);
//! assert_eq!(field.frequency(), 9.8);
//!
//! let tuned = field.with_strength(0.9).unwrap();
//! assert_eq!(tuned.strength(), 0.9);
//! assert_eq!(field.strength(), 0.8); // original untouched
//! ```

use std::f64::consts::TAU;

use crate::error::{Result, ValidationError};
use crate::trajectory::linspace;

/// Default field strength (fraction of maximum).
pub const DEFAULT_STRENGTH: f64 = 0.8;
/// Default oscillation frequency in Hz.
pub const DEFAULT_FREQUENCY: f64 = 9.8;
/// Default field radius in meters.
pub const DEFAULT_RADIUS: f64 = 5.0;
/// Default field stability (fraction).
pub const DEFAULT_STABILITY: f64 = 0.95;

/// Oscillation parameters of an anti-gravity field.
///
/// Fields are private: once validated, a config can only be replaced by
/// another validated config, never edited in place. The `with_*` methods
/// return a fresh config and leave the receiver as it was.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFieldConfig"))]
pub struct FieldConfig {
    strength: f64,
    frequency: f64,
    radius: f64,
    stability: f64,
}

impl FieldConfig {
    /// Creates a validated field configuration.
    ///
    /// # Arguments
    ///
    /// * `strength` - Field strength, must lie in `[0.0, 1.0]`
    /// * `frequency` - Oscillation frequency in Hz (not range checked)
    /// * `radius` - Field radius in meters (not range checked)
    /// * `stability` - Field stability, must lie in `[0.0, 1.0]`
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::StrengthOutOfRange`] or
    /// [`ValidationError::StabilityOutOfRange`] when a fraction falls
    /// outside its range. Strength is checked first.
    pub fn new(strength: f64, frequency: f64, radius: f64, stability: f64) -> Result<Self> {
        if !is_fraction(strength) {
            return Err(ValidationError::StrengthOutOfRange(strength));
        }
        if !is_fraction(stability) {
            return Err(ValidationError::StabilityOutOfRange(stability));
        }
        Ok(Self {
            strength,
            frequency,
            radius,
            stability,
        })
    }

    /// Field strength in `[0.0, 1.0]`.
    #[inline]
    pub fn strength(&self) -> f64 {
        self.strength
    }

    /// Oscillation frequency in Hz.
    #[inline]
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Field radius in meters.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Field stability in `[0.0, 1.0]`.
    #[inline]
    pub fn stability(&self) -> f64 {
        self.stability
    }

    /// Peak undamped force: `strength × stability`.
    #[inline]
    pub fn amplitude(&self) -> f64 {
        self.strength * self.stability
    }

    /// Returns a copy with a different strength.
    ///
    /// # Errors
    ///
    /// Fails if `strength` is outside `[0.0, 1.0]`.
    pub fn with_strength(self, strength: f64) -> Result<Self> {
        Self::new(strength, self.frequency, self.radius, self.stability)
    }

    /// Returns a copy with a different frequency.
    ///
    /// # Errors
    ///
    /// Never fails for a config that is already valid; the signature
    /// matches the other builders.
    pub fn with_frequency(self, frequency: f64) -> Result<Self> {
        Self::new(self.strength, frequency, self.radius, self.stability)
    }

    /// Returns a copy with a different radius.
    ///
    /// # Errors
    ///
    /// Never fails for a config that is already valid.
    pub fn with_radius(self, radius: f64) -> Result<Self> {
        Self::new(self.strength, self.frequency, radius, self.stability)
    }

    /// Returns a copy with a different stability.
    ///
    /// # Errors
    ///
    /// Fails if `stability` is outside `[0.0, 1.0]`.
    pub fn with_stability(self, stability: f64) -> Result<Self> {
        Self::new(self.strength, self.frequency, self.radius, stability)
    }

    /// Samples the spatial field profile on a square grid.
    ///
    /// The grid spans `[-radius, radius]` on both axes with `resolution`
    /// points per axis. Each value is
    /// `strength × exp(-R²) × sin(2πR)` where `R` is the distance from the
    /// field center, so the field rings outward and dies off quickly.
    ///
    /// # Example
    ///
    /// ```rust
    /// use antigrav::FieldConfig;
    ///
    /// let surface = FieldConfig::default().surface(30);
    /// assert_eq!(surface.resolution(), 30);
    /// assert!(surface.peak() <= 0.8);
    /// ```
    pub fn surface(&self, resolution: usize) -> FieldSurface {
        let axis = linspace(-self.radius, self.radius, resolution);
        let mut values = Vec::with_capacity(resolution * resolution);
        for &y in &axis {
            for &x in &axis {
                let r = x.hypot(y);
                values.push(self.strength * (-r * r).exp() * (TAU * r).sin());
            }
        }
        FieldSurface { axis, values }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            strength: DEFAULT_STRENGTH,
            frequency: DEFAULT_FREQUENCY,
            radius: DEFAULT_RADIUS,
            stability: DEFAULT_STABILITY,
        }
    }
}

#[inline]
fn is_fraction(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Wire shape for deserialization. Missing keys take the defaults, then the
/// whole thing goes through [`FieldConfig::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawFieldConfig {
    strength: f64,
    frequency: f64,
    radius: f64,
    stability: f64,
}

#[cfg(feature = "serde")]
impl Default for RawFieldConfig {
    fn default() -> Self {
        Self {
            strength: DEFAULT_STRENGTH,
            frequency: DEFAULT_FREQUENCY,
            radius: DEFAULT_RADIUS,
            stability: DEFAULT_STABILITY,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawFieldConfig> for FieldConfig {
    type Error = ValidationError;

    fn try_from(raw: RawFieldConfig) -> Result<Self> {
        Self::new(raw.strength, raw.frequency, raw.radius, raw.stability)
    }
}

/// Square grid of field values produced by [`FieldConfig::surface`].
///
/// Rows run along the y axis and columns along the x axis, both sampled at
/// the same coordinates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldSurface {
    axis: Vec<f64>,
    values: Vec<f64>,
}

impl FieldSurface {
    /// Number of samples per axis.
    pub fn resolution(&self) -> usize {
        self.axis.len()
    }

    /// Sample coordinates along the x axis.
    pub fn xs(&self) -> &[f64] {
        &self.axis
    }

    /// Sample coordinates along the y axis (same as [`xs`](Self::xs)).
    pub fn ys(&self) -> &[f64] {
        &self.axis
    }

    /// Field value at `(row, col)`, or `None` outside the grid.
    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        let n = self.resolution();
        if row >= n || col >= n {
            return None;
        }
        self.values.get(row * n + col).copied()
    }

    /// Iterates over the grid one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks(0) panics, and an empty grid has no rows anyway
        self.values.chunks(self.resolution().max(1))
    }

    /// Largest absolute field value on the grid (0.0 when empty).
    pub fn peak(&self) -> f64 {
        self.values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn test_defaults() {
        let field = FieldConfig::default();
        assert_eq!(field.strength(), 0.8);
        assert_eq!(field.frequency(), 9.8);
        assert_eq!(field.radius(), 5.0);
        assert_eq!(field.stability(), 0.95);
    }

    #[test]
    fn test_new_echoes_values() {
        let field = FieldConfig::new(0.3, -2.5, 123.0, 0.6).unwrap();
        assert_eq!(field.strength(), 0.3);
        assert_eq!(field.frequency(), -2.5);
        assert_eq!(field.radius(), 123.0);
        assert_eq!(field.stability(), 0.6);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(FieldConfig::new(0.0, 1.0, 1.0, 0.0).is_ok());
        assert!(FieldConfig::new(1.0, 1.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn test_invalid_strength() {
        assert_eq!(
            FieldConfig::new(1.5, 9.8, 5.0, 0.95),
            Err(ValidationError::StrengthOutOfRange(1.5))
        );
        assert_eq!(
            FieldConfig::new(-0.01, 9.8, 5.0, 0.95),
            Err(ValidationError::StrengthOutOfRange(-0.01))
        );
    }

    #[test]
    fn test_invalid_stability() {
        assert_eq!(
            FieldConfig::new(0.8, 9.8, 5.0, -0.1),
            Err(ValidationError::StabilityOutOfRange(-0.1))
        );
    }

    #[test]
    fn test_strength_checked_before_stability() {
        let err = FieldConfig::new(2.0, 9.8, 5.0, 2.0).unwrap_err();
        assert!(matches!(err, ValidationError::StrengthOutOfRange(_)));
    }

    #[test]
    fn test_nan_fractions_rejected() {
        assert!(FieldConfig::new(f64::NAN, 9.8, 5.0, 0.95).is_err());
        assert!(FieldConfig::new(0.8, 9.8, 5.0, f64::NAN).is_err());
    }

    #[test]
    fn test_builders_leave_original_untouched() {
        let field = FieldConfig::default();
        let tuned = field
            .with_strength(0.5)
            .and_then(|f| f.with_frequency(2.0))
            .and_then(|f| f.with_radius(1.0))
            .and_then(|f| f.with_stability(0.5))
            .unwrap();

        assert_eq!(field, FieldConfig::default());
        assert_eq!(tuned, FieldConfig::new(0.5, 2.0, 1.0, 0.5).unwrap());
        assert!(field.with_stability(1.01).is_err());
    }

    #[test]
    fn test_amplitude() {
        assert!(approx_eq(FieldConfig::default().amplitude(), 0.8 * 0.95));
    }

    #[test]
    fn test_surface_shape() {
        let surface = FieldConfig::default().surface(5);
        assert_eq!(surface.resolution(), 5);
        assert_eq!(surface.xs(), &[-5.0, -2.5, 0.0, 2.5, 5.0]);
        assert_eq!(surface.rows().count(), 5);
        assert!(surface.rows().all(|row| row.len() == 5));
        assert_eq!(surface.value(5, 0), None);
    }

    #[test]
    fn test_surface_center_is_zero() {
        // sin(0) at the center
        let surface = FieldConfig::default().surface(5);
        assert!(approx_eq(surface.value(2, 2).unwrap(), 0.0));
    }

    #[test]
    fn test_surface_is_radially_symmetric() {
        let surface = FieldConfig::default().surface(7);
        let a = surface.value(1, 3).unwrap();
        let b = surface.value(3, 1).unwrap();
        let c = surface.value(5, 3).unwrap();
        assert!(approx_eq(a, b));
        assert!(approx_eq(a, c));
    }

    #[test]
    fn test_surface_peak_bounded_by_strength() {
        let field = FieldConfig::new(0.4, 1.0, 2.0, 1.0).unwrap();
        let surface = field.surface(41);
        assert!(surface.peak() > 0.0);
        assert!(surface.peak() <= 0.4);
    }

    #[test]
    fn test_empty_surface() {
        let surface = FieldConfig::default().surface(0);
        assert_eq!(surface.resolution(), 0);
        assert_eq!(surface.rows().count(), 0);
        assert_eq!(surface.peak(), 0.0);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_deserialize_fills_defaults() {
            let field: FieldConfig = serde_json::from_str(r#"{"strength": 0.5}"#).unwrap();
            assert_eq!(field.strength(), 0.5);
            assert_eq!(field.frequency(), DEFAULT_FREQUENCY);
            assert_eq!(field.stability(), DEFAULT_STABILITY);
        }

        #[test]
        fn test_deserialize_validates() {
            let result: std::result::Result<FieldConfig, _> =
                serde_json::from_str(r#"{"stability": 1.2}"#);
            let err = result.unwrap_err().to_string();
            assert!(err.contains("stability out of range"), "got: {err}");
        }

        #[test]
        fn test_serialize_field_names() {
            let json = serde_json::to_value(FieldConfig::default()).unwrap();
            assert_eq!(json["strength"], 0.8);
            assert_eq!(json["radius"], 5.0);
        }
    }
}
