//! Error types for field construction and simulation inputs.

use thiserror::Error;

/// Error returned when a field configuration or simulation input is rejected.
///
/// Every variant is raised before any computation happens, so a caller never
/// observes a partially built [`FieldConfig`](crate::FieldConfig) or a
/// truncated [`Trajectory`](crate::Trajectory).
///
/// # Example
///
/// ```rust
/// use antigrav::{FieldConfig, ValidationError};
///
/// let err = FieldConfig::new(1.5, 9.8, 5.0, 0.95).unwrap_err();
/// assert_eq!(err, ValidationError::StrengthOutOfRange(1.5));
/// assert!(err.to_string().starts_with("strength out of range"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Field strength outside `[0.0, 1.0]` (or NaN).
    #[error("strength out of range: {0} (expected 0.0..=1.0)")]
    StrengthOutOfRange(f64),

    /// Field stability outside `[0.0, 1.0]` (or NaN).
    #[error("stability out of range: {0} (expected 0.0..=1.0)")]
    StabilityOutOfRange(f64),

    /// Mass that is zero, negative, or not finite.
    ///
    /// Both the damping factor and the acceleration divide by mass, so a
    /// zero mass would otherwise surface as an infinite acceleration.
    #[error("mass must be finite and positive: {0}")]
    InvalidMass(f64),

    /// Trajectory or sampling duration that is negative or not finite.
    #[error("duration must be finite and non-negative: {0}")]
    InvalidDuration(f64),

    /// A trajectory or series was requested with zero steps.
    #[error("steps must be at least 1")]
    ZeroSteps,
}

impl ValidationError {
    /// Returns true if this error came from field parameter validation.
    pub fn is_field_error(&self) -> bool {
        matches!(
            self,
            Self::StrengthOutOfRange(_) | Self::StabilityOutOfRange(_)
        )
    }
}

/// A specialized [`Result`] type for antigrav operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ValidationError::StrengthOutOfRange(1.5).to_string(),
            "strength out of range: 1.5 (expected 0.0..=1.0)"
        );
        assert_eq!(
            ValidationError::StabilityOutOfRange(-0.1).to_string(),
            "stability out of range: -0.1 (expected 0.0..=1.0)"
        );
        assert_eq!(
            ValidationError::ZeroSteps.to_string(),
            "steps must be at least 1"
        );
        assert!(
            ValidationError::InvalidMass(0.0)
                .to_string()
                .contains("mass must be finite and positive")
        );
    }

    #[test]
    fn test_is_field_error() {
        assert!(ValidationError::StrengthOutOfRange(2.0).is_field_error());
        assert!(ValidationError::StabilityOutOfRange(2.0).is_field_error());
        assert!(!ValidationError::InvalidMass(0.0).is_field_error());
        assert!(!ValidationError::InvalidDuration(-1.0).is_field_error());
        assert!(!ValidationError::ZeroSteps.is_field_error());
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&ValidationError::ZeroSteps);
    }
}
