//! Error types for physics calculations.
//!
//! Every calculation validates its inputs before computing anything, so a
//! caller only ever sees a finite result or one of these errors.

use thiserror::Error;

/// A specialized Result type for physics calculations.
pub type PhysicsResult<T> = std::result::Result<T, PhysicsError>;

/// Errors that can occur during physics calculations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// Malformed or out-of-physical-range input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unknown particle name. Carries the names that would have matched.
    #[error("Particle '{name}' not found. Available: {}", .known.join(", "))]
    NotFound { name: String, known: Vec<String> },

    /// A computed result violates a physical invariant, which points at bad
    /// input data (e.g. a non-existent isotope) rather than a bug.
    #[error("Numerical inconsistency: {0}")]
    NumericalInconsistency(String),
}

impl PhysicsError {
    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new "not found" error listing the known names.
    pub fn not_found<I, S>(name: impl Into<String>, known: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::NotFound {
            name: name.into(),
            known: known.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a new numerical inconsistency error.
    pub fn inconsistent(msg: impl Into<String>) -> Self {
        Self::NumericalInconsistency(msg.into())
    }

    /// Short machine-readable kind, used in structured tool output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::NotFound { .. } => "not_found",
            Self::NumericalInconsistency(_) => "numerical_inconsistency",
        }
    }
}

/// Reject NaN and infinities for a named input.
pub(crate) fn ensure_finite(name: &str, value: f64) -> PhysicsResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PhysicsError::validation(format!(
            "{name} must be a finite number, got {value}"
        )))
    }
}

/// Reject negative (and non-finite) values for a named input.
pub(crate) fn ensure_non_negative(name: &str, value: f64) -> PhysicsResult<f64> {
    let value = ensure_finite(name, value)?;
    if value < 0.0 {
        return Err(PhysicsError::validation(format!(
            "{name} must be non-negative, got {value}"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_lists_known_names() {
        let err = PhysicsError::not_found("graviton", ["electron", "muon"]);
        assert_eq!(
            err.to_string(),
            "Particle 'graviton' not found. Available: electron, muon"
        );
        assert_eq!(err.kind(), "not_found");
    }

    #[test]
    fn test_ensure_finite_rejects_nan() {
        assert!(ensure_finite("mass", f64::NAN).is_err());
        assert!(ensure_finite("mass", f64::INFINITY).is_err());
        assert_eq!(ensure_finite("mass", 1.5), Ok(1.5));
    }

    #[test]
    fn test_ensure_non_negative() {
        assert!(ensure_non_negative("momentum", -0.1).is_err());
        assert_eq!(ensure_non_negative("momentum", 0.0), Ok(0.0));
    }
}
