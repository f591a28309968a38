//! Solver error taxonomy
//!
//! Two failure classes, both local to a single grid cell:
//!
//! - [`SolverError::InvalidParameter`] — an invariant on the potential or
//!   channel configuration is violated. Detected before integration
//!   begins; no partial computation happens.
//! - [`SolverError::NumericalSingularity`] — the integration reached the
//!   matching radius with a zero derivative (the R-matrix ratio would
//!   divide by zero) or a non-finite wavefunction. Raised explicitly so
//!   the boundary layer reports failure instead of serializing NaN/inf.
//!
//! Woods-Saxon exponential overflow is not an error: the evaluation
//! saturates to zero beyond a documented cutoff
//! (see [`WS_EXP_CUTOFF`](crate::models::WS_EXP_CUTOFF)).

use thiserror::Error;

/// Errors produced by the radial integrator and the batch evaluator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// A parameter invariant is violated (fails fast, nothing computed)
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The wavefunction derivative vanished (or went non-finite) at the
    /// matching radius, so the R-matrix ratio is undefined
    #[error("numerical singularity at r = {radius} fm: {detail}")]
    NumericalSingularity {
        radius: f64,
        detail: &'static str,
    },
}

impl SolverError {
    /// Shorthand constructor for [`SolverError::InvalidParameter`]
    pub fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter { name, value, reason }
    }

    /// Shorthand constructor for [`SolverError::NumericalSingularity`]
    pub fn singularity(radius: f64, detail: &'static str) -> Self {
        Self::NumericalSingularity { radius, detail }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = SolverError::invalid("a0", 0.0, "must be positive and finite");

        assert_eq!(
            err.to_string(),
            "invalid parameter a0 = 0: must be positive and finite"
        );
    }

    #[test]
    fn test_singularity_display() {
        let err = SolverError::singularity(3.0, "u'(a) is zero");

        assert!(err.to_string().contains("r = 3 fm"));
        assert!(err.to_string().contains("u'(a) is zero"));
    }

    #[test]
    fn test_variants_are_distinguishable() {
        let invalid = SolverError::invalid("R0", -1.0, "must be positive and finite");
        let singular = SolverError::singularity(1.0, "non-finite wavefunction");

        assert_ne!(invalid, singular);
        assert!(matches!(invalid, SolverError::InvalidParameter { .. }));
        assert!(matches!(singular, SolverError::NumericalSingularity { .. }));
    }
}
