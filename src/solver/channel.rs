//! Channel configuration: matching radius and integration step
//!
//! The channel radius `a` is the radius beyond which the nuclear potential
//! is negligible and the wavefunction can be matched to its asymptotic
//! form. The step size `dr` controls the fixed-step outward integration.
//!
//! # Choosing a step size
//!
//! The integrator is first-order: halving `dr` approximately halves the
//! truncation error. A step that is too large relative to the potential's
//! curvature (steepest near `R0`, where the Woods-Saxon derivative peaks)
//! produces unstable or meaningless R-matrix values — that is a caller
//! responsibility, not something the solver silently corrects. The
//! reference step `dr = 0.001 fm` is comfortably converged for channel
//! radii of a few fm.

use crate::solver::SolverError;
use serde::{Deserialize, Serialize};

/// Fixed internal step size used by the boundary contract \[fm\]
///
/// The external request of [`api`](crate::api) does not expose `dr`;
/// it always integrates with this value, like the reference system.
pub const DEFAULT_STEP_SIZE: f64 = 0.001;

/// Default channel radius for the alpha-proton system \[fm\]
pub const DEFAULT_CHANNEL_RADIUS: f64 = 3.0;

/// Channel configuration for the radial integration
///
/// # Invariants
///
/// `0 < step_size < channel_radius`, both finite. Enforced by
/// [`validate`](Self::validate) before any integration begins.
///
/// # Example
///
/// ```rust
/// use pwave_rs::solver::ChannelConfig;
///
/// let channel = ChannelConfig::new(3.0, 0.001);
/// assert_eq!(channel.step_count(), 3000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Outer matching radius a \[fm\]
    pub channel_radius: f64,

    /// Integration step dr \[fm\]
    pub step_size: f64,
}

impl ChannelConfig {
    /// Create a new channel configuration (not validated)
    pub fn new(channel_radius: f64, step_size: f64) -> Self {
        Self { channel_radius, step_size }
    }

    /// Configuration with the fixed reference step size
    pub fn with_default_step(channel_radius: f64) -> Self {
        Self::new(channel_radius, DEFAULT_STEP_SIZE)
    }

    /// Number of integration steps N = floor(a / dr)
    pub fn step_count(&self) -> usize {
        (self.channel_radius / self.step_size) as usize
    }

    /// Check the configuration invariants
    pub fn validate(&self) -> Result<(), SolverError> {
        if !(self.channel_radius > 0.0) || !self.channel_radius.is_finite() {
            return Err(SolverError::invalid(
                "channel_radius",
                self.channel_radius,
                "must be positive and finite",
            ));
        }
        if !(self.step_size > 0.0) || !self.step_size.is_finite() {
            return Err(SolverError::invalid(
                "step_size",
                self.step_size,
                "must be positive and finite",
            ));
        }
        if self.step_size >= self.channel_radius {
            return Err(SolverError::invalid(
                "step_size",
                self.step_size,
                "must be smaller than the channel radius",
            ));
        }
        Ok(())
    }
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_RADIUS, DEFAULT_STEP_SIZE)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_count_floor() {
        assert_eq!(ChannelConfig::new(3.0, 0.001).step_count(), 3000);
        assert_eq!(ChannelConfig::new(1.0, 0.3).step_count(), 3);
    }

    #[test]
    fn test_default_matches_reference() {
        let channel = ChannelConfig::default();

        assert_eq!(channel.channel_radius, 3.0);
        assert_eq!(channel.step_size, 0.001);
    }

    #[test]
    fn test_validate_accepts_default() {
        assert!(ChannelConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_step() {
        assert!(ChannelConfig::new(3.0, 0.0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_radius() {
        assert!(ChannelConfig::new(-3.0, 0.001).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_step_not_smaller_than_radius() {
        assert!(ChannelConfig::new(1.0, 1.0).validate().is_err());
        assert!(ChannelConfig::new(1.0, 2.0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nan() {
        assert!(ChannelConfig::new(f64::NAN, 0.001).validate().is_err());
        assert!(ChannelConfig::new(3.0, f64::NAN).validate().is_err());
    }
}
