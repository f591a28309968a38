//! Woods-Saxon and Coulomb potential models
//!
//! # Mathematical Background
//!
//! The nuclear interaction is a Woods-Saxon well:
//!
//! ```text
//! V_ws(r) = -V0 / (1 + exp((r - R0) / a0))
//! ```
//!
//! a smoothed finite well of depth `V0`, radius `R0` and surface
//! diffuseness `a0`. At `r = R0` the well is at exactly half depth.
//!
//! The Coulomb interaction is the uniformly-charged-sphere model:
//!
//! ```text
//! V_c(r) = Z1Z2e² / r          for r > r0   (point-charge tail)
//! V_c(r) = r · Z1Z2e² / r0²    for r ≤ r0   (linear interior)
//! ```
//!
//! continuous at `r0` with value `Z1Z2e²/r0`, and zero at the origin.
//!
//! # Overflow policy
//!
//! For large positive `(r - R0)/a0` the exponential in the Woods-Saxon
//! term grows without bound. Beyond [`WS_EXP_CUTOFF`] the well is smaller
//! than `V0 · 1e-26`, far below f64 noise at any physical depth, so the
//! evaluation saturates to exactly `0.0` instead of evaluating `exp`.
//! This keeps the function total: no overflow, no NaN, for any `r ≥ 0`.
//!
//! # Example
//!
//! ```rust
//! use pwave_rs::models::{woods_saxon, coulomb_potential, PotentialParameters};
//! use pwave_rs::physics::PhysicalConstants;
//!
//! let params = PotentialParameters::new(40.0, 2.0, 0.6);
//! let constants = PhysicalConstants::alpha_proton();
//!
//! // Half depth at the nuclear radius
//! assert_eq!(woods_saxon(2.0, &params), -20.0);
//!
//! // Point-charge tail outside the sphere
//! assert!((coulomb_potential(3.0, 2.0, &constants) - 0.96).abs() < 1e-12);
//! ```

use crate::physics::PhysicalConstants;
use crate::solver::SolverError;
use serde::{Deserialize, Serialize};

/// Exponent bound above which the Woods-Saxon term saturates to zero
///
/// `exp(60) ≈ 1.1e26`, so the suppressed well depth is below `V0 · 1e-26`
/// — indistinguishable from zero at double precision for any physical `V0`.
pub const WS_EXP_CUTOFF: f64 = 60.0;

// =================================================================================================
// Potential parameters
// =================================================================================================

/// Woods-Saxon potential parameters
///
/// # Sign convention
///
/// Positive `v0` yields an attractive well (the evaluated potential is
/// negative inside the nucleus). Negative `v0` is accepted and gives a
/// repulsive barrier — the reference parameter ranges allow it.
///
/// # Invariants
///
/// `a0 > 0` (division by zero otherwise) and `r0 > 0`. Enforced by
/// [`validate`](Self::validate), which the solver calls before any
/// integration begins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PotentialParameters {
    /// Well depth V0 \[MeV\]
    pub v0: f64,

    /// Nuclear (and Coulomb sphere) radius R0 \[fm\]
    pub r0: f64,

    /// Surface diffuseness a0 \[fm\]
    pub a0: f64,
}

impl PotentialParameters {
    /// Create new parameters (not validated — see [`validate`](Self::validate))
    pub fn new(v0: f64, r0: f64, a0: f64) -> Self {
        Self { v0, r0, a0 }
    }

    /// Parameters with the nuclear depth forced to zero
    ///
    /// Used by the phase-shift engine as the "no nuclear potential"
    /// reference case.
    pub fn zero_depth(r0: f64, a0: f64) -> Self {
        Self { v0: 0.0, r0, a0 }
    }

    /// Check the parameter invariants
    ///
    /// Fails fast with [`SolverError::InvalidParameter`] so that no
    /// partial computation happens on bad input.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !self.v0.is_finite() {
            return Err(SolverError::invalid("V0", self.v0, "must be finite"));
        }
        if !(self.r0 > 0.0) || !self.r0.is_finite() {
            return Err(SolverError::invalid("R0", self.r0, "must be positive and finite"));
        }
        if !(self.a0 > 0.0) || !self.a0.is_finite() {
            return Err(SolverError::invalid("a0", self.a0, "must be positive and finite"));
        }
        Ok(())
    }
}

// =================================================================================================
// Potential evaluation
// =================================================================================================

/// Evaluate the Woods-Saxon potential at radius `r` \[MeV\]
///
/// Defined for all `r ≥ 0`. Saturates to `0.0` once the exponent exceeds
/// [`WS_EXP_CUTOFF`] (see the module documentation for the policy).
pub fn woods_saxon(r: f64, params: &PotentialParameters) -> f64 {
    let exponent = (r - params.r0) / params.a0;
    if exponent > WS_EXP_CUTOFF {
        return 0.0;
    }
    -params.v0 / (1.0 + exponent.exp())
}

/// Evaluate the uniformly-charged-sphere Coulomb potential at radius `r` \[MeV\]
///
/// Point-charge tail `Z1Z2e²/r` outside the sphere radius `r0`, linear
/// interior `r·Z1Z2e²/r0²` inside. Continuous at `r0`, zero at `r = 0`.
pub fn coulomb_potential(r: f64, r0: f64, constants: &PhysicalConstants) -> f64 {
    if r > r0 {
        constants.z1z2_e2 / r
    } else {
        r * constants.z1z2_e2 / (r0 * r0)
    }
}

// =================================================================================================
// The model/solver seam
// =================================================================================================

/// Trait for radial potentials
///
/// # Responsibility
///
/// Evaluates the interaction at a radius. Does NOT integrate anything
/// (that's the radial integrator's job).
///
/// The model provides the "physics" (the potential), the solver provides
/// the "numerics" (the stepping scheme). The integrator is written against
/// this trait, so the same scheme serves the nuclear-only and the combined
/// variant — and any potential a test wants to inject.
pub trait RadialPotential: Send + Sync {
    /// Potential value at radius `r` \[MeV\]
    fn evaluate(&self, r: f64) -> f64;

    /// Name of the potential (used for display and logging)
    fn name(&self) -> &str;
}

/// Woods-Saxon potential alone
#[derive(Debug, Clone, Copy)]
pub struct NuclearPotential<'a> {
    params: &'a PotentialParameters,
}

impl<'a> NuclearPotential<'a> {
    pub fn new(params: &'a PotentialParameters) -> Self {
        Self { params }
    }
}

impl RadialPotential for NuclearPotential<'_> {
    fn evaluate(&self, r: f64) -> f64 {
        woods_saxon(r, self.params)
    }

    fn name(&self) -> &str {
        "Woods-Saxon"
    }
}

/// Coulomb + Woods-Saxon combined potential
#[derive(Debug, Clone, Copy)]
pub struct CombinedPotential<'a> {
    params: &'a PotentialParameters,
    constants: &'a PhysicalConstants,
}

impl<'a> CombinedPotential<'a> {
    pub fn new(params: &'a PotentialParameters, constants: &'a PhysicalConstants) -> Self {
        Self { params, constants }
    }
}

impl RadialPotential for CombinedPotential<'_> {
    fn evaluate(&self, r: f64) -> f64 {
        coulomb_potential(r, self.params.r0, self.constants) + woods_saxon(r, self.params)
    }

    fn name(&self) -> &str {
        "Coulomb + Woods-Saxon"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
