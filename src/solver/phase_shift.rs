//! Nuclear phase-shift engine
//!
//! # Method
//!
//! The nuclear phase shift is isolated from the Coulomb background by
//! differencing two R-matrix values:
//!
//! 1. `r_full` — Coulomb + Woods-Saxon with the supplied parameters,
//!    scaled by 1/a ([`r_matrix_coulomb_nuclear`]).
//! 2. `r_reference` — nuclear-only integration with a zero-depth
//!    reference potential ([`r_matrix_nuclear_only`]), cancelling the
//!    centrifugal/barrier contribution.
//! 3. `δ = atan(r_full − r_reference)`.
//!
//! The arctangent returns the **principal value**: δ always lies in
//! (−π/2, π/2). Callers tracking a resonance across an energy grid, where
//! the physical phase crosses ±π/2, must unwrap branches themselves.
//!
//! # Reference potential
//!
//! The reference case is part of the engine's configuration, not a pair
//! of constants buried in the computation. [`PhaseShiftEngine::alpha_proton`]
//! uses the reference system's values (`V0 = 0, R0 = 2.0 fm, a0 = 0.6 fm`);
//! tests can supply any other zero-depth reference independently.

use crate::models::PotentialParameters;
use crate::physics::PhysicalConstants;
use crate::solver::radial::{r_matrix_coulomb_nuclear, r_matrix_nuclear_only};
use crate::solver::{ChannelConfig, SolverError};

/// Default reference radius for the "no nuclear potential" case \[fm\]
pub const REFERENCE_R0: f64 = 2.0;

/// Default reference diffuseness for the "no nuclear potential" case \[fm\]
pub const REFERENCE_A0: f64 = 0.6;

/// Phase-shift engine with a configurable reference potential
///
/// # Example
///
/// ```rust
/// use pwave_rs::models::PotentialParameters;
/// use pwave_rs::solver::{ChannelConfig, PhaseShiftEngine};
///
/// let engine = PhaseShiftEngine::alpha_proton();
/// let params = PotentialParameters::new(40.0, 2.0, 0.6);
/// let channel = ChannelConfig::new(3.0, 0.001);
///
/// let delta = engine.nuclear_phase_shift(10.0, &params, &channel, 0).unwrap();
/// assert!(delta.abs() < std::f64::consts::FRAC_PI_2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseShiftEngine {
    /// Physical constants of the two-body system
    constants: PhysicalConstants,

    /// Reference potential (zero depth) used to cancel the Coulomb-free
    /// background
    reference: PotentialParameters,
}

impl PhaseShiftEngine {
    /// Create an engine with explicit constants and reference potential
    pub fn new(constants: PhysicalConstants, reference: PotentialParameters) -> Self {
        Self { constants, reference }
    }

    /// Engine for the alpha-proton system with the reference defaults
    pub fn alpha_proton() -> Self {
        Self::new(
            PhysicalConstants::alpha_proton(),
            PotentialParameters::zero_depth(REFERENCE_R0, REFERENCE_A0),
        )
    }

    /// The physical constants this engine integrates with
    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// The configured reference potential
    pub fn reference(&self) -> &PotentialParameters {
        &self.reference
    }

    /// Nuclear phase shift for one (energy, L) pair \[rad\]
    ///
    /// Always in (−π/2, π/2). Errors from either integration propagate
    /// unchanged; nothing is masked as NaN.
    pub fn nuclear_phase_shift(
        &self,
        energy: f64,
        params: &PotentialParameters,
        channel: &ChannelConfig,
        l: u32,
    ) -> Result<f64, SolverError> {
        let r_full = r_matrix_coulomb_nuclear(energy, params, channel, l, &self.constants)?;
        let r_reference =
            r_matrix_nuclear_only(energy, &self.reference, channel, l, &self.constants)?;

        Ok((r_full - r_reference).atan())
    }

    /// Both R-matrix variants for one (energy, L) pair
    ///
    /// Used by the batch evaluator's R-matrix table; exposed so callers
    /// can inspect the raw logarithmic derivatives too.
    pub fn r_matrices(
        &self,
        energy: f64,
        params: &PotentialParameters,
        channel: &ChannelConfig,
        l: u32,
    ) -> Result<(f64, f64), SolverError> {
        let r_nuclear = r_matrix_nuclear_only(energy, params, channel, l, &self.constants)?;
        let r_coulomb_nuclear = r_matrix_coulomb_nuclear(energy, params, channel, l, &self.constants)?;
        Ok((r_nuclear, r_coulomb_nuclear))
    }
}

impl Default for PhaseShiftEngine {
    fn default() -> Self {
        Self::alpha_proton()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
