//! Potential models for the scattering engine
//!
//! All potentials implement the [`RadialPotential`] trait. The radial
//! integrator calls `evaluate` at each step — models are responsible for
//! the interaction, the solver for the integration.
//!
//! # Available Models
//!
//! ## [`NuclearPotential`] — Woods-Saxon well
//!
//! The nuclear interaction alone. Used for the nuclear-only R-matrix and
//! as the phase-shift engine's zero-depth reference case.
//!
//! ## [`CombinedPotential`] — Coulomb + Woods-Saxon
//!
//! The full interaction: uniformly-charged-sphere Coulomb plus the
//! Woods-Saxon well. Used for the combined R-matrix variant.
//!
//! # Parameters
//!
//! Both models borrow a [`PotentialParameters`] value (`V0`, `R0`, `a0`);
//! the combined model additionally borrows the
//! [`PhysicalConstants`](crate::physics::PhysicalConstants) carrying the
//! charge product `Z1Z2e²`.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod potential;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use potential::{
    coulomb_potential,
    woods_saxon,
    CombinedPotential,
    NuclearPotential,
    PotentialParameters,
    RadialPotential,
    WS_EXP_CUTOFF,
};
