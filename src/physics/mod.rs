//! Physical constants and result records
//!
//! This module holds the pieces of the engine that are pure data:
//!
//! - **Physical constants**: ħc, reduced mass, charge product — bundled in
//!   an explicit [`PhysicalConstants`] value rather than module globals, so
//!   a different two-body system is a configuration change, not a code
//!   change.
//! - **Result records**: the immutable values the solver produces and the
//!   boundary layer serializes as-is.
//!
//! # Architecture
//!
//! Physics data is **separate from the numerical solver**:
//! - this module describes the system and its outputs
//! - [`models`](crate::models) evaluates the interaction potentials
//! - [`solver`](crate::solver) integrates and aggregates
//!
//! # Example
//!
//! ```rust
//! use pwave_rs::physics::{PhysicalConstants, ScatteringState};
//!
//! let constants = PhysicalConstants::alpha_proton();
//! let state = ScatteringState::new(10.0, 0);
//!
//! assert!(constants.mass_factor() > 0.0);
//! assert_eq!(state.l, 0);
//! ```

// module declaration
pub mod constants;
pub mod records;

// re-export commonly used types for convenience
pub use constants::PhysicalConstants;
pub use records::{
    CrossSectionResult,
    PhaseShiftResult,
    PotentialSample,
    RMatrixResult,
    ScatteringState,
};
