//! pwave-rs: Partial-Wave Scattering Engine
//!
//! A library for computing nuclear phase shifts and partial-wave
//! cross-sections for a two-body system under a combined Woods-Saxon
//! (nuclear) and uniformly-charged-sphere (Coulomb) potential.
//!
//! # Architecture
//!
//! pwave-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - Potential models define the interaction (what to integrate)
//!    - The radial integrator provides the method (how to integrate)
//!
//! 2. **Immutable value records**
//!    - Every result is a plain record, produced once, serialized as-is
//!    - No shared mutable state anywhere in the engine
//!
//! # Quick Start
//!
//! ```rust
//! use pwave_rs::models::PotentialParameters;
//! use pwave_rs::solver::{BatchEvaluator, ChannelConfig};
//!
//! # fn main() -> Result<(), pwave_rs::solver::SolverError> {
//! // 1. Potential parameters for the alpha-proton system
//! let params = PotentialParameters::new(40.0, 2.0, 0.6);
//!
//! // 2. Channel configuration: matching radius 3 fm, step 0.001 fm
//! let channel = ChannelConfig::new(3.0, 0.001);
//!
//! // 3. Evaluate the grid
//! let evaluator = BatchEvaluator::alpha_proton(channel);
//! let table = evaluator.phase_shift_table(&[5.0, 10.0], &[0, 1, 2], &params)?;
//!
//! // 4. Access results
//! assert_eq!(table.len(), 6);
//! for entry in &table {
//!     println!("E = {} MeV, L = {}: delta = {} rad",
//!              entry.state.energy, entry.state.l, entry.phase_shift);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Physical constants and result records
//! - [`models`]: Potential models (the interaction)
//! - [`solver`]: Radial integration, phase shifts, batch evaluation
//! - [`api`]: Request/response contract for an external boundary layer

// Core modules
pub mod physics;

pub mod models;
pub mod solver;

pub mod api;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use pwave_rs::prelude::*;
    //! ```
    pub use crate::physics::{PhysicalConstants,
                             ScatteringState,
                             PhaseShiftResult,
                             RMatrixResult,
                             CrossSectionResult,
                             PotentialSample};
    pub use crate::models::{PotentialParameters,
                            RadialPotential,
                            NuclearPotential,
                            CombinedPotential};
    pub use crate::solver::{ChannelConfig,
                            SolverError,
                            PhaseShiftEngine,
                            BatchEvaluator};
}
