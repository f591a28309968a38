//! Request/response contract for an external boundary layer
//!
//! The engine itself does no I/O. This module defines the value types a
//! boundary layer (HTTP server, CLI, notebook binding) deserializes a
//! computation request into and serializes the results from, shaped
//! exactly like the reference dashboard contract:
//!
//! ```json
//! {
//!   "energies": [5.0, 10.0],
//!   "L_values": [0, 1, 2],
//!   "V0": 40.0, "R0": 2.0, "a0": 0.6,
//!   "radius": 3.0
//! }
//! ```
//!
//! The step size is **not** part of the request: the boundary contract
//! always integrates with the fixed internal step
//! [`DEFAULT_STEP_SIZE`](crate::solver::DEFAULT_STEP_SIZE) = 0.001 fm.
//!
//! # Error surface
//!
//! [`CalculationRequest::validate`] rejects malformed input (empty grids,
//! non-finite numbers, non-positive radius) before the core runs.
//! Numerical failures inside the core propagate as
//! [`SolverError`](crate::solver::SolverError), distinguishable from
//! "success with NaN" — which the engine never produces.

use crate::models::PotentialParameters;
use crate::physics::{
    CrossSectionResult, PhaseShiftResult, PotentialSample, RMatrixResult,
};
use crate::solver::{BatchEvaluator, ChannelConfig, SolverError};
use serde::{Deserialize, Serialize};
use tracing::debug;

// =================================================================================================
// Request
// =================================================================================================

/// A single computation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Center-of-mass energies \[MeV\]
    pub energies: Vec<f64>,

    /// Angular momenta to include
    #[serde(rename = "L_values")]
    pub l_values: Vec<u32>,

    /// Well depth \[MeV\]
    #[serde(rename = "V0")]
    pub v0: f64,

    /// Nuclear/Coulomb radius \[fm\]
    #[serde(rename = "R0")]
    pub r0: f64,

    /// Surface diffuseness \[fm\]
    pub a0: f64,

    /// Channel (matching) radius \[fm\]
    pub radius: f64,
}

impl CalculationRequest {
    /// The Woods-Saxon parameters of this request
    pub fn potential_parameters(&self) -> PotentialParameters {
        PotentialParameters::new(self.v0, self.r0, self.a0)
    }

    /// Reject malformed input before the core runs
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.energies.is_empty() {
            return Err(SolverError::invalid("energies", 0.0, "must not be empty"));
        }
        if self.l_values.is_empty() {
            return Err(SolverError::invalid("L_values", 0.0, "must not be empty"));
        }
        for &energy in &self.energies {
            if !energy.is_finite() {
                return Err(SolverError::invalid("energies", energy, "must be finite"));
            }
        }
        if !(self.radius > 0.0) || !self.radius.is_finite() {
            return Err(SolverError::invalid("radius", self.radius, "must be positive and finite"));
        }
        self.potential_parameters().validate()?;
        ChannelConfig::with_default_step(self.radius).validate()
    }

    /// Run the four computations of the contract
    ///
    /// Any failing grid cell fails the whole request (the batch
    /// evaluator's documented policy).
    pub fn calculate(&self) -> Result<CalculationResponse, SolverError> {
        self.validate()?;

        debug!(
            energies = self.energies.len(),
            l_values = self.l_values.len(),
            radius = self.radius,
            "calculating request"
        );

        let params = self.potential_parameters();
        let channel = ChannelConfig::with_default_step(self.radius);
        let evaluator = BatchEvaluator::alpha_proton(channel);

        Ok(CalculationResponse {
            phase_shifts: evaluator.phase_shift_table(&self.energies, &self.l_values, &params)?,
            r_matrices: evaluator.r_matrix_table(&self.energies, &self.l_values, &params)?,
            potentials: evaluator.potential_curve(&params)?,
            cross_sections: evaluator.cross_sections(&self.energies, &self.l_values, &params)?,
            parameters: ResolvedParameters {
                energies: self.energies.clone(),
                l_values: self.l_values.clone(),
                ws_params: [self.v0, self.r0, self.a0],
                radius: self.radius,
            },
        })
    }
}

/// The reference default request: the grid the dashboard starts from
pub fn default_parameters() -> CalculationRequest {
    CalculationRequest {
        energies: vec![5.0, 10.0, 15.0, 20.0, 25.0, 30.0],
        l_values: vec![0, 1, 2, 3, 4, 5],
        v0: 40.0,
        r0: 2.0,
        a0: 0.6,
        radius: 3.0,
    }
}

// =================================================================================================
// Response
// =================================================================================================

/// The four result tables plus an echo of the resolved parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResponse {
    pub phase_shifts: Vec<PhaseShiftResult>,
    pub r_matrices: Vec<RMatrixResult>,
    pub potentials: Vec<PotentialSample>,
    pub cross_sections: Vec<CrossSectionResult>,
    pub parameters: ResolvedParameters,
}

/// Echo of the parameters a response was computed with
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedParameters {
    pub energies: Vec<f64>,

    #[serde(rename = "L_values")]
    pub l_values: Vec<u32>,

    /// `[V0, R0, a0]`, the reference contract's packing
    pub ws_params: [f64; 3],

    pub radius: f64,
}

// =================================================================================================
// Parameter ranges
// =================================================================================================

/// Valid slider range for one request parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// Slider ranges published to the boundary layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterRanges {
    #[serde(rename = "V0")]
    pub v0: ParameterRange,

    #[serde(rename = "R0")]
    pub r0: ParameterRange,

    pub a0: ParameterRange,

    pub radius: ParameterRange,
}

/// The reference parameter ranges, so the boundary layer does not
/// duplicate these constants
pub fn parameter_ranges() -> ParameterRanges {
    ParameterRanges {
        v0: ParameterRange { min: -100.0, max: 100.0, step: 1.0 },
        r0: ParameterRange { min: 0.5, max: 5.0, step: 0.1 },
        a0: ParameterRange { min: 0.1, max: 2.0, step: 0.1 },
        radius: ParameterRange { min: 1.0, max: 10.0, step: 0.1 },
    }
}

// =================================================================================================
// Tests
// =================================================================================================
