//! Result records produced by the engine
//!
//! Every computation in the engine produces one of the immutable value
//! records in this module. Records are created per request by the batch
//! evaluator, read once by the output layer, and discarded — there is no
//! ownership graph and no persistent state.
//!
//! # Wire format
//!
//! The records derive `serde::Serialize` with field names matching the
//! boundary contract consumed by the external dashboard layer
//! (`"L"`, `"phase_shift"`, `"r_nuclear"`, `"r_coulomb_nuclear"`,
//! `"woods_saxon"`, `"coulomb"`, `"combined"`, `"total_cross_section"`).

use serde::{Deserialize, Serialize};

/// One point of the energy × angular-momentum grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatteringState {
    /// Center-of-mass energy \[MeV\]
    pub energy: f64,

    /// Orbital angular momentum
    #[serde(rename = "L")]
    pub l: u32,
}

impl ScatteringState {
    pub fn new(energy: f64, l: u32) -> Self {
        Self { energy, l }
    }
}

/// Logarithmic-derivative (R-matrix) values for one grid point
///
/// `r_nuclear` is `u(a)/u'(a)` for the Woods-Saxon potential alone;
/// `r_coulomb_nuclear` is `u(a)/u'(a)/a` for the combined potential. The
/// extra division by the channel radius puts the two values on a comparable
/// scale when they are later differenced by the phase-shift engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RMatrixResult {
    #[serde(flatten)]
    pub state: ScatteringState,

    /// R-matrix with the nuclear potential only
    pub r_nuclear: f64,

    /// R-matrix with Coulomb + nuclear, scaled by 1/a
    pub r_coulomb_nuclear: f64,
}

/// Nuclear phase shift for one grid point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhaseShiftResult {
    #[serde(flatten)]
    pub state: ScatteringState,

    /// Principal-value phase shift \[rad\], always in (−π/2, π/2)
    ///
    /// Callers needing an unwrapped phase across resonances must apply
    /// branch-unwrapping over the energy grid themselves.
    pub phase_shift: f64,
}

/// Total cross-section at one energy
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CrossSectionResult {
    /// Center-of-mass energy \[MeV\]
    pub energy: f64,

    /// Σ over L of sin²(δ_L) \[arbitrary units\]
    pub total_cross_section: f64,
}

/// One sample of the potential curves
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PotentialSample {
    /// Radius \[fm\]
    pub radius: f64,

    /// Woods-Saxon value at this radius \[MeV\]
    pub woods_saxon: f64,

    /// Coulomb value at this radius \[MeV\]
    pub coulomb: f64,

    /// woods_saxon + coulomb \[MeV\]
    pub combined: f64,
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scattering_state_serializes_l_uppercase() {
        let state = ScatteringState::new(10.0, 2);
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["energy"], 10.0);
        assert_eq!(json["L"], 2);
    }

    #[test]
    fn test_phase_shift_result_flattens_state() {
        let result = PhaseShiftResult {
            state: ScatteringState::new(5.0, 1),
            phase_shift: -0.25,
        };
        let json = serde_json::to_value(&result).unwrap();

        // State fields sit at the top level, like the reference contract
        assert_eq!(json["energy"], 5.0);
        assert_eq!(json["L"], 1);
        assert_eq!(json["phase_shift"], -0.25);
    }

    #[test]
    fn test_r_matrix_result_field_names() {
        let result = RMatrixResult {
            state: ScatteringState::new(10.0, 0),
            r_nuclear: 0.48,
            r_coulomb_nuclear: 0.15,
        };
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["r_nuclear"], 0.48);
        assert_eq!(json["r_coulomb_nuclear"], 0.15);
    }

    #[test]
    fn test_potential_sample_field_names() {
        let sample = PotentialSample {
            radius: 2.0,
            woods_saxon: -20.0,
            coulomb: 1.44,
            combined: -18.56,
        };
        let json = serde_json::to_value(&sample).unwrap();

        assert_eq!(json["radius"], 2.0);
        assert_eq!(json["woods_saxon"], -20.0);
        assert_eq!(json["coulomb"], 1.44);
        assert_eq!(json["combined"], -18.56);
    }
}
