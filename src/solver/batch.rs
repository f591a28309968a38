//! Batch evaluation across the energy × angular-momentum grid
//!
//! The batch evaluator drives the phase-shift engine over a cartesian grid
//! of energies and angular momenta, and over a fixed radius sweep for the
//! potential curves, producing the four tabular outputs the boundary layer
//! serializes:
//!
//! - phase-shift table (one entry per grid cell)
//! - R-matrix table (both variants per grid cell)
//! - potential curve (100 fixed samples, independent of the channel config)
//! - total cross-sections (one entry per energy, Σ_L sin²δ)
//!
//! # Ordering and determinism
//!
//! Iteration order is canonical and observable: **energies outer, L
//! inner**. Given identical inputs every output is bit-reproducible —
//! there is no randomness and no order-dependent floating-point
//! accumulation beyond the fixed iteration order.
//!
//! Grid cells are independent and side-effect-free, so evaluation is
//! embarrassingly parallel. With the `parallel` feature (default), grids
//! of at least [`parallel_threshold()`](crate::solver::parallel_threshold)
//! cells are dispatched to rayon; results are reassembled **by grid
//! index**, never by completion order, so parallel and sequential runs
//! emit identical tables.
//!
//! # Failure policy
//!
//! One failing cell aborts the whole batch: every table function returns
//! `Result` and short-circuits on the first error. This matches the
//! reference system's behavior (any cell failure failed the request) and
//! is a deliberate, tested choice rather than an accident — per-cell
//! reporting would change the boundary contract.

use crate::models::{coulomb_potential, woods_saxon, PotentialParameters};
use crate::physics::{
    CrossSectionResult, PhaseShiftResult, PotentialSample, RMatrixResult, ScatteringState,
};
use crate::solver::{ChannelConfig, PhaseShiftEngine, SolverError};
use nalgebra::DMatrix;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// First radius of the potential sweep \[fm\]
pub const CURVE_START: f64 = 0.1;

/// Radius increment of the potential sweep \[fm\]
pub const CURVE_STEP: f64 = 0.1;

/// Number of samples in the potential sweep (0.1 to 10.0 fm inclusive)
pub const CURVE_SAMPLES: usize = 100;

/// Batch evaluator: phase-shift engine + channel configuration
///
/// # Example
///
/// ```rust
/// use pwave_rs::models::PotentialParameters;
/// use pwave_rs::solver::{BatchEvaluator, ChannelConfig};
///
/// # fn main() -> Result<(), pwave_rs::solver::SolverError> {
/// let evaluator = BatchEvaluator::alpha_proton(ChannelConfig::new(3.0, 0.001));
/// let params = PotentialParameters::new(40.0, 2.0, 0.6);
///
/// let cross_sections = evaluator.cross_sections(&[5.0, 10.0], &[0, 1, 2], &params)?;
/// assert_eq!(cross_sections.len(), 2);
/// assert!(cross_sections.iter().all(|cs| cs.total_cross_section >= 0.0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BatchEvaluator {
    engine: PhaseShiftEngine,
    channel: ChannelConfig,
}

impl BatchEvaluator {
    /// Create an evaluator from an engine and a channel configuration
    pub fn new(engine: PhaseShiftEngine, channel: ChannelConfig) -> Self {
        Self { engine, channel }
    }

    /// Evaluator for the alpha-proton system
    pub fn alpha_proton(channel: ChannelConfig) -> Self {
        Self::new(PhaseShiftEngine::alpha_proton(), channel)
    }

    /// The underlying phase-shift engine
    pub fn engine(&self) -> &PhaseShiftEngine {
        &self.engine
    }

    /// The channel configuration used for every grid cell
    pub fn channel(&self) -> &ChannelConfig {
        &self.channel
    }

    /// Cartesian grid in canonical order: energies outer, L inner
    fn grid(energies: &[f64], ls: &[u32]) -> Vec<ScatteringState> {
        let mut cells = Vec::with_capacity(energies.len() * ls.len());
        for &energy in energies {
            for &l in ls {
                cells.push(ScatteringState::new(energy, l));
            }
        }
        cells
    }

    /// Map a fallible evaluation over the grid cells
    ///
    /// Parallel when the `parallel` feature is enabled and the grid is at
    /// least `parallel_threshold()` cells; sequential otherwise. Rayon's
    /// indexed collect preserves cell order, so both paths produce
    /// identical sequences.
    fn evaluate_cells<T, F>(cells: &[ScatteringState], evaluate: F) -> Result<Vec<T>, SolverError>
    where
        T: Send,
        F: Fn(&ScatteringState) -> Result<T, SolverError> + Send + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            if cells.len() >= crate::solver::parallel_threshold() {
                debug!(cells = cells.len(), mode = "parallel", "evaluating grid");
                return cells.par_iter().map(evaluate).collect();
            }
        }

        debug!(cells = cells.len(), mode = "sequential", "evaluating grid");
        cells.iter().map(evaluate).collect()
    }

    /// Phase-shift table: one entry per (energy, L) pair
    pub fn phase_shift_table(
        &self,
        energies: &[f64],
        ls: &[u32],
        params: &PotentialParameters,
    ) -> Result<Vec<PhaseShiftResult>, SolverError> {
        let cells = Self::grid(energies, ls);
        Self::evaluate_cells(&cells, |state| {
            let phase_shift =
                self.engine
                    .nuclear_phase_shift(state.energy, params, &self.channel, state.l)?;
            Ok(PhaseShiftResult { state: *state, phase_shift })
        })
    }

    /// R-matrix table: both variants per (energy, L) pair
    pub fn r_matrix_table(
        &self,
        energies: &[f64],
        ls: &[u32],
        params: &PotentialParameters,
    ) -> Result<Vec<RMatrixResult>, SolverError> {
        let cells = Self::grid(energies, ls);
        Self::evaluate_cells(&cells, |state| {
            let (r_nuclear, r_coulomb_nuclear) =
                self.engine
                    .r_matrices(state.energy, params, &self.channel, state.l)?;
            Ok(RMatrixResult { state: *state, r_nuclear, r_coulomb_nuclear })
        })
    }

    /// Potential curves sampled every 0.1 fm from 0.1 to 10.0 fm inclusive
    ///
    /// Fixed resolution (100 ascending samples), deliberately independent
    /// of the channel configuration — the sweep is for plotting the
    /// interaction, not for integration.
    pub fn potential_curve(
        &self,
        params: &PotentialParameters,
    ) -> Result<Vec<PotentialSample>, SolverError> {
        params.validate()?;
        let constants = self.engine.constants();

        let samples = (1..=CURVE_SAMPLES)
            .map(|i| {
                let radius = i as f64 * CURVE_STEP;
                let ws = woods_saxon(radius, params);
                let coulomb = coulomb_potential(radius, params.r0, constants);
                PotentialSample {
                    radius,
                    woods_saxon: ws,
                    coulomb,
                    combined: ws + coulomb,
                }
            })
            .collect();
        Ok(samples)
    }

    /// Total cross-section per energy: Σ over L of sin²(δ(E, L))
    ///
    /// Built from the full phase-shift matrix (rows = energies,
    /// columns = L values) by row-wise reduction. The reference
    /// formulation omits the (2L+1) partial-wave degeneracy weight;
    /// reproduced as-is — see DESIGN.md before "fixing" this.
    pub fn cross_sections(
        &self,
        energies: &[f64],
        ls: &[u32],
        params: &PotentialParameters,
    ) -> Result<Vec<CrossSectionResult>, SolverError> {
        let table = self.phase_shift_table(energies, ls, params)?;

        // Grid order is row-major (energies outer), so the flat table
        // fills the matrix row by row.
        let phases = DMatrix::from_row_iterator(
            energies.len(),
            ls.len(),
            table.iter().map(|entry| entry.phase_shift),
        );

        let results = energies
            .iter()
            .zip(phases.row_iter())
            .map(|(&energy, row)| CrossSectionResult {
                energy,
                total_cross_section: row.iter().map(|delta| delta.sin().powi(2)).sum(),
            })
            .collect();
        Ok(results)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn benchmark_params() -> PotentialParameters {
        PotentialParameters::new(40.0, 2.0, 0.6)
    }

    fn evaluator() -> BatchEvaluator {
        BatchEvaluator::alpha_proton(ChannelConfig::new(3.0, 0.001))
    }

    // A coarse step keeps the test grids fast; regression fixtures with
    // the reference step live in tests/engine_regression.rs.
    fn coarse_evaluator() -> BatchEvaluator {
        BatchEvaluator::alpha_proton(ChannelConfig::new(3.0, 0.01))
    }

    // ====== Grid Ordering Tests ======

    #[test]
    fn test_grid_order_energies_outer() {
        let table = coarse_evaluator()
            .phase_shift_table(&[5.0, 10.0], &[0, 1], &benchmark_params())
            .unwrap();

        let order: Vec<(f64, u32)> = table.iter().map(|e| (e.state.energy, e.state.l)).collect();
        assert_eq!(order, vec![(5.0, 0), (5.0, 1), (10.0, 0), (10.0, 1)]);
    }

    #[test]
    fn test_table_length_is_grid_product() {
        let table = coarse_evaluator()
            .r_matrix_table(&[5.0, 10.0, 15.0], &[0, 1], &benchmark_params())
            .unwrap();

        assert_eq!(table.len(), 6);
    }

    #[test]
    fn test_empty_grid_yields_empty_tables() {
        let evaluator = coarse_evaluator();
        let params = benchmark_params();

        assert!(evaluator.phase_shift_table(&[], &[0], &params).unwrap().is_empty());
        assert!(evaluator.phase_shift_table(&[10.0], &[], &params).unwrap().is_empty());
    }

    // ====== Determinism Tests ======

    #[test]
    fn test_bit_reproducible() {
        let evaluator = coarse_evaluator();
        let params = benchmark_params();

        let first = evaluator
            .phase_shift_table(&[5.0, 10.0], &[0, 1, 2], &params)
            .unwrap();
        let second = evaluator
            .phase_shift_table(&[5.0, 10.0], &[0, 1, 2], &params)
            .unwrap();

        assert_eq!(first, second);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let evaluator = coarse_evaluator();
        let params = benchmark_params();
        let energies = [5.0, 10.0, 15.0, 20.0];
        let ls = [0, 1, 2];

        // Force sequential, then force parallel, same grid
        let sequential = {
            let _guard = crate::solver::ThresholdGuard::save(usize::MAX);
            evaluator.phase_shift_table(&energies, &ls, &params).unwrap()
        };
        let parallel = {
            let _guard = crate::solver::ThresholdGuard::save(1);
            evaluator.phase_shift_table(&energies, &ls, &params).unwrap()
        };

        assert_eq!(sequential, parallel);
    }

    // ====== Failure Policy Tests ======

    #[test]
    fn test_one_bad_cell_aborts_whole_batch() {
        let bad = PotentialParameters::new(40.0, 2.0, -0.6);
        let result = coarse_evaluator().phase_shift_table(&[5.0, 10.0], &[0], &bad);

        assert!(matches!(result, Err(SolverError::InvalidParameter { .. })));
    }

    #[test]
    fn test_cross_sections_propagate_failure() {
        let bad = PotentialParameters::new(40.0, 0.0, 0.6);

        assert!(coarse_evaluator().cross_sections(&[10.0], &[0], &bad).is_err());
    }

    // ====== Potential Curve Tests ======

    #[test]
    fn test_potential_curve_has_100_ascending_samples() {
        let curve = evaluator().potential_curve(&benchmark_params()).unwrap();

        assert_eq!(curve.len(), CURVE_SAMPLES);
        assert!((curve[0].radius - 0.1).abs() < 1e-12);
        assert!((curve[99].radius - 10.0).abs() < 1e-12);

        for window in curve.windows(2) {
            assert!(window[1].radius > window[0].radius);
        }
    }

    #[test]
    fn test_potential_curve_combined_is_sum() {
        let curve = evaluator().potential_curve(&benchmark_params()).unwrap();

        for sample in &curve {
            assert_eq!(sample.combined, sample.woods_saxon + sample.coulomb);
        }
    }

    #[test]
    fn test_potential_curve_independent_of_channel() {
        let params = benchmark_params();
        let fine = evaluator().potential_curve(&params).unwrap();
        let coarse = coarse_evaluator().potential_curve(&params).unwrap();

        assert_eq!(fine, coarse);
    }

    #[test]
    fn test_potential_curve_validates_params() {
        let bad = PotentialParameters::new(40.0, 2.0, 0.0);

        assert!(evaluator().potential_curve(&bad).is_err());
    }

    // ====== Cross-Section Tests ======

    #[test]
    fn test_cross_sections_non_negative() {
        let results = coarse_evaluator()
            .cross_sections(&[5.0, 10.0, 20.0], &[0, 1, 2, 3], &benchmark_params())
            .unwrap();

        assert_eq!(results.len(), 3);
        for cs in &results {
            assert!(cs.total_cross_section >= 0.0);
        }
    }

    #[test]
    fn test_cross_sections_bounded_by_partial_wave_count() {
        // Each partial wave contributes sin^2 <= 1
        let ls = [0, 1, 2, 3, 4, 5];
        let results = coarse_evaluator()
            .cross_sections(&[10.0], &ls, &benchmark_params())
            .unwrap();

        assert!(results[0].total_cross_section <= ls.len() as f64);
    }

    #[test]
    fn test_cross_sections_match_manual_sum() {
        let evaluator = coarse_evaluator();
        let params = benchmark_params();
        let ls = [0, 1, 2];

        let table = evaluator.phase_shift_table(&[10.0], &ls, &params).unwrap();
        let manual: f64 = table.iter().map(|e| e.phase_shift.sin().powi(2)).sum();

        let results = evaluator.cross_sections(&[10.0], &ls, &params).unwrap();
        assert!((results[0].total_cross_section - manual).abs() < 1e-15);
    }
}
