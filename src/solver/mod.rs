//! Numerical solver: radial integration, phase shifts, batch evaluation
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! The solver is layered so that physics and numerics never mix:
//!
//! 1. **Potential models** ([`models`](crate::models)) - WHAT to integrate
//!    - the interaction evaluated at a radius
//!    - selected per R-matrix variant (nuclear-only, Coulomb+nuclear)
//!
//! 2. **Channel configuration** ([`ChannelConfig`]) - HOW to integrate
//!    - matching radius and step size
//!    - validated before any work happens
//!
//! 3. **The integrator** ([`radial`]) - the numerical method
//!    - fixed-step explicit scheme, pure fold over the step index
//!    - independent of which potential it is given
//!
//! 4. **Aggregation** ([`PhaseShiftEngine`], [`BatchEvaluator`])
//!    - combines R-matrix values into phase shifts
//!    - fans out across the energy × L grid in canonical order
//!
//! # Module Organization
//!
//! - **`error`**: the [`SolverError`] taxonomy
//! - **`channel`**: [`ChannelConfig`] (matching radius + step size)
//! - **`radial`**: the outward integrator and the two R-matrix entry points
//! - **`phase_shift`**: [`PhaseShiftEngine`] with its configurable
//!   reference potential
//! - **`batch`**: [`BatchEvaluator`] driving the grid and the potential
//!   sweep
//!
//! # Error Handling
//!
//! All fallible solver operations return `Result<T, SolverError>`:
//!
//! ```rust
//! use pwave_rs::models::PotentialParameters;
//! use pwave_rs::solver::{BatchEvaluator, ChannelConfig, SolverError};
//!
//! let evaluator = BatchEvaluator::alpha_proton(ChannelConfig::default());
//! let bad = PotentialParameters::new(40.0, 2.0, -0.6);
//!
//! match evaluator.phase_shift_table(&[10.0], &[0], &bad) {
//!     Err(SolverError::InvalidParameter { name, .. }) => assert_eq!(name, "a0"),
//!     other => panic!("expected InvalidParameter, got {other:?}"),
//! }
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================
mod batch;
mod channel;
mod error;
mod phase_shift;
pub mod radial;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Deciding *when* to hand a grid off to Rayon is a numerical-execution
// concern, not a physics concern, so it lives here (solver) rather than in
// the batch evaluator's public API.
//
// The threshold is stored in an AtomicUsize so that it can be changed at
// runtime (useful in benchmarks and tests) without requiring a mutex on
// every batch call. Relaxed ordering is sufficient: the value is a
// performance hint, not a synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of grid cells above which the batch evaluator switches
/// to parallel iteration.
///
/// A single cell costs two outward integrations (a few thousand steps each
/// at the reference step size). Below about 16 cells the thread-pool
/// dispatch overhead outweighs the per-cell work.
const DEFAULT_PARALLEL_THRESHOLD: usize = 16;

/// Runtime-configurable parallel-execution threshold.
///
/// Read via [`parallel_threshold()`], written via [`set_parallel_threshold()`].
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// The batch evaluator iterates sequentially when the grid has fewer cells
/// than this value, and hands it to Rayon when it has at least this many —
/// but only when the crate is compiled with the `parallel` feature.
///
/// # Example
///
/// ```rust
/// use pwave_rs::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`. A zero-cell threshold would force
/// parallel dispatch on every empty grid, which is never the intended
/// behaviour.
///
/// # Example
///
/// ```rust
/// use pwave_rs::solver::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(64);
/// assert_eq!(parallel_threshold(), 64);
///
/// // Restore so other tests are not affected.
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// Serializes threshold-touching tests so they do not race on the global.
#[cfg(test)]
static THRESHOLD_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Only compiled in test builds. Prevents one test from leaking a modified
/// threshold value into the next; holds [`THRESHOLD_TEST_LOCK`] for its
/// whole lifetime.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let lock = THRESHOLD_TEST_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = parallel_threshold();
        // Bypass the public setter so forcing usize::MAX ("never parallel")
        // and 1 ("always parallel") both work in tests.
        PARALLEL_THRESHOLD.store(new_value, Ordering::Relaxed);
        Self { previous, _lock: lock }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use batch::{BatchEvaluator, CURVE_SAMPLES, CURVE_START, CURVE_STEP};
pub use channel::{ChannelConfig, DEFAULT_CHANNEL_RADIUS, DEFAULT_STEP_SIZE};
pub use error::SolverError;
pub use phase_shift::{PhaseShiftEngine, REFERENCE_A0, REFERENCE_R0};
pub use radial::{r_matrix_coulomb_nuclear, r_matrix_nuclear_only};

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold_value() {
        assert_eq!(DEFAULT_PARALLEL_THRESHOLD, 16);
    }

    #[test]
    fn test_get_and_set_threshold() {
        let _guard = ThresholdGuard::save(500);
        assert_eq!(parallel_threshold(), 500);
    }

    #[test]
    #[should_panic(expected = "parallel threshold must be at least 1")]
    fn test_zero_threshold_panics() {
        set_parallel_threshold(0);
    }

    #[test]
    fn test_threshold_guard_restores_previous_value() {
        let before = parallel_threshold();
        {
            let _guard = ThresholdGuard::save(42);
            assert_eq!(parallel_threshold(), 42);
        }
        // Guard dropped — value must be back to what it was before.
        assert_eq!(parallel_threshold(), before);
    }

    #[test]
    fn test_threshold_is_visible_across_threads() {
        use std::thread;

        let _guard = ThresholdGuard::save(1234);

        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(parallel_threshold))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1234);
        }
    }
}
