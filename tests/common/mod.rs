//! Common utilities for integration tests

use pwave_rs::models::PotentialParameters;
use pwave_rs::solver::ChannelConfig;

/// The benchmark potential of the reference system:
/// V0 = 40 MeV, R0 = 2.0 fm, a0 = 0.6 fm
pub fn benchmark_params() -> PotentialParameters {
    PotentialParameters::new(40.0, 2.0, 0.6)
}

/// The reference channel: a = 3.0 fm, dr = 0.001 fm
pub fn reference_channel() -> ChannelConfig {
    ChannelConfig::new(3.0, 0.001)
}

/// Assert two floats agree within an absolute tolerance
pub fn assert_close(actual: f64, expected: f64, tolerance: f64, what: &str) {
    assert!(
        (actual - expected).abs() < tolerance,
        "{what}: expected {expected}, got {actual} (difference {:e})",
        (actual - expected).abs()
    );
}
