//! Fine energy scan of the L = 0 phase shift, looking for the rapid
//! phase motion that marks a shape resonance of the well.
//!
//! ```bash
//! cargo run --example resonance_scan
//! cargo run --example resonance_scan -- 60.0   # deeper well
//! ```

use pwave_rs::models::PotentialParameters;
use pwave_rs::solver::{BatchEvaluator, ChannelConfig, SolverError};

fn main() -> Result<(), SolverError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let v0 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(40.0);

    let params = PotentialParameters::new(v0, 2.0, 0.6);
    let evaluator = BatchEvaluator::alpha_proton(ChannelConfig::with_default_step(3.0));

    // 0.25 MeV grid from 0.25 to 30 MeV.
    let energies: Vec<f64> = (1..=120).map(|i| i as f64 * 0.25).collect();
    let table = evaluator.phase_shift_table(&energies, &[0], &params)?;

    println!("L = 0 phase shift, V0 = {} MeV", v0);
    println!("{:>8} {:>14} {:>12}", "E [MeV]", "delta [rad]", "d(delta)/dE");

    let mut previous: Option<f64> = None;
    for entry in &table {
        let slope = previous
            .map(|prev| (entry.phase_shift - prev) / 0.25)
            .unwrap_or(0.0);
        let marker = if slope.abs() > 1.0 { "  <-- rapid phase motion" } else { "" };
        println!(
            "{:>8.2} {:>14.9} {:>12.6}{}",
            entry.state.energy, entry.phase_shift, slope, marker
        );
        previous = Some(entry.phase_shift);
    }

    Ok(())
}
