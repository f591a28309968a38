//! Evaluate the default parameter grid and print every result table.
//!
//! ```bash
//! cargo run --example default_grid
//! RUST_LOG=pwave_rs=debug cargo run --example default_grid
//! ```

use pwave_rs::api::{default_parameters, parameter_ranges};
use pwave_rs::solver::SolverError;

fn main() -> Result<(), SolverError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let request = default_parameters();
    let response = request.calculate()?;

    println!("Potential parameters: V0 = {} MeV, R0 = {} fm, a0 = {} fm",
             request.v0, request.r0, request.a0);
    println!("Matching radius:      {} fm", request.radius);
    println!();

    println!("Phase shifts [rad]");
    println!("{:>8} {:>4} {:>14}", "E [MeV]", "L", "delta");
    for entry in &response.phase_shifts {
        println!(
            "{:>8.1} {:>4} {:>14.9}",
            entry.state.energy, entry.state.l, entry.phase_shift
        );
    }
    println!();

    println!("R-matrix values");
    println!(
        "{:>8} {:>4} {:>14} {:>18}",
        "E [MeV]", "L", "nuclear", "coulomb+nuclear"
    );
    for entry in &response.r_matrices {
        println!(
            "{:>8.1} {:>4} {:>14.9} {:>18.9}",
            entry.state.energy, entry.state.l, entry.r_nuclear, entry.r_coulomb_nuclear
        );
    }
    println!();

    println!("Total cross-sections (sum over L of sin^2 delta)");
    println!("{:>8} {:>14}", "E [MeV]", "sigma");
    for entry in &response.cross_sections {
        println!("{:>8.1} {:>14.9}", entry.energy, entry.total_cross_section);
    }
    println!();

    println!(
        "Potential curve: {} samples from {:.1} to {:.1} fm",
        response.potentials.len(),
        response.potentials[0].radius,
        response.potentials[response.potentials.len() - 1].radius
    );

    let ranges = parameter_ranges();
    println!(
        "Valid V0 range: {} .. {} MeV (step {})",
        ranges.v0.min, ranges.v0.max, ranges.v0.step
    );

    Ok(())
}
