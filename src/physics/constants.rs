//! Physical constants for the two-body scattering system
//!
//! All constants are carried in an explicit [`PhysicalConstants`] value that
//! is passed into the potential models and the radial integrator. Nothing in
//! the engine reads module-level globals, so a different two-body system
//! (different reduced mass, different charge product) is just a different
//! `PhysicalConstants` value — no recompilation.

/// Immutable physical constants of a two-body scattering system
///
/// # Units
///
/// The engine works in the natural units of low-energy nuclear physics:
/// energies in MeV, lengths in fm. With `hbarc` in MeV·fm and the reduced
/// mass in MeV/c², the derived [`mass_factor`](Self::mass_factor) has
/// dimension 1/(MeV·fm²) and converts `(V − E)` into the curvature term of
/// the reduced radial equation.
///
/// # Example
///
/// ```rust
/// use pwave_rs::physics::PhysicalConstants;
///
/// let constants = PhysicalConstants::alpha_proton();
/// assert!((constants.mass_factor() - 0.0381217).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// ħc \[MeV·fm\]
    pub hbarc: f64,

    /// Reduced mass μ of the two-body system \[MeV/c²\]
    pub reduced_mass: f64,

    /// Charge product Z₁Z₂e² \[MeV·fm\]
    pub z1z2_e2: f64,
}

impl PhysicalConstants {
    /// Create constants for an arbitrary two-body system
    pub fn new(hbarc: f64, reduced_mass: f64, z1z2_e2: f64) -> Self {
        Self { hbarc, reduced_mass, z1z2_e2 }
    }

    /// Constants for the alpha-proton system
    ///
    /// ħc = 197.7 MeV·fm, μ = 745 MeV/c², Z₁Z₂e² = 2 × 1.44 MeV·fm.
    pub fn alpha_proton() -> Self {
        Self {
            hbarc: 197.7,
            reduced_mass: 745.0,
            z1z2_e2: 2.0 * 1.44,
        }
    }

    /// Mass scaling factor κ = 2μ/(ħc)² \[1/(MeV·fm²)\]
    ///
    /// Multiplies `(V(r) − E)` in the radial equation
    /// `u'' = [L(L+1)/r² + κ(V − E)]·u`.
    pub fn mass_factor(&self) -> f64 {
        (2.0 * self.reduced_mass) / (self.hbarc * self.hbarc)
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::alpha_proton()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_proton_values() {
        let constants = PhysicalConstants::alpha_proton();

        assert_eq!(constants.hbarc, 197.7);
        assert_eq!(constants.reduced_mass, 745.0);
        assert_eq!(constants.z1z2_e2, 2.88);
    }

    #[test]
    fn test_mass_factor() {
        let constants = PhysicalConstants::alpha_proton();

        // kappa = 2 * 745 / 197.7^2
        assert!((constants.mass_factor() - 0.038121758850964138).abs() < 1e-15);
    }

    #[test]
    fn test_default_is_alpha_proton() {
        assert_eq!(PhysicalConstants::default(), PhysicalConstants::alpha_proton());
    }

    #[test]
    fn test_custom_system() {
        // Proton-proton-like system with a different reduced mass
        let constants = PhysicalConstants::new(197.327, 469.0, 1.44);

        assert!(constants.mass_factor() > 0.0);
        assert!(constants.mass_factor() < PhysicalConstants::alpha_proton().mass_factor());
    }
}
