// ─────────────────────────────────────────────────────────────────────
// QGrav — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! SI 2019 base constants and their Planck-scale derivatives.
//!
//! The raw values are exposed as `const` items; formulas take an explicit
//! [`PhysicalConstants`] built once with [`PhysicalConstants::si2019`].

/// Reduced Planck constant ħ (J·s).
pub const HBAR: f64 = 1.054571817e-34;

/// Planck constant h (J·s), exact since 2019.
pub const PLANCK_H: f64 = 6.62607015e-34;

/// Speed of light in vacuum (m/s), exact.
pub const C_LIGHT: f64 = 299_792_458.0;

/// Newtonian gravitational constant (m³/(kg·s²)).
pub const G_NEWTON: f64 = 6.67430e-11;

/// Boltzmann constant (J/K), exact since 2019.
pub const K_BOLTZMANN: f64 = 1.380649e-23;

/// Vacuum permittivity (F/m).
pub const EPSILON_0: f64 = 8.8541878128e-12;

/// Solar mass (kg).
pub const M_SUN: f64 = 1.98892e30;

/// Electron rest mass (kg).
pub const M_ELECTRON: f64 = 9.10938356e-31;

/// Astronomical unit, Earth–Sun distance (m).
pub const AU: f64 = 1.496e11;

/// Observed cosmological constant Λ (m⁻²).
pub const LAMBDA_OBSERVED: f64 = 1.11e-52;

/// 1 eV in joules.
pub const EV_TO_J: f64 = 1.602176634e-19;

/// 1 MeV in joules.
pub const MEV_TO_J: f64 = 1.602176634e-13;

/// Immutable set of base constants plus derived Planck units.
///
/// Derived values are computed at construction, so every field is a pure
/// function of `hbar`, `c` and `g`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    pub hbar: f64,
    pub h: f64,
    pub c: f64,
    pub g: f64,
    pub k_b: f64,
    pub epsilon_0: f64,
    /// Planck length √(ħG/c³) [m].
    pub planck_length: f64,
    /// Planck mass √(ħc/G) [kg].
    pub planck_mass: f64,
    /// Planck time √(ħG/c⁵) [s].
    pub planck_time: f64,
    /// Planck energy m_P·c² [J].
    pub planck_energy: f64,
}

impl PhysicalConstants {
    /// CODATA / SI 2019 values.
    pub fn si2019() -> Self {
        Self::from_base(HBAR, C_LIGHT, G_NEWTON, K_BOLTZMANN)
    }

    /// Build from a custom base set. `h` is recovered as 2πħ and ε₀ keeps
    /// its SI value.
    pub fn from_base(hbar: f64, c: f64, g: f64, k_b: f64) -> Self {
        let planck_length = (hbar * g / c.powi(3)).sqrt();
        let planck_mass = (hbar * c / g).sqrt();
        let planck_time = (hbar * g / c.powi(5)).sqrt();
        // Single derivation path for E_P; √(ħc⁵/G) is checked in tests only.
        let planck_energy = planck_mass * c * c;

        Self {
            hbar,
            h: 2.0 * std::f64::consts::PI * hbar,
            c,
            g,
            k_b,
            epsilon_0: EPSILON_0,
            planck_length,
            planck_mass,
            planck_time,
            planck_energy,
        }
    }

    /// Schwarzschild radius coefficient 2G/c² [m/kg].
    pub fn schwarzschild_coefficient(&self) -> f64 {
        2.0 * self.g / (self.c * self.c)
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::si2019()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel_err(a: f64, b: f64) -> f64 {
        (a - b).abs() / b.abs()
    }

    #[test]
    fn test_si2019_is_deterministic() {
        assert_eq!(PhysicalConstants::si2019(), PhysicalConstants::si2019());
        assert_eq!(PhysicalConstants::default(), PhysicalConstants::si2019());
    }

    #[test]
    fn test_planck_length_reference() {
        let k = PhysicalConstants::si2019();
        assert!(
            rel_err(k.planck_length, 1.616255e-35) < 1e-5,
            "l_P = {:e}",
            k.planck_length
        );
    }

    #[test]
    fn test_planck_mass_and_time_reference() {
        let k = PhysicalConstants::si2019();
        assert!(rel_err(k.planck_mass, 2.176434e-8) < 1e-5);
        assert!(rel_err(k.planck_time, 5.391247e-44) < 1e-5);
    }

    #[test]
    fn test_planck_energy_paths_agree() {
        let k = PhysicalConstants::si2019();
        let alternative = (k.hbar * k.c.powi(5) / k.g).sqrt();
        assert!(
            rel_err(k.planck_energy, alternative) < 1e-14,
            "m_P c² = {:e}, √(ħc⁵/G) = {:e}",
            k.planck_energy,
            alternative
        );
    }

    #[test]
    fn test_planck_time_is_length_over_c() {
        let k = PhysicalConstants::si2019();
        assert!(rel_err(k.planck_time, k.planck_length / k.c) < 1e-14);
    }

    #[test]
    fn test_h_matches_two_pi_hbar() {
        let k = PhysicalConstants::si2019();
        assert!(rel_err(k.h, 2.0 * std::f64::consts::PI * k.hbar) < 1e-9);
    }

    #[test]
    fn test_h_tracks_custom_hbar() {
        let k = PhysicalConstants::si2019();
        assert!(rel_err(k.h, PLANCK_H) < 1e-9);
        // An hbar one ulp away from HBAR must still give h = 2πħ.
        let nudged = f64::from_bits(HBAR.to_bits() + 1);
        let k2 = PhysicalConstants::from_base(nudged, C_LIGHT, G_NEWTON, K_BOLTZMANN);
        assert_eq!(k2.h, 2.0 * std::f64::consts::PI * nudged);
        let k3 = PhysicalConstants::from_base(2.0, 1.0, 1.0, 1.0);
        assert_eq!(k3.h, 4.0 * std::f64::consts::PI);
    }

    #[test]
    fn test_from_base_natural_units() {
        let k = PhysicalConstants::from_base(1.0, 1.0, 1.0, 1.0);
        assert_eq!(k.planck_length, 1.0);
        assert_eq!(k.planck_mass, 1.0);
        assert_eq!(k.planck_time, 1.0);
        assert_eq!(k.planck_energy, 1.0);
        assert_eq!(k.schwarzschild_coefficient(), 2.0);
    }
}
