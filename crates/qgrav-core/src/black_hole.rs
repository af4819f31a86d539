// ─────────────────────────────────────────────────────────────────────
// QGrav — Black Hole Thermodynamics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Hawking temperature and Bekenstein-Hawking entropy of a Schwarzschild
//! black hole.

use crate::relativity::schwarzschild_radius;
use qgrav_types::PhysicalConstants;
use std::f64::consts::{LN_10, PI};

/// Hawking temperature [K].
///
/// `T_H = ħc³ / (8π k_B G M)`.
pub fn hawking_temperature(k: &PhysicalConstants, mass: f64) -> f64 {
    (k.hbar * k.c.powi(3)) / (8.0 * PI * k.k_b * k.g * mass)
}

/// Horizon area `A = 4π r_s²` [m²].
pub fn horizon_area(k: &PhysicalConstants, mass: f64) -> f64 {
    let r_s = schwarzschild_radius(k, mass);
    4.0 * PI * r_s * r_s
}

/// Bekenstein-Hawking entropy [J/K].
///
/// `S = A k_B c³ / (4ħG)`.
pub fn bekenstein_hawking_entropy(k: &PhysicalConstants, mass: f64) -> f64 {
    (horizon_area(k, mass) * k.k_b * k.c.powi(3)) / (4.0 * k.hbar * k.g)
}

/// log₁₀ of the microstate count implied by entropy `s`: `S / (k_B ln 10)`.
pub fn microstate_exponent(k: &PhysicalConstants, s: f64) -> f64 {
    s / (k.k_b * LN_10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qgrav_types::constants::M_SUN;

    fn si() -> PhysicalConstants {
        PhysicalConstants::si2019()
    }

    #[test]
    fn test_hawking_solar_mass() {
        // T_H(M_sun) ≈ 6.17e-8 K.
        let t = hawking_temperature(&si(), M_SUN);
        assert!((t - 6.17e-8).abs() / 6.17e-8 < 5e-3, "T_H = {t:e}");
    }

    #[test]
    fn test_hawking_inverse_in_mass() {
        let k = si();
        let t1 = hawking_temperature(&k, M_SUN);
        let t5 = hawking_temperature(&k, 5.0 * M_SUN);
        assert!((t1 / t5 - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_hawking_matches_surface_gravity_form() {
        // T_H = ħκ_s / (2π c k_B) with κ_s = c⁴ / (4GM).
        let k = si();
        let m = 1e31;
        let surface_gravity = k.c.powi(4) / (4.0 * k.g * m);
        let expected = k.hbar * surface_gravity / (2.0 * PI * k.c * k.k_b);
        let t = hawking_temperature(&k, m);
        assert!((t - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn test_entropy_five_solar_masses_independent_formula() {
        let k = si();
        let m = 5.0 * 1.98892e30;
        let r_s = 2.0 * k.g * m / (k.c * k.c);
        let expected = (4.0 * PI * r_s * r_s * k.k_b * k.c.powi(3)) / (4.0 * k.hbar * k.g);
        let s = bekenstein_hawking_entropy(&k, m);
        assert!((s - expected).abs() / expected < 1e-14, "S = {s:e}, expected {expected:e}");
    }

    #[test]
    fn test_entropy_matches_planck_area_form() {
        // S / k_B = A / (4 l_P²).
        let k = si();
        let m = 1e31;
        let s = bekenstein_hawking_entropy(&k, m);
        let planck_form = horizon_area(&k, m) / (4.0 * k.planck_length.powi(2));
        assert!((s / k.k_b - planck_form).abs() / planck_form < 1e-12);
    }

    #[test]
    fn test_entropy_scales_with_mass_squared() {
        let k = si();
        let s1 = bekenstein_hawking_entropy(&k, M_SUN);
        let s2 = bekenstein_hawking_entropy(&k, 2.0 * M_SUN);
        assert!((s2 / s1 - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_microstate_exponent() {
        let k = si();
        let s = k.k_b * LN_10 * 77.0;
        assert!((microstate_exponent(&k, s) - 77.0).abs() < 1e-12);
    }
}
