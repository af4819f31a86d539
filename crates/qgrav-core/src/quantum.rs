// ─────────────────────────────────────────────────────────────────────
// QGrav — Quantum Mechanics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed-form quantum mechanics results.
//!
//! Inputs are assumed physical (non-zero widths, masses and uncertainties);
//! violating that yields `inf`/`NaN` rather than an error.

use qgrav_types::PhysicalConstants;
use std::f64::consts::PI;

/// Minimum momentum uncertainty [kg·m/s] saturating Δx·Δp = ħ/2.
///
/// `Δp = ħ / (2 Δx)`.
pub fn heisenberg_min_momentum(k: &PhysicalConstants, delta_x: f64) -> f64 {
    k.hbar / (2.0 * delta_x)
}

/// Velocity uncertainty [m/s] of a particle of mass `m` carrying `delta_p`.
pub fn velocity_uncertainty(delta_p: f64, m: f64) -> f64 {
    delta_p / m
}

/// Particle-in-a-box eigenenergy [J].
///
/// `E_n = n² π² ħ² / (2 m L²)`, n ≥ 1.
pub fn infinite_well_energy(k: &PhysicalConstants, n: u32, width: f64, m: f64) -> f64 {
    let n = f64::from(n);
    (n * n * PI * PI * k.hbar * k.hbar) / (2.0 * m * width * width)
}

/// Quantum harmonic oscillator level [J].
///
/// `E_n = ħω (n + 1/2)`, n ≥ 0.
pub fn harmonic_oscillator_energy(k: &PhysicalConstants, n: u32, omega: f64) -> f64 {
    k.hbar * omega * (f64::from(n) + 0.5)
}

/// Wavelength [m] of a photon with angular frequency `omega`: `2πc/ω`.
pub fn photon_wavelength(k: &PhysicalConstants, omega: f64) -> f64 {
    2.0 * PI * k.c / omega
}

/// Total relativistic energy [J] from the dispersion relation
/// `E² = (pc)² + (mc²)²`.
pub fn relativistic_energy(k: &PhysicalConstants, p: f64, m: f64) -> f64 {
    let pc = p * k.c;
    let rest = m * k.c * k.c;
    pc.hypot(rest)
}

/// Kinetic energy [J]: total relativistic energy minus `mc²`.
pub fn kinetic_energy(k: &PhysicalConstants, p: f64, m: f64) -> f64 {
    relativistic_energy(k, p, m) - m * k.c * k.c
}

#[cfg(test)]
mod tests {
    use super::*;
    use qgrav_types::constants::{EV_TO_J, M_ELECTRON};

    fn si() -> PhysicalConstants {
        PhysicalConstants::si2019()
    }

    #[test]
    fn test_heisenberg_saturates_bound() {
        let k = si();
        let dx = 1e-10;
        let dp = heisenberg_min_momentum(&k, dx);
        let ratio = dx * dp / (k.hbar / 2.0);
        assert!((ratio - 1.0).abs() < 1e-15, "ratio = {ratio}");
    }

    #[test]
    fn test_bohr_atom_velocity() {
        // Δx = 0.1 nm, electron: Δv ≈ 5.79e5 m/s, under 0.2% of c.
        let k = si();
        let dp = heisenberg_min_momentum(&k, 1e-10);
        let dv = velocity_uncertainty(dp, M_ELECTRON);
        assert!((dv - 5.788e5).abs() / 5.788e5 < 1e-3, "Δv = {dv:e}");
        assert!(dv / k.c < 2e-3);
    }

    #[test]
    fn test_planck_scale_velocity_is_half_c() {
        // Δx = l_P with m = m_P gives Δv = c/2 exactly.
        let k = si();
        let dp = heisenberg_min_momentum(&k, k.planck_length);
        let dv = velocity_uncertainty(dp, k.planck_mass);
        assert!((dv / k.c - 0.5).abs() < 1e-12, "Δv/c = {}", dv / k.c);
    }

    #[test]
    fn test_electron_in_1nm_well() {
        // Ground state ≈ 0.376 eV.
        let k = si();
        let e1 = infinite_well_energy(&k, 1, 1e-9, M_ELECTRON) / EV_TO_J;
        assert!((e1 - 0.376).abs() < 1e-3, "E1 = {e1} eV");
    }

    #[test]
    fn test_well_scales_with_n_squared() {
        let k = si();
        let e1 = infinite_well_energy(&k, 1, 1e-9, M_ELECTRON);
        let e3 = infinite_well_energy(&k, 3, 1e-9, M_ELECTRON);
        assert!((e3 / e1 - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_oscillator_zero_point() {
        let k = si();
        let omega = 1e15;
        let e0 = harmonic_oscillator_energy(&k, 0, omega);
        assert_eq!(e0, k.hbar * omega / 2.0);
    }

    #[test]
    fn test_oscillator_level_spacing() {
        let k = si();
        let omega = 1e15;
        let e2 = harmonic_oscillator_energy(&k, 2, omega);
        let e3 = harmonic_oscillator_energy(&k, 3, omega);
        assert!(((e3 - e2) - k.hbar * omega).abs() / (k.hbar * omega) < 1e-12);
    }

    #[test]
    fn test_photon_wavelength_optical() {
        // ω = 1e15 rad/s → λ ≈ 1.88 µm.
        let lambda = photon_wavelength(&si(), 1e15);
        assert!((lambda - 1.8836e-6).abs() / 1.8836e-6 < 1e-3, "λ = {lambda:e}");
    }

    #[test]
    fn test_dispersion_at_rest_is_rest_energy() {
        let k = si();
        let e = relativistic_energy(&k, 0.0, M_ELECTRON);
        assert_eq!(e, M_ELECTRON * k.c * k.c);
        assert_eq!(kinetic_energy(&k, 0.0, M_ELECTRON), 0.0);
    }

    #[test]
    fn test_dispersion_massless_is_pc() {
        let k = si();
        let p = 1e-27;
        assert!((relativistic_energy(&k, p, 0.0) - p * k.c).abs() < 1e-30);
    }

    #[test]
    fn test_electron_kinetic_energy_positive() {
        // p = 1e-24 kg·m/s: relativistic, K ≈ 0.25 MeV.
        let k = si();
        let kin = kinetic_energy(&k, 1e-24, M_ELECTRON);
        let total = relativistic_energy(&k, 1e-24, M_ELECTRON);
        assert!(kin > 0.0);
        assert!(kin < total);
        let squared = (1e-24 * k.c).powi(2) + (M_ELECTRON * k.c * k.c).powi(2);
        assert!((total - squared.sqrt()).abs() / total < 1e-15);
    }
}
