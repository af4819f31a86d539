// ─────────────────────────────────────────────────────────────────────
// QGrav — General Relativity
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Dust stress-energy, Einstein coupling and the exterior Schwarzschild metric.

use ndarray::Array2;
use qgrav_types::error::{QgravError, QgravResult};
use qgrav_types::PhysicalConstants;
use std::f64::consts::PI;

/// Spacetime dimension.
pub const DIM: usize = 4;

/// Diagonal Schwarzschild metric components at a point outside the horizon.
///
/// Sign convention (-,+,+,+); the angular components are reported at the
/// equator, so `g33 == g22 == r²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricComponents {
    pub g00: f64,
    pub g11: f64,
    pub g22: f64,
    pub g33: f64,
    pub schwarzschild_radius: f64,
}

impl MetricComponents {
    /// Percent deviation of g₀₀ from the Minkowski value −1.
    pub fn flatness_deviation_percent(&self) -> f64 {
        (1.0 + self.g00).abs() * 100.0
    }

    /// The metric as a 4×4 diagonal matrix.
    pub fn to_matrix(&self) -> Array2<f64> {
        Array2::from_diag(&ndarray::arr1(&[self.g00, self.g11, self.g22, self.g33]))
    }
}

/// Stress-energy tensor of pressureless dust: `T^μν = ρ u^μ u^ν`.
pub fn dust_stress_energy(rho: f64, u: &[f64; DIM]) -> Array2<f64> {
    Array2::from_shape_fn((DIM, DIM), |(mu, nu)| rho * (u[mu] * u[nu]))
}

/// Einstein coupling κ = 8πG/c⁴ [m/J].
pub fn einstein_coupling(k: &PhysicalConstants) -> f64 {
    8.0 * PI * k.g / k.c.powi(4)
}

/// Schwarzschild radius `r_s = 2GM/c²` [m].
pub fn schwarzschild_radius(k: &PhysicalConstants, mass: f64) -> f64 {
    k.schwarzschild_coefficient() * mass
}

/// Exterior Schwarzschild metric at radius `r` around mass `mass`.
///
/// Fails with [`QgravError::InsideHorizon`] when `r <= r_s` (or `r` is
/// not finite), where the static chart is singular.
pub fn schwarzschild_metric(
    k: &PhysicalConstants,
    r: f64,
    mass: f64,
) -> QgravResult<MetricComponents> {
    let r_s = schwarzschild_radius(k, mass);
    if !r.is_finite() || r <= r_s {
        log::debug!("rejecting r={r:e} m at or inside r_s={r_s:e} m");
        return Err(QgravError::InsideHorizon {
            radius: r,
            schwarzschild_radius: r_s,
        });
    }

    let lapse = 1.0 - r_s / r;
    let r2 = r * r;
    Ok(MetricComponents {
        g00: -lapse,
        g11: 1.0 / lapse,
        g22: r2,
        g33: r2,
        schwarzschild_radius: r_s,
    })
}
