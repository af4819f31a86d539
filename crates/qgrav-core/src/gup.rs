// ─────────────────────────────────────────────────────────────────────
// QGrav — Generalized Uncertainty Principle (3D)
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Isotropic 3+1D generalized uncertainty principle (Kempf–Mangano–Mann
//! form) truncated at O(l_P²).
//!
//! The canonical commutator is
//! `[X_i, P_j] = iħ [δ_ij f(P²) + g(P²) P_i P_j]` with
//! `f = 1 + α l_P² P²` and `g = β l_P²`. The Jacobi identity on the
//! momentum algebra forces `β = 2α`.
//!
//! With `⟨P_i P_j⟩ = δ_ij ⟨P²⟩ / 3` the uncertainty relation becomes
//! `ΔX ΔP ≥ (ħ/2)(1 + (5/3) α l_P² ΔP²)`, minimised at
//! `ΔX_min = √(5α/3) l_P`.

use qgrav_types::error::{QgravError, QgravResult};
use qgrav_types::PhysicalConstants;

/// Physically preferred coupling, giving `ΔX_min = l_P`.
pub const DEFAULT_ALPHA: f64 = 0.6;

/// Relative tolerance for the `β = 2α` check.
pub const JACOBI_REL_TOL: f64 = 1e-10;

/// O(l_P⁴) / leading-term ratio below which truncation is trusted.
pub const VALID_REGIME_RATIO: f64 = 0.1;

/// Leading and estimated higher-order magnitudes of `[X_i, X_j]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommutatorEstimate {
    /// `-2ħα l_P²`.
    pub leading_term: f64,
    /// `α l_P⁴ ΔP³`.
    pub higher_order_term: f64,
    /// `higher_order_term / |leading_term|`, or +∞ when the leading term vanishes.
    pub ratio: f64,
    pub valid_regime: bool,
}

/// Outcome of the Jacobi consistency check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JacobiReport {
    pub alpha: f64,
    pub beta: f64,
    pub expected_beta: f64,
    pub difference: f64,
    pub satisfied: bool,
}

fn jacobi_satisfied(alpha: f64, beta: f64) -> bool {
    let expected = 2.0 * alpha;
    let scale = beta.abs().max(expected.abs());
    (beta - expected).abs() <= JACOBI_REL_TOL * scale
}

/// GUP coupling pair plus the Planck quantities it needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gup3d {
    alpha: f64,
    beta: f64,
    hbar: f64,
    planck_length: f64,
}

impl Default for Gup3d {
    /// SI constants with `α = 3/5`, so that `ΔX_min = l_P`.
    fn default() -> Self {
        Self::new(&PhysicalConstants::si2019(), DEFAULT_ALPHA)
    }
}

impl Gup3d {
    /// Build with `β` derived as `2α`.
    pub fn new(k: &PhysicalConstants, alpha: f64) -> Self {
        Self {
            alpha,
            beta: 2.0 * alpha,
            hbar: k.hbar,
            planck_length: k.planck_length,
        }
    }

    /// Build from an independently supplied `β`, rejecting pairs that break
    /// the Jacobi identity.
    pub fn with_beta(k: &PhysicalConstants, alpha: f64, beta: f64) -> QgravResult<Self> {
        if !jacobi_satisfied(alpha, beta) {
            log::warn!("GUP coupling rejected: alpha={alpha}, beta={beta}");
            return Err(QgravError::JacobiViolation { alpha, beta });
        }
        Ok(Self {
            alpha,
            beta,
            hbar: k.hbar,
            planck_length: k.planck_length,
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Isotropic coefficients `(f(P²), g(P²))` of `[X_i, P_j]`.
    pub fn canonical_commutator(&self, p_squared: f64) -> (f64, f64) {
        let lp2 = self.planck_length * self.planck_length;
        let f = 1.0 + self.alpha * lp2 * p_squared;
        let g = self.beta * lp2;
        (f, g)
    }

    /// Minimal position uncertainty `√(5α/3) l_P` [m].
    pub fn minimum_position_uncertainty(&self) -> f64 {
        (5.0 * self.alpha / 3.0).sqrt() * self.planck_length
    }

    /// Coupling for which `ΔX_min = l_P`: solving `√(5α/3) = 1` gives 3/5.
    pub fn alpha_for_planck_scale() -> f64 {
        3.0 / 5.0
    }

    /// Order-of-magnitude comparison of the O(l_P²) term of `[X_i, X_j]`
    /// against the neglected O(l_P⁴) contribution at momentum spread `delta_p`.
    pub fn spatial_commutator_estimate(&self, delta_p: f64) -> CommutatorEstimate {
        let lp2 = self.planck_length * self.planck_length;
        let leading_term = -2.0 * self.hbar * self.alpha * lp2;
        let higher_order_term = self.alpha * lp2 * lp2 * delta_p.powi(3);
        let ratio = if leading_term != 0.0 {
            higher_order_term / leading_term.abs()
        } else {
            f64::INFINITY
        };
        CommutatorEstimate {
            leading_term,
            higher_order_term,
            ratio,
            valid_regime: ratio < VALID_REGIME_RATIO,
        }
    }

    pub fn verify_jacobi_consistency(&self) -> JacobiReport {
        let expected_beta = 2.0 * self.alpha;
        JacobiReport {
            alpha: self.alpha,
            beta: self.beta,
            expected_beta,
            difference: (self.beta - expected_beta).abs(),
            satisfied: jacobi_satisfied(self.alpha, self.beta),
        }
    }
}
