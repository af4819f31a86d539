// ─────────────────────────────────────────────────────────────────────
// QGrav — GUP Report
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::io::Write;

use qgrav_core::gup::{Gup3d, VALID_REGIME_RATIO};
use qgrav_types::error::QgravResult;
use qgrav_types::PhysicalConstants;

use crate::report::write_header;

/// ⟨P²⟩ samples for the commutator table: logspace(0, 30, 5).
fn p_squared_samples() -> [f64; 5] {
    [0.0, 7.5, 15.0, 22.5, 30.0].map(|e| 10f64.powf(e))
}

/// Couplings compared in the minimum-uncertainty table.
const ALPHA_TABLE: [(&str, f64); 3] = [("α = 1/2", 0.5), ("α = 3/5", 0.6), ("α = 1", 1.0)];

/// Momentum spreads in units of ħ/l_P for the truncation check.
const DELTA_P_FACTORS: [f64; 4] = [1e-30, 1e-25, 1e-20, 1e-15];

/// Full GUP report for the given coupling pair.
pub fn render_gup_report(
    k: &PhysicalConstants,
    gup: &Gup3d,
    out: &mut dyn Write,
) -> QgravResult<()> {
    canonical_commutator(gup, out)?;
    minimum_uncertainty(k, out)?;
    planck_scale_alpha(k, gup, out)?;
    jacobi(gup, out)?;
    truncation_regime(k, gup, out)?;
    Ok(())
}

fn canonical_commutator(gup: &Gup3d, out: &mut dyn Write) -> QgravResult<()> {
    write_header(out, "GUP: 3D CANONICAL COMMUTATOR")?;
    writeln!(out, "[X_i, P_j] = iħ [δ_ij f(P²) + g(P²) P_i P_j]")?;
    writeln!(out, "f(P²) = 1 + α l_P² P²,  g(P²) = β l_P² (constant)")?;
    writeln!(out, "α = {}, β = {}", gup.alpha(), gup.beta())?;
    writeln!(out)?;
    writeln!(out, "{:>15} | {:>20} | {:>20}", "P² (kg·m/s)²", "f(P²)", "g(P²)")?;
    writeln!(out, "{}", "-".repeat(61))?;
    for p2 in p_squared_samples() {
        let (f, g) = gup.canonical_commutator(p2);
        writeln!(out, "{p2:>15.6e} | {f:>20.12} | {g:>20.12e}")?;
    }
    Ok(())
}

fn minimum_uncertainty(k: &PhysicalConstants, out: &mut dyn Write) -> QgravResult<()> {
    write_header(out, "GUP: MINIMUM POSITION UNCERTAINTY")?;
    writeln!(out, "(ΔX)_min = √(5α/3) l_P")?;
    writeln!(out)?;
    writeln!(out, "{:>12} | {:>16} | {:>14}", "coupling", "(ΔX)_min (m)", "(ΔX)_min / l_P")?;
    writeln!(out, "{}", "-".repeat(48))?;
    for (label, alpha) in ALPHA_TABLE {
        let dx = Gup3d::new(k, alpha).minimum_position_uncertainty();
        writeln!(out, "{label:>12} | {dx:>16.6e} | {:>14.6}", dx / k.planck_length)?;
    }
    Ok(())
}

fn planck_scale_alpha(k: &PhysicalConstants, gup: &Gup3d, out: &mut dyn Write) -> QgravResult<()> {
    write_header(out, "GUP: COUPLING FOR (ΔX)_min = l_P")?;
    let alpha = Gup3d::alpha_for_planck_scale();
    writeln!(out, "√(5α/3) l_P = l_P  ⟹  α = 3/5 = {alpha}")?;
    let dx = Gup3d::new(k, alpha).minimum_position_uncertainty();
    let diff_percent = (dx - k.planck_length).abs() / k.planck_length * 100.0;
    writeln!(out, "(ΔX)_min = {dx:.6e} m")?;
    writeln!(out, "l_P      = {:.6e} m", k.planck_length)?;
    writeln!(out, "Difference: {diff_percent:.6e} %")?;
    if (gup.alpha() - alpha).abs() > f64::EPSILON {
        writeln!(
            out,
            "Configured α = {} gives (ΔX)_min = {:.6} l_P",
            gup.alpha(),
            gup.minimum_position_uncertainty() / k.planck_length
        )?;
    }
    Ok(())
}

fn jacobi(gup: &Gup3d, out: &mut dyn Write) -> QgravResult<()> {
    write_header(out, "GUP: JACOBI IDENTITY")?;
    let report = gup.verify_jacobi_consistency();
    writeln!(out, "[P_i, [P_j, P_k]] + cyclic = 0  requires  β = 2α")?;
    writeln!(out, "  α          = {}", report.alpha)?;
    writeln!(out, "  β          = {}", report.beta)?;
    writeln!(out, "  β expected = {}", report.expected_beta)?;
    writeln!(out, "  difference = {:.6e}", report.difference)?;
    let status = if report.satisfied { "PASS" } else { "FAIL" };
    writeln!(out, "{status}: Jacobi consistency")?;
    Ok(())
}

fn truncation_regime(k: &PhysicalConstants, gup: &Gup3d, out: &mut dyn Write) -> QgravResult<()> {
    write_header(out, "GUP: O(l_P²) TRUNCATION REGIME")?;
    writeln!(
        out,
        "[X_i, X_j] = -2iħα l_P² (X_i P_j - X_j P_i) + O(l_P⁴); valid while ratio < {VALID_REGIME_RATIO}"
    )?;
    writeln!(out)?;
    writeln!(out, "{:>16} | {:>16} | {:>6}", "ΔP (kg·m/s)", "O(l_P⁴)/leading", "valid")?;
    writeln!(out, "{}", "-".repeat(44))?;
    for factor in DELTA_P_FACTORS {
        let dp = factor * k.hbar / k.planck_length;
        let est = gup.spatial_commutator_estimate(dp);
        let valid = if est.valid_regime { "yes" } else { "no" };
        writeln!(out, "{dp:>16.6e} | {:>16.6e} | {valid:>6}", est.ratio)?;
    }
    Ok(())
}
