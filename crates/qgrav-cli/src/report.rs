// ─────────────────────────────────────────────────────────────────────
// QGrav — Report Sections
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Formula evaluations at the configured sample inputs, rendered as text.

use std::io::Write;

use clap::ValueEnum;
use qgrav_core::black_hole::{
    bekenstein_hawking_entropy, hawking_temperature, microstate_exponent,
};
use qgrav_core::quantum::{
    harmonic_oscillator_energy, heisenberg_min_momentum, infinite_well_energy, kinetic_energy,
    photon_wavelength, relativistic_energy, velocity_uncertainty,
};
use qgrav_core::relativity::{
    dust_stress_energy, einstein_coupling, schwarzschild_metric, schwarzschild_radius, DIM,
};
use qgrav_types::config::SampleInputs;
use qgrav_types::constants::{EV_TO_J, LAMBDA_OBSERVED, MEV_TO_J, M_ELECTRON};
use qgrav_types::error::QgravResult;
use qgrav_types::PhysicalConstants;

/// Width of the `=` rule under section titles.
pub const RULE_WIDTH: usize = 80;

/// Tensor components at or below this magnitude are not listed.
const TENSOR_PRINT_FLOOR: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Constants,
    Heisenberg,
    Schrodinger,
    Oscillator,
    StressEnergy,
    Einstein,
    Hawking,
    Dispersion,
    Bekenstein,
    Synthesis,
}

impl Section {
    pub const ALL: [Section; 10] = [
        Section::Constants,
        Section::Heisenberg,
        Section::Schrodinger,
        Section::Oscillator,
        Section::StressEnergy,
        Section::Einstein,
        Section::Hawking,
        Section::Dispersion,
        Section::Bekenstein,
        Section::Synthesis,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Constants => "FUNDAMENTAL CONSTANTS",
            Section::Heisenberg => "HEISENBERG UNCERTAINTY PRINCIPLE",
            Section::Schrodinger => "TIME-INDEPENDENT SCHRÖDINGER EQUATION",
            Section::Oscillator => "QUANTUM HARMONIC OSCILLATOR",
            Section::StressEnergy => "STRESS-ENERGY TENSOR (GENERAL RELATIVITY)",
            Section::Einstein => "EINSTEIN FIELD EQUATION",
            Section::Hawking => "QUANTUM FIELDS IN CURVED SPACETIME",
            Section::Dispersion => "RELATIVISTIC DISPERSION RELATION",
            Section::Bekenstein => "BLACK HOLE ENTROPY (BEKENSTEIN-HAWKING)",
            Section::Synthesis => "SYNTHESIS: QUANTUM-GRAVITATIONAL SCALES",
        }
    }
}

pub(crate) fn write_header(out: &mut dyn Write, title: &str) -> QgravResult<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    Ok(())
}

/// Renders report sections for one constant set and one set of inputs.
pub struct Reporter<'a> {
    k: &'a PhysicalConstants,
    samples: &'a SampleInputs,
}

impl<'a> Reporter<'a> {
    pub fn new(k: &'a PhysicalConstants, samples: &'a SampleInputs) -> Self {
        Self { k, samples }
    }

    pub fn render_all(&self, out: &mut dyn Write) -> QgravResult<()> {
        for section in Section::ALL {
            self.render(section, out)?;
        }
        Ok(())
    }

    pub fn render(&self, section: Section, out: &mut dyn Write) -> QgravResult<()> {
        log::debug!("rendering section {section:?}");
        write_header(out, section.title())?;
        match section {
            Section::Constants => self.constants(out),
            Section::Heisenberg => self.heisenberg(out),
            Section::Schrodinger => self.schrodinger(out),
            Section::Oscillator => self.oscillator(out),
            Section::StressEnergy => self.stress_energy(out),
            Section::Einstein => self.einstein(out),
            Section::Hawking => self.hawking(out),
            Section::Dispersion => self.dispersion(out),
            Section::Bekenstein => self.bekenstein(out),
            Section::Synthesis => self.synthesis(out),
        }
    }

    fn constants(&self, out: &mut dyn Write) -> QgravResult<()> {
        let k = self.k;
        writeln!(out, "Reduced Planck constant (ħ):   {:.6e} J·s", k.hbar)?;
        writeln!(out, "Speed of light (c):            {:.6e} m/s", k.c)?;
        writeln!(out, "Gravitational constant (G):    {:.6e} m³/kg·s²", k.g)?;
        writeln!(out, "Boltzmann constant (k_B):      {:.6e} J/K", k.k_b)?;
        writeln!(out, "Planck length (l_P):           {:.6e} m", k.planck_length)?;
        writeln!(out, "Planck mass (m_P):             {:.6e} kg", k.planck_mass)?;
        writeln!(out, "Planck time (t_P):             {:.6e} s", k.planck_time)?;
        writeln!(out, "Planck energy (E_P):           {:.6e} J", k.planck_energy)?;
        Ok(())
    }

    fn heisenberg(&self, out: &mut dyn Write) -> QgravResult<()> {
        let k = self.k;
        writeln!(out, "Relation: Δx·Δp ≥ ħ/2 (equality for minimum-uncertainty states)")?;

        let cases = [
            ("Electron localised to an atom", self.samples.bohr_delta_x, M_ELECTRON),
            ("Planck-mass particle at the Planck length", k.planck_length, k.planck_mass),
        ];
        for (label, dx, mass) in cases {
            let dp = heisenberg_min_momentum(k, dx);
            let dv = velocity_uncertainty(dp, mass);
            writeln!(out)?;
            writeln!(out, "{label}")?;
            writeln!(out, "  Position uncertainty (Δx):     {dx:.6e} m")?;
            writeln!(out, "  Minimum momentum (Δp):         {dp:.6e} kg·m/s")?;
            writeln!(out, "  Minimum velocity (Δv):         {dv:.6e} m/s")?;
            writeln!(out, "  Fraction of c:                 {:.2}%", dv / k.c * 100.0)?;
        }

        let dx = self.samples.bohr_delta_x;
        let product = dx * heisenberg_min_momentum(k, dx);
        writeln!(out)?;
        writeln!(out, "Check: Δx·Δp = {product:.6e} J·s")?;
        writeln!(out, "       ħ/2   = {:.6e} J·s", k.hbar / 2.0)?;
        writeln!(out, "       ratio = {:.6}", product / (k.hbar / 2.0))?;
        Ok(())
    }

    fn schrodinger(&self, out: &mut dyn Write) -> QgravResult<()> {
        let width = self.samples.well_width;
        writeln!(out, "Particle in an infinite well: E_n = n² π² ħ² / (2 m L²)")?;
        writeln!(out, "Electron, L = {width:.3e} m")?;
        writeln!(out, "{:>6} | {:>14} | {:>12}", "n", "Energy (J)", "Energy (eV)")?;
        writeln!(out, "{}", "-".repeat(40))?;
        for n in 1..=self.samples.well_levels {
            let e = infinite_well_energy(self.k, n, width, M_ELECTRON);
            writeln!(out, "{n:>6} | {e:>14.6e} | {:>12.6}", e / EV_TO_J)?;
        }
        Ok(())
    }

    fn oscillator(&self, out: &mut dyn Write) -> QgravResult<()> {
        let omega = self.samples.oscillator_omega;
        let zero_point = harmonic_oscillator_energy(self.k, 0, omega);
        let lambda = photon_wavelength(self.k, omega);
        writeln!(out, "E_n = ħω (n + 1/2), ω = {omega:.3e} rad/s")?;
        writeln!(out, "Zero-point energy: {zero_point:.6e} J")?;
        writeln!(out, "Photon wavelength: {lambda:.6e} m")?;
        writeln!(out, "{:>6} | {:>14} | {:>12}", "n", "Energy (J)", "E_n / E_0")?;
        writeln!(out, "{}", "-".repeat(40))?;
        for n in 0..self.samples.oscillator_levels {
            let e = harmonic_oscillator_energy(self.k, n, omega);
            writeln!(out, "{n:>6} | {e:>14.6e} | {:>12.1}", e / zero_point)?;
        }
        Ok(())
    }

    fn stress_energy(&self, out: &mut dyn Write) -> QgravResult<()> {
        let rho = self.samples.dust_density;
        let u = self.samples.four_velocity;
        writeln!(out, "Pressureless dust: T^μν = ρ u^μ u^ν")?;
        writeln!(out, "ρ = {rho:.6e}, u = {u:?}")?;
        let t = dust_stress_energy(rho, &u);
        let mut listed = 0;
        for mu in 0..DIM {
            for nu in 0..DIM {
                let v = t[[mu, nu]];
                if v.abs() > TENSOR_PRINT_FLOOR {
                    writeln!(out, "T^{mu}{nu} = {v:.6e}")?;
                    listed += 1;
                }
            }
        }
        if listed == 0 {
            writeln!(out, "All components vanish")?;
        }
        Ok(())
    }

    fn einstein(&self, out: &mut dyn Write) -> QgravResult<()> {
        let k = self.k;
        let mass = self.samples.metric_mass;
        let r = self.samples.metric_radius;
        writeln!(out, "G^μν + Λ g^μν = κ T^μν")?;
        writeln!(out, "Coupling κ = 8πG/c⁴ = {:.6e} m/J", einstein_coupling(k))?;

        let metric = schwarzschild_metric(k, r, mass)?;
        writeln!(out)?;
        writeln!(out, "Schwarzschild metric")?;
        writeln!(out, "  Central mass:         {mass:.6e} kg")?;
        writeln!(out, "  Schwarzschild radius: {:.6e} m", metric.schwarzschild_radius)?;
        writeln!(out, "  Radial coordinate:    {r:.6e} m")?;
        let g = metric.to_matrix();
        writeln!(out, "  g₀₀ = {:.15}", g[[0, 0]])?;
        writeln!(out, "  g₁₁ = {:.15}", g[[1, 1]])?;
        writeln!(out, "  g₂₂ = {:.6e}", g[[2, 2]])?;
        writeln!(out, "  g₃₃ = {:.6e}", g[[3, 3]])?;
        let off_diagonal = (0..DIM)
            .flat_map(|mu| (0..DIM).map(move |nu| (mu, nu)))
            .filter(|&(mu, nu)| mu != nu && g[[mu, nu]] != 0.0)
            .count();
        writeln!(out, "  Off-diagonal non-zero components: {off_diagonal}")?;
        writeln!(
            out,
            "  Deviation from flat: {:.6e}%",
            metric.flatness_deviation_percent()
        )?;
        Ok(())
    }

    fn hawking(&self, out: &mut dyn Write) -> QgravResult<()> {
        let mass = self.samples.black_hole_mass;
        writeln!(out, "Hawking radiation: T_H = ħc³ / (8π k_B G M)")?;
        writeln!(out, "Black hole mass:     {mass:.6e} kg")?;
        writeln!(
            out,
            "Hawking temperature: {:.6e} K",
            hawking_temperature(self.k, mass)
        )?;
        Ok(())
    }

    fn dispersion(&self, out: &mut dyn Write) -> QgravResult<()> {
        let k = self.k;
        let p = self.samples.electron_momentum;
        let rest = M_ELECTRON * k.c * k.c;
        let total = relativistic_energy(k, p, M_ELECTRON);
        let kinetic = kinetic_energy(k, p, M_ELECTRON);
        writeln!(out, "E² = (pc)² + (mc²)²")?;
        writeln!(out, "Electron with p = {p:.3e} kg·m/s")?;
        writeln!(out, "Rest energy (E₀):   {rest:.6e} J ({:.6} MeV)", rest / MEV_TO_J)?;
        writeln!(out, "Total energy (E):   {total:.6e} J ({:.6} MeV)", total / MEV_TO_J)?;
        writeln!(out, "Kinetic energy (K): {kinetic:.6e} J ({:.6} MeV)", kinetic / MEV_TO_J)?;
        Ok(())
    }

    fn bekenstein(&self, out: &mut dyn Write) -> QgravResult<()> {
        let mass = self.samples.black_hole_mass;
        let s = bekenstein_hawking_entropy(self.k, mass);
        writeln!(out, "S = A k_B c³ / (4ħG)")?;
        writeln!(out, "Mass:    {mass:.6e} kg")?;
        writeln!(out, "Entropy: {s:.6e} J/K")?;
        writeln!(
            out,
            "Quantum microstates: 10^{:.2e}",
            microstate_exponent(self.k, s)
        )?;
        Ok(())
    }

    fn synthesis(&self, out: &mut dyn Write) -> QgravResult<()> {
        let k = self.k;
        let r_s = schwarzschild_radius(k, self.samples.metric_mass);
        let metric = schwarzschild_metric(k, self.samples.metric_radius, self.samples.metric_mass)?;
        let dp_planck = heisenberg_min_momentum(k, k.planck_length);

        writeln!(out, "Quantum regime (small scales):")?;
        writeln!(out, "  Planck length: {:.6e} m", k.planck_length)?;
        writeln!(out, "  Planck mass:   {:.6e} kg", k.planck_mass)?;
        writeln!(out, "  Planck time:   {:.6e} s", k.planck_time)?;
        writeln!(out, "  Planck energy: {:.6e} J", k.planck_energy)?;
        writeln!(out, "Gravitational regime (large scales):")?;
        writeln!(out, "  Schwarzschild radius of central mass: {r_s:.6e} m")?;
        writeln!(out, "  Observed cosmological constant:       {LAMBDA_OBSERVED:.6e} m⁻²")?;
        writeln!(out, "Quantum-classical transition:")?;
        writeln!(out, "  l_P / r_s = {:.6e}", k.planck_length / r_s)?;
        writeln!(out, "Numerical checks:")?;
        writeln!(
            out,
            "  Uncertainty at Planck scale: Δx·Δp = {:.6e} J·s (ħ/2 = {:.6e})",
            k.planck_length * dp_planck,
            k.hbar / 2.0
        )?;
        writeln!(
            out,
            "  Metric deviation from flat:  {:.6e}%",
            metric.flatness_deviation_percent()
        )?;
        writeln!(
            out,
            "  Hawking temperature:         {:.6e} K",
            hawking_temperature(k, self.samples.black_hole_mass)
        )?;
        Ok(())
    }
}
