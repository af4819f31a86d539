// ─────────────────────────────────────────────────────────────────────
// QGrav — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{AU, M_SUN};
use crate::error::{QgravError, QgravResult};

/// Top-level configuration. Every field is optional in JSON; an empty
/// object `{}` yields the stock report inputs and recorder settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QgravConfig {
    pub samples: SampleInputs,
    pub capture: CaptureConfig,
}

/// Sample inputs evaluated by the report sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleInputs {
    /// Position uncertainty for the Bohr-atom case [m] (default: 0.1 nm).
    pub bohr_delta_x: f64,
    /// Infinite well width [m] (default: 1 nm).
    pub well_width: f64,
    /// Number of well levels tabulated, starting at n=1 (default: 5).
    pub well_levels: u32,
    /// Oscillator angular frequency [rad/s] (default: 1e15).
    pub oscillator_omega: f64,
    /// Number of oscillator levels tabulated, starting at n=0 (default: 5).
    pub oscillator_levels: u32,
    /// Dust density, arbitrary units (default: 1.0).
    pub dust_density: f64,
    /// Dust four-velocity (default: at rest).
    pub four_velocity: [f64; 4],
    /// Central mass for the metric section [kg] (default: M_sun).
    pub metric_mass: f64,
    /// Radial coordinate for the metric section [m] (default: 1 AU).
    pub metric_radius: f64,
    /// Black hole mass for Hawking / Bekenstein sections [kg] (default: 5 M_sun).
    pub black_hole_mass: f64,
    /// Electron momentum for the dispersion section [kg·m/s] (default: 1e-24).
    pub electron_momentum: f64,
    /// GUP coupling (default: 0.6).
    pub gup_alpha: f64,
}

impl Default for SampleInputs {
    fn default() -> Self {
        Self {
            bohr_delta_x: 1e-10,
            well_width: 1e-9,
            well_levels: 5,
            oscillator_omega: 1e15,
            oscillator_levels: 5,
            dust_density: 1.0,
            four_velocity: [1.0, 0.0, 0.0, 0.0],
            metric_mass: M_SUN,
            metric_radius: AU,
            black_hole_mass: 5.0 * M_SUN,
            electron_momentum: 1e-24,
            gup_alpha: 0.6,
        }
    }
}

/// External screen recorder settings. Defaults reproduce an ffmpeg
/// desktop grab at 30 fps, H.264, capped at 8 minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    pub program: String,
    pub input_format: String,
    pub input: String,
    pub framerate: u32,
    pub codec: String,
    pub pixel_format: String,
    pub preset: String,
    pub crf: u32,
    pub max_duration_s: u64,
    pub output: PathBuf,
    /// Working directory for the recorded workload command.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<PathBuf>,
    /// Wait before the recorder is spawned (default: 2000).
    pub pre_roll_ms: u64,
    /// Wait after spawning so the recorder can initialise (default: 3000).
    pub startup_delay_ms: u64,
    /// Wait after the workload finishes before stopping (default: 5000).
    pub tail_delay_ms: u64,
    /// Grace period for the recorder to exit before it is killed (default: 10000).
    pub stop_timeout_ms: u64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            program: "ffmpeg".to_string(),
            input_format: "gdigrab".to_string(),
            input: "desktop".to_string(),
            framerate: 30,
            codec: "libx264".to_string(),
            pixel_format: "yuv420p".to_string(),
            preset: "fast".to_string(),
            crf: 23,
            max_duration_s: 480,
            output: PathBuf::from("qgrav_capture.mp4"),
            working_dir: None,
            pre_roll_ms: 2000,
            startup_delay_ms: 3000,
            tail_delay_ms: 5000,
            stop_timeout_ms: 10_000,
        }
    }
}

impl QgravConfig {
    /// Load from JSON file.
    pub fn from_file(path: &str) -> QgravResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        log::debug!("loaded config from {path}");
        Ok(config)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> QgravResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> QgravResult<()> {
        self.samples.validate()?;
        self.capture.validate()
    }
}

fn require_positive(name: &str, value: f64) -> QgravResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(QgravError::ConfigError(format!(
            "{name} must be finite and > 0, got {value}"
        )));
    }
    Ok(())
}

impl SampleInputs {
    pub fn validate(&self) -> QgravResult<()> {
        require_positive("bohr_delta_x", self.bohr_delta_x)?;
        require_positive("well_width", self.well_width)?;
        require_positive("oscillator_omega", self.oscillator_omega)?;
        require_positive("metric_mass", self.metric_mass)?;
        require_positive("metric_radius", self.metric_radius)?;
        require_positive("black_hole_mass", self.black_hole_mass)?;
        require_positive("gup_alpha", self.gup_alpha)?;
        if self.well_levels == 0 {
            return Err(QgravError::ConfigError(
                "well_levels must be >= 1".to_string(),
            ));
        }
        if !self.dust_density.is_finite() || self.four_velocity.iter().any(|u| !u.is_finite()) {
            return Err(QgravError::ConfigError(
                "dust density and four-velocity must be finite".to_string(),
            ));
        }
        if !self.electron_momentum.is_finite() {
            return Err(QgravError::ConfigError(format!(
                "electron_momentum must be finite, got {}",
                self.electron_momentum
            )));
        }
        Ok(())
    }
}

impl CaptureConfig {
    pub fn validate(&self) -> QgravResult<()> {
        if self.program.trim().is_empty() {
            return Err(QgravError::ConfigError(
                "capture.program must not be empty".to_string(),
            ));
        }
        if self.output.as_os_str().is_empty() {
            return Err(QgravError::ConfigError(
                "capture.output must not be empty".to_string(),
            ));
        }
        if self.framerate == 0 {
            return Err(QgravError::ConfigError(
                "capture.framerate must be > 0".to_string(),
            ));
        }
        if self.crf > 51 {
            return Err(QgravError::ConfigError(format!(
                "capture.crf must be in [0, 51], got {}",
                self.crf
            )));
        }
        if self.stop_timeout_ms == 0 {
            return Err(QgravError::ConfigError(
                "capture.stop_timeout_ms must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
