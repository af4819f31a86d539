// ─────────────────────────────────────────────────────────────────────
// QGrav — Types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Shared constants, configuration and error hierarchy for QGrav.

pub mod config;
pub mod constants;
pub mod error;

pub use config::{CaptureConfig, QgravConfig, SampleInputs};
pub use constants::PhysicalConstants;
pub use error::{QgravError, QgravResult};
