// ─────────────────────────────────────────────────────────────────────
// QGrav — CLI Library
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Human-readable report sections for the `qgrav` binary.

pub mod gup_report;
pub mod report;

pub use gup_report::render_gup_report;
pub use report::{Reporter, Section};
