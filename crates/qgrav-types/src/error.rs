// ─────────────────────────────────────────────────────────────────────
// QGrav — Error Hierarchy
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QgravError {
    #[error("Inside event horizon: r={radius:e} m <= r_s={schwarzschild_radius:e} m")]
    InsideHorizon {
        radius: f64,
        schwarzschild_radius: f64,
    },

    #[error("Jacobi condition violated: beta={beta} != 2*alpha (alpha={alpha})")]
    JacobiViolation { alpha: f64, beta: f64 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Capture error: {0}")]
    Capture(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type QgravResult<T> = Result<T, QgravError>;
