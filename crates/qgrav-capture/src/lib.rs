// ─────────────────────────────────────────────────────────────────────
// QGrav — Capture
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Wraps a run inside an external screen recorder (ffmpeg by default).
//!
//! The recorder process is owned by [`CaptureSession`], which stops it on
//! every exit path, including early returns and panics.

pub mod recording;
pub mod session;

pub use recording::{record, record_with_session, run_external, RecordingSummary};
pub use session::{recorder_args, recorder_command, CaptureSession};
