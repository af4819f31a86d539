// ─────────────────────────────────────────────────────────────────────
// QGrav — Recording Orchestration
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Pre-roll, start recorder, run workload, tail, stop recorder, check output.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use std::thread;
use std::time::Duration;

use qgrav_types::config::CaptureConfig;
use qgrav_types::error::{QgravError, QgravResult};

use crate::session::CaptureSession;

/// What a finished recording produced.
#[derive(Debug, Clone)]
pub struct RecordingSummary {
    pub output: PathBuf,
    pub size_bytes: u64,
    /// `None` if the recorder had already been stopped elsewhere.
    pub recorder_status: Option<ExitStatus>,
}

impl RecordingSummary {
    pub fn size_mib(&self) -> f64 {
        self.size_bytes as f64 / (1024.0 * 1024.0)
    }
}

fn pause(ms: u64) {
    if ms > 0 {
        thread::sleep(Duration::from_millis(ms));
    }
}

/// Record `workload` with the recorder described by `cfg`.
pub fn record<F>(cfg: &CaptureConfig, workload: F) -> QgravResult<RecordingSummary>
where
    F: FnOnce() -> QgravResult<()>,
{
    pause(cfg.pre_roll_ms);
    let session = CaptureSession::start(cfg)?;
    record_with_session(session, cfg, workload)
}

/// Drive an already running session. The session is stopped before this
/// returns, whether the workload succeeds or not.
pub fn record_with_session<F>(
    mut session: CaptureSession,
    cfg: &CaptureConfig,
    workload: F,
) -> QgravResult<RecordingSummary>
where
    F: FnOnce() -> QgravResult<()>,
{
    pause(cfg.startup_delay_ms);

    let outcome = workload();
    if outcome.is_ok() {
        pause(cfg.tail_delay_ms);
    } else {
        log::warn!("workload failed, stopping recorder early");
    }

    let stopped = session.stop();
    outcome?;
    let recorder_status = stopped?;

    // Relative outputs resolve against our cwd: the recorder is spawned from here.
    let output = cfg.output.clone();
    let size_bytes = match std::fs::metadata(&output) {
        Ok(meta) => meta.len(),
        Err(e) => {
            return Err(QgravError::Capture(format!(
                "recorder produced no output at {}: {e}",
                output.display()
            )))
        }
    };
    log::info!("recording saved to {} ({size_bytes} bytes)", output.display());

    Ok(RecordingSummary {
        output,
        size_bytes,
        recorder_status,
    })
}

/// Run an external program to completion as the recorded workload.
pub fn run_external(program: &str, args: &[String], working_dir: Option<&Path>) -> QgravResult<()> {
    let mut cmd = Command::new(program);
    cmd.args(args);
    if let Some(dir) = working_dir {
        cmd.current_dir(dir);
    }
    log::info!("running workload `{program}` {args:?}");
    let status = cmd.status()?;
    if !status.success() {
        return Err(QgravError::Capture(format!(
            "workload `{program}` exited with {status}"
        )));
    }
    Ok(())
}
