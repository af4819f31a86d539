// ─────────────────────────────────────────────────────────────────────
// QGrav — Capture Session
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::io::Write;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use qgrav_types::config::CaptureConfig;
use qgrav_types::error::{QgravError, QgravResult};

/// Poll interval while waiting for the recorder to exit.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Recorder argument list, ffmpeg layout:
/// `-f <fmt> -framerate <fps> -i <input> -c:v <codec> -pix_fmt <pix>
///  -preset <preset> -crf <crf> -t <secs> <output>`.
pub fn recorder_args(cfg: &CaptureConfig) -> Vec<String> {
    vec![
        "-f".to_string(),
        cfg.input_format.clone(),
        "-framerate".to_string(),
        cfg.framerate.to_string(),
        "-i".to_string(),
        cfg.input.clone(),
        "-c:v".to_string(),
        cfg.codec.clone(),
        "-pix_fmt".to_string(),
        cfg.pixel_format.clone(),
        "-preset".to_string(),
        cfg.preset.clone(),
        "-crf".to_string(),
        cfg.crf.to_string(),
        "-t".to_string(),
        cfg.max_duration_s.to_string(),
        cfg.output.to_string_lossy().into_owned(),
    ]
}

/// Recorder command with stdout/stderr discarded and stdin piped for the
/// graceful-stop request.
pub fn recorder_command(cfg: &CaptureConfig) -> Command {
    let mut cmd = Command::new(&cfg.program);
    cmd.args(recorder_args(cfg))
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    cmd
}

/// Owned handle on a running recorder process.
///
/// `stop` asks the recorder to finish (`q` on stdin, then EOF), waits up to
/// `stop_timeout`, and kills it if it is still alive. Dropping an unstopped
/// session performs the same shutdown.
#[derive(Debug)]
pub struct CaptureSession {
    child: Option<Child>,
    label: String,
    stop_timeout: Duration,
}

impl CaptureSession {
    /// Spawn the recorder described by `cfg`.
    pub fn start(cfg: &CaptureConfig) -> QgravResult<Self> {
        cfg.validate()?;
        let mut cmd = recorder_command(cfg);
        log::info!(
            "starting recorder `{}` -> {}",
            cfg.program,
            cfg.output.display()
        );
        Self::spawn(&mut cmd, Duration::from_millis(cfg.stop_timeout_ms))
    }

    /// Spawn an arbitrary command as the recorder.
    pub fn spawn(cmd: &mut Command, stop_timeout: Duration) -> QgravResult<Self> {
        let label = cmd.get_program().to_string_lossy().into_owned();
        let child = cmd.spawn()?;
        log::debug!("recorder `{label}` running as pid {}", child.id());
        Ok(Self {
            child: Some(child),
            label,
            stop_timeout,
        })
    }

    /// OS process id, or `None` once stopped.
    pub fn id(&self) -> Option<u32> {
        self.child.as_ref().map(Child::id)
    }

    /// Whether the recorder is still alive.
    pub fn is_running(&mut self) -> QgravResult<bool> {
        match self.child.as_mut() {
            Some(child) => Ok(child.try_wait()?.is_none()),
            None => Ok(false),
        }
    }

    /// Stop the recorder. Idempotent: later calls return `Ok(None)`.
    pub fn stop(&mut self) -> QgravResult<Option<ExitStatus>> {
        let Some(mut child) = self.child.take() else {
            return Ok(None);
        };
        match shutdown(&mut child, self.stop_timeout, &self.label) {
            Ok(status) => {
                log::info!("recorder `{}` exited: {status}", self.label);
                Ok(Some(status))
            }
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                Err(e)
            }
        }
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        if self.child.is_some() {
            if let Err(e) = self.stop() {
                log::warn!("failed to stop recorder `{}` on drop: {e}", self.label);
            }
        }
    }
}

fn shutdown(child: &mut Child, timeout: Duration, label: &str) -> QgravResult<ExitStatus> {
    if let Some(status) = child.try_wait()? {
        return Ok(status);
    }

    // Recorder may already have closed its end; a broken pipe is not fatal.
    if let Some(mut stdin) = child.stdin.take() {
        if let Err(e) = stdin.write_all(b"q\n") {
            log::debug!("graceful stop request to `{label}` failed: {e}");
        }
    }

    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }
        let now = Instant::now();
        if now >= deadline {
            break;
        }
        thread::sleep(POLL_INTERVAL.min(deadline - now));
    }

    log::warn!("recorder `{label}` still running after {timeout:?}, killing");
    if let Err(e) = child.kill() {
        // Exited between the last poll and the kill.
        if e.kind() != std::io::ErrorKind::InvalidInput {
            return Err(QgravError::Capture(format!("kill `{label}`: {e}")));
        }
    }
    Ok(child.wait()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_recorder_args() {
        let cfg = CaptureConfig::default();
        let args = recorder_args(&cfg);
        assert_eq!(
            args,
            vec![
                "-f",
                "gdigrab",
                "-framerate",
                "30",
                "-i",
                "desktop",
                "-c:v",
                "libx264",
                "-pix_fmt",
                "yuv420p",
                "-preset",
                "fast",
                "-crf",
                "23",
                "-t",
                "480",
                "qgrav_capture.mp4",
            ]
        );
    }

    #[test]
    fn test_recorder_command_program() {
        let cfg = CaptureConfig {
            program: "/opt/ffmpeg/bin/ffmpeg".to_string(),
            ..CaptureConfig::default()
        };
        let cmd = recorder_command(&cfg);
        assert_eq!(cmd.get_program(), "/opt/ffmpeg/bin/ffmpeg");
        assert_eq!(cmd.get_args().count(), 17);
    }

    #[test]
    fn test_start_missing_program_is_io_error() {
        let cfg = CaptureConfig {
            program: "qgrav-no-such-recorder-binary".to_string(),
            ..CaptureConfig::default()
        };
        assert!(matches!(CaptureSession::start(&cfg), Err(QgravError::Io(_))));
    }

    #[test]
    fn test_start_rejects_invalid_config() {
        let cfg = CaptureConfig {
            framerate: 0,
            ..CaptureConfig::default()
        };
        assert!(matches!(
            CaptureSession::start(&cfg),
            Err(QgravError::ConfigError(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_graceful_stop_via_stdin() {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "read line; exit 0"]).stdin(Stdio::piped());
        let mut session = CaptureSession::spawn(&mut cmd, Duration::from_secs(5)).unwrap();
        assert!(session.is_running().unwrap());
        let status = session.stop().unwrap().unwrap();
        assert!(status.success(), "graceful exit expected, got {status}");
        assert!(session.stop().unwrap().is_none());
        assert!(!session.is_running().unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_unresponsive_recorder_is_killed() {
        let mut cmd = Command::new("sleep");
        cmd.arg("30").stdin(Stdio::piped());
        let mut session = CaptureSession::spawn(&mut cmd, Duration::from_millis(200)).unwrap();
        let started = Instant::now();
        let status = session.stop().unwrap().unwrap();
        assert!(!status.success());
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_drop_terminates_recorder() {
        let pid = {
            let mut cmd = Command::new("sleep");
            cmd.arg("30").stdin(Stdio::piped());
            let session = CaptureSession::spawn(&mut cmd, Duration::from_millis(100)).unwrap();
            session.id().unwrap()
        };
        let proc_entry = std::path::PathBuf::from(format!("/proc/{pid}"));
        assert!(!proc_entry.exists(), "pid {pid} survived session drop");
    }
}
