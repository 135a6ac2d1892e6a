//! External process invocation
//!
//! Every external tool (mysqldump, tar, the platform console) is spawned
//! with a discrete argument vector, never an interpolated shell string, so
//! credentials and paths containing special characters cannot be
//! reinterpreted by a shell.

use crate::domain::{ExportError, ExportStage, Result};
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::process::Command;

/// Outcome of one stage's subprocess invocation.
///
/// Exit-status interpretation is left to the orchestrator; a non-zero exit
/// is not an error at this level.
#[derive(Debug)]
pub struct StageResult {
    /// Stage the process ran for
    pub stage: ExportStage,
    /// Exit code, `None` when the process was killed by a signal
    pub exit_code: Option<i32>,
    /// Captured stderr
    pub stderr: String,
}

impl StageResult {
    /// Whether the process exited zero.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Convert a non-zero result into the domain error for its stage.
    pub fn into_failure(self) -> ExportError {
        ExportError::ProcessFailed {
            stage: self.stage,
            exit_code: self.exit_code,
            diagnostic: self.stderr.trim().to_string(),
        }
    }
}

/// Runs an external process to completion for the given stage.
///
/// Standard output is redirected to `stdout_file` when given, otherwise
/// discarded. Standard error is captured into the returned [`StageResult`].
/// When `timeout` is given and elapses before the process exits, the child
/// is killed and [`ExportError::Timeout`] is returned.
pub async fn run_stage_process(
    stage: ExportStage,
    program: &str,
    args: &[String],
    stdout_file: Option<&Path>,
    timeout: Option<Duration>,
) -> Result<StageResult> {
    tracing::debug!(stage = %stage, program = %program, "Spawning external process");

    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    match stdout_file {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(|e| {
                ExportError::Io(format!(
                    "Failed to create output file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            command.stdout(Stdio::from(file));
        }
        None => {
            command.stdout(Stdio::null());
        }
    }

    let mut child = command
        .spawn()
        .map_err(|e| ExportError::Io(format!("Failed to spawn {program}: {e}")))?;

    // Drain stderr concurrently so the child can't block on a full pipe.
    let stderr_pipe = child.stderr.take();
    let stderr_task = tokio::spawn(async move {
        let mut buf = String::new();
        if let Some(mut pipe) = stderr_pipe {
            let _ = pipe.read_to_string(&mut buf).await;
        }
        buf
    });

    let status = match timeout {
        Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
            Ok(status) => status?,
            Err(_) => {
                tracing::warn!(
                    stage = %stage,
                    timeout_secs = limit.as_secs(),
                    "Process exceeded timeout, killing"
                );
                let _ = child.kill().await;
                return Err(ExportError::Timeout {
                    stage,
                    timeout_secs: limit.as_secs(),
                });
            }
        },
        None => child.wait().await?,
    };

    let stderr = stderr_task.await.unwrap_or_default();

    tracing::debug!(
        stage = %stage,
        exit_code = ?status.code(),
        "External process finished"
    );

    Ok(StageResult {
        stage,
        exit_code: status.code(),
        stderr,
    })
}
