// ABOUTME: Command runner trait and the tokio-backed process implementation.
// ABOUTME: Every call is awaited to completion before the caller moves on.

use super::error::ExecError;
use super::invocation::Invocation;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Output from an external command.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// Exit code, or None when the process was killed by a signal.
    pub exit_code: Option<i32>,
    /// Captured standard output (empty when output was inherited).
    pub stdout: String,
    /// Captured standard error (empty when output was inherited).
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs external commands.
///
/// The production implementation spawns processes; tests substitute a
/// recorder so workflows can be checked without git, aws, or mass installed.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run the command and return its output regardless of exit status.
    async fn run(&self, invocation: &Invocation) -> Result<CommandOutput, ExecError>;

    /// Run the command, treating a non-zero exit as an error.
    async fn run_checked(&self, invocation: &Invocation) -> Result<CommandOutput, ExecError> {
        let output = self.run(invocation).await?;
        if output.success() {
            Ok(output)
        } else {
            Err(ExecError::Failed {
                command: invocation.to_string(),
                exit_code: output.exit_code,
                stderr: output.stderr,
            })
        }
    }
}

/// Spawns real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, invocation: &Invocation) -> Result<CommandOutput, ExecError> {
        tracing::debug!(command = %invocation, "running external command");

        let mut command = Command::new(invocation.program());
        command.args(invocation.actual_args()).stdin(Stdio::null());

        if invocation.inherits_output() {
            command.stdout(Stdio::inherit()).stderr(Stdio::inherit());
            let status = command.status().await.map_err(|source| ExecError::Spawn {
                program: invocation.program().to_string(),
                source,
            })?;
            log_exit(invocation, status.code());
            return Ok(CommandOutput {
                exit_code: status.code(),
                ..Default::default()
            });
        }

        let output = command
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| ExecError::Spawn {
                program: invocation.program().to_string(),
                source,
            })?;

        log_exit(invocation, output.status.code());
        Ok(CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

fn log_exit(invocation: &Invocation, code: Option<i32>) {
    if code == Some(0) {
        tracing::debug!(program = invocation.program(), "command completed");
    } else {
        tracing::warn!(
            program = invocation.program(),
            exit_code = ?code,
            "command failed"
        );
    }
}
