//! External solver invocation
//!
//! A solver is a shell command. Each round appends the three protocol tokens
//! to it and runs the line through the platform shell, capturing stdout.

use super::scheduler::SchedulerError;
use crate::core::{CodecError, ProtocolTriple};
use std::ffi::OsString;
use std::io;
use std::process::{ExitStatus, Stdio};
use thiserror::Error;
use tokio::process::Command;

/// Error type for a solver call that produced no usable guess
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("failed to start solver: {0}")]
    Spawn(#[source] io::Error),
    #[error("solver exited with {status}{}", stderr_detail(.stderr))]
    Exit { status: ExitStatus, stderr: String },
    #[error("solver printed {0:?}, expected a single 5-letter word")]
    MalformedOutput(String),
    #[error("solver could not decode its input: {0}")]
    Protocol(#[from] CodecError),
    #[error(transparent)]
    Scheduler(#[from] SchedulerError),
}

fn stderr_detail(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

/// A shell command line for an external solver
#[derive(Debug, Clone)]
pub struct SolverCommand {
    command: String,
    envs: Vec<(OsString, OsString)>,
}

impl SolverCommand {
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            envs: Vec::new(),
        }
    }

    /// Set an environment variable for every invocation
    #[must_use]
    pub fn env(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// The full shell line for one round
    #[must_use]
    pub fn command_line(&self, query: &ProtocolTriple) -> String {
        format!("{} {query}", self.command)
    }

    /// Build the process for one round
    #[must_use]
    pub fn build(&self, query: &ProtocolTriple) -> Command {
        let mut command = shell(&self.command_line(query));
        command
            .envs(self.envs.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }
}

#[cfg(not(windows))]
fn shell(line: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(line);
    command
}

#[cfg(windows)]
fn shell(line: &str) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg(line);
    command
}

/// Run a solver process to completion and return its trimmed stdout
///
/// # Errors
///
/// Returns `InvocationError::Spawn` if the process cannot be started and
/// `InvocationError::Exit` if it exits unsuccessfully.
pub async fn execute(mut command: Command) -> Result<String, InvocationError> {
    let output = command.output().await.map_err(InvocationError::Spawn)?;

    if !output.status.success() {
        return Err(InvocationError::Exit {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
