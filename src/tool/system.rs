//! Runner that spawns real processes.

use std::process::{Command, Stdio};
use std::time::Instant;

use crate::error::{CheckError, Result};

use super::{Invocation, ToolRunner};

/// Spawns the tool with `std::process::Command` and blocks until it exits.
///
/// Stdout is captured, stderr is passed through to the caller's stderr.
/// There is no timeout: a hung tool hangs the check.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for SystemRunner {
    fn capture_stdout(&self, invocation: &Invocation) -> Result<String> {
        let start = Instant::now();

        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        for (key, value) in &invocation.env {
            cmd.env(key, value);
        }
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::inherit());

        let output = cmd.output().map_err(|source| CheckError::Execution {
            tool: invocation.program.clone(),
            source,
        })?;

        tracing::debug!(
            "{} {:?} finished in {:?} with {}",
            invocation.program.display(),
            invocation.args,
            start.elapsed(),
            output.status
        );

        // The banner is still usable when the tool exits non-zero
        if !output.status.success() {
            tracing::warn!(
                "{} exited with {}",
                invocation.program.display(),
                output.status
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
