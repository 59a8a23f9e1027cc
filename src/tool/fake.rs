//! Fake runner for testing.
//!
//! `FakeRunner` implements [`ToolRunner`] without spawning anything. It
//! answers every invocation with the same canned output (or spawn error)
//! and records the invocations for later assertion.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use gpg_check::tool::{FakeRunner, Invocation, ToolRunner};
//!
//! let runner = FakeRunner::with_output("gpg (GnuPG) 2.2.27\n");
//! let out = runner
//!     .capture_stdout(&Invocation::new(Path::new("gpg")).arg("--version"))
//!     .unwrap();
//!
//! assert_eq!(out, "gpg (GnuPG) 2.2.27\n");
//! assert_eq!(runner.invocations()[0].args, vec!["--version".to_string()]);
//! ```

use std::cell::RefCell;
use std::io;

use crate::error::{CheckError, Result};

use super::{Invocation, ToolRunner};

#[derive(Debug, Clone)]
enum Response {
    Output(String),
    SpawnError(io::ErrorKind),
}

/// In-memory [`ToolRunner`] returning canned results.
#[derive(Debug)]
pub struct FakeRunner {
    response: Response,
    invocations: RefCell<Vec<Invocation>>,
}

impl FakeRunner {
    /// Answer every invocation with `stdout`.
    pub fn with_output(stdout: &str) -> Self {
        Self {
            response: Response::Output(stdout.to_string()),
            invocations: RefCell::new(Vec::new()),
        }
    }

    /// Fail every invocation as if the program could not be spawned.
    pub fn with_spawn_error(kind: io::ErrorKind) -> Self {
        Self {
            response: Response::SpawnError(kind),
            invocations: RefCell::new(Vec::new()),
        }
    }

    /// Every invocation seen so far, in order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }

    /// Number of times the runner was called.
    pub fn call_count(&self) -> usize {
        self.invocations.borrow().len()
    }
}

impl ToolRunner for FakeRunner {
    fn capture_stdout(&self, invocation: &Invocation) -> Result<String> {
        self.invocations.borrow_mut().push(invocation.clone());

        match &self.response {
            Response::Output(stdout) => Ok(stdout.clone()),
            Response::SpawnError(kind) => Err(CheckError::Execution {
                tool: invocation.program.clone(),
                source: io::Error::new(*kind, "fake spawn failure"),
            }),
        }
    }
}
