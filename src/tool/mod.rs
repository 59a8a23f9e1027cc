//! Running the probed tool.
//!
//! Version parsing never spawns processes directly. It goes through a
//! [`ToolRunner`], so tests can swap in a [`FakeRunner`] that returns
//! canned banner text.
//!
//! # Modules
//!
//! - [`system`] - Runner backed by `std::process::Command`
//! - [`fake`] - In-memory runner for tests

pub mod fake;
pub mod system;

pub use fake::FakeRunner;
pub use system::SystemRunner;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// A single tool invocation: program, arguments and extra environment.
///
/// The environment is merged over the inherited one for the child process
/// only; the parent's environment is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Path to the executable.
    pub program: PathBuf,
    /// Arguments passed after the program.
    pub args: Vec<String>,
    /// Environment overrides for the child.
    pub env: BTreeMap<String, String>,
}

impl Invocation {
    /// Create an invocation with no arguments or environment overrides.
    pub fn new(program: &Path) -> Self {
        Self {
            program: program.to_path_buf(),
            args: Vec::new(),
            env: BTreeMap::new(),
        }
    }

    /// Append an argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Set an environment variable for the child.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }
}

/// Capability to run a tool and capture what it prints to stdout.
pub trait ToolRunner {
    /// Run `invocation` to completion and return its stdout as text.
    fn capture_stdout(&self, invocation: &Invocation) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_builder_collects_args_and_env() {
        let inv = Invocation::new(Path::new("/usr/bin/gpg"))
            .arg("--version")
            .env("LC_ALL", "C");
        assert_eq!(inv.program, PathBuf::from("/usr/bin/gpg"));
        assert_eq!(inv.args, vec!["--version".to_string()]);
        assert_eq!(inv.env.get("LC_ALL").map(String::as_str), Some("C"));
    }

    #[test]
    fn later_env_value_wins() {
        let inv = Invocation::new(Path::new("gpg"))
            .env("LC_ALL", "de_DE.UTF-8")
            .env("LC_ALL", "C");
        assert_eq!(inv.env.len(), 1);
        assert_eq!(inv.env["LC_ALL"], "C");
    }
}
