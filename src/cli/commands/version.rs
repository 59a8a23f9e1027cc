//! Version compatibility check.
//!
//! `gpg-check [version] <tool-path> <is-library-wrapper> <accepted-version>...`
//! prints the detected version to stdout without a newline and exits 0 if
//! any accepted version matches, 1 otherwise. The raw token is printed even
//! when it then fails to parse.

use crate::cli::args::VersionArgs;
use crate::config::ProbeConfig;
use crate::error::{CheckError, Result};
use crate::probe::{evaluate, ToolProbe};
use crate::tool::ToolRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The version command implementation.
pub struct VersionCommand<'a> {
    probe: ToolProbe<'a>,
    args: VersionArgs,
    json: bool,
}

impl<'a> VersionCommand<'a> {
    /// Create a new version command.
    pub fn new(
        runner: &'a dyn ToolRunner,
        config: &'a ProbeConfig,
        args: VersionArgs,
        json: bool,
    ) -> Self {
        Self {
            probe: ToolProbe::new(runner, config),
            args,
            json,
        }
    }
}

impl Command for VersionCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let tool = self
            .args
            .tool_path
            .as_deref()
            .ok_or_else(|| CheckError::usage("missing <TOOL_PATH> argument"))?;
        let kind = self.args.kind.ok_or_else(|| {
            CheckError::usage("missing <IS_LIBRARY_WRAPPER> argument (true or false)")
        })?;
        if self.args.accepted_versions.is_empty() {
            return Err(CheckError::usage(
                "missing <ACCEPTED_VERSION> argument: at least one is required",
            ));
        }

        let raw = self.probe.raw_version(tool)?;

        // The detected version is printed exactly once, whatever the outcome
        if !self.json {
            ui.emit(&raw);
        }
        let outcome = evaluate(&raw, kind, &self.args.accepted_versions)?;
        if self.json {
            let report = serde_json::to_string(&outcome.report()).map_err(anyhow::Error::from)?;
            ui.message(&report);
        }

        if outcome.is_compatible() {
            Ok(CommandResult::success())
        } else {
            let accepted = self
                .args
                .accepted_versions
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            ui.warning(&format!(
                "{} {} is not compatible with any of: {}",
                tool.display(),
                outcome.version,
                accepted
            ));
            Ok(CommandResult::failure(1))
        }
    }
}
