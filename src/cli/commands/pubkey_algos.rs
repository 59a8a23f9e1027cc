//! Public-key algorithm listing.
//!
//! `gpg-check pubkey-algos <tool-path>` prints the algorithms from the
//! banner's `Pubkey:` line as a comma-joined list, e.g. `RSA,ELG,DSA`.

use std::path::PathBuf;

use crate::cli::args::PubkeyAlgosArgs;
use crate::config::ProbeConfig;
use crate::error::Result;
use crate::probe::ToolProbe;
use crate::tool::ToolRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The pubkey-algos command implementation.
pub struct PubkeyAlgosCommand<'a> {
    probe: ToolProbe<'a>,
    tool_path: PathBuf,
    json: bool,
}

impl<'a> PubkeyAlgosCommand<'a> {
    /// Create a new pubkey-algos command.
    pub fn new(
        runner: &'a dyn ToolRunner,
        config: &'a ProbeConfig,
        args: PubkeyAlgosArgs,
        json: bool,
    ) -> Self {
        Self {
            probe: ToolProbe::new(runner, config),
            tool_path: args.tool_path,
            json,
        }
    }
}

impl Command for PubkeyAlgosCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let algorithms = self.probe.pubkey_algorithms(&self.tool_path)?;

        if self.json {
            let list = serde_json::to_string(algorithms.names()).map_err(anyhow::Error::from)?;
            ui.message(&list);
        } else {
            ui.message(&algorithms.to_string());
        }

        Ok(CommandResult::success())
    }
}
