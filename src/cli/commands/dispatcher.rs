//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::config::ProbeConfig;
use crate::error::Result;
use crate::tool::{SystemRunner, ToolRunner};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: ProbeConfig,
    runner: Box<dyn ToolRunner>,
}

impl CommandDispatcher {
    /// Create a dispatcher that spawns real processes.
    pub fn new(config: ProbeConfig) -> Self {
        Self::with_runner(config, Box::new(SystemRunner::new()))
    }

    /// Create a dispatcher with a custom runner (for testing).
    pub fn with_runner(config: ProbeConfig, runner: Box<dyn ToolRunner>) -> Self {
        Self { config, runner }
    }

    /// Get the probe configuration.
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Dispatch and execute a command.
    ///
    /// Without a subcommand the top-level positionals are treated as a
    /// version check.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let runner = self.runner.as_ref();
        match &cli.command {
            Some(Commands::Version(args)) => {
                let cmd =
                    super::version::VersionCommand::new(runner, &self.config, args.clone(), cli.json);
                cmd.execute(ui)
            }
            Some(Commands::PubkeyAlgos(args)) => {
                let cmd = super::pubkey_algos::PubkeyAlgosCommand::new(
                    runner,
                    &self.config,
                    args.clone(),
                    cli.json,
                );
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd = super::version::VersionCommand::new(
                    runner,
                    &self.config,
                    cli.check.clone(),
                    cli.json,
                );
                cmd.execute(ui)
            }
        }
    }
}
