//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and hands each one the shared
//! [`ToolRunner`](crate::tool::ToolRunner) and probe configuration.

pub mod completions;
pub mod dispatcher;
pub mod pubkey_algos;
pub mod version;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
