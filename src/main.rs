//! gpg-check CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use gpg_check::cli::{Cli, CommandDispatcher};
use gpg_check::config::ProbeConfig;
use gpg_check::ui::{TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs always go to stderr; stdout carries only results.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("gpg_check=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gpg_check=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            e.print().ok();
            return ExitCode::from(code);
        }
    };
    init_tracing(cli.debug);

    tracing::debug!("gpg-check starting with args: {:?}", cli);

    let mut ui = TerminalUI::new(!cli.no_color);
    let dispatcher = CommandDispatcher::new(ProbeConfig::with_locale(cli.locale.clone()));

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
