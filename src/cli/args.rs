//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.
//!
//! The version check is also the default command, so build scripts can call
//! `gpg-check <tool-path> <is-library-wrapper> <accepted-version>...`
//! without naming a subcommand.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::DEFAULT_LOCALE;
use crate::version::{AcceptedVersion, ToolKind};

/// gpg-check - GnuPG and GPGME version gating for builds.
#[derive(Debug, Parser)]
#[command(name = "gpg-check")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Locale exported as LC_ALL to the probed tool
    #[arg(long, global = true, env = "GPG_CHECK_LOCALE", default_value = DEFAULT_LOCALE)]
    pub locale: String,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub check: VersionArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the tool's version against accepted versions (default)
    Version(VersionArgs),

    /// List the public-key algorithms a gpg binary supports
    PubkeyAlgos(PubkeyAlgosArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the version check.
///
/// All fields are optional at the clap level so that missing arguments are
/// reported as a usage error with exit status 1.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct VersionArgs {
    /// Path to the gpg binary or gpgme-config
    #[arg(value_name = "TOOL_PATH")]
    pub tool_path: Option<PathBuf>,

    /// Whether the tool is the GPGME library wrapper (true or false)
    #[arg(value_name = "IS_LIBRARY_WRAPPER")]
    pub kind: Option<ToolKind>,

    /// Accepted versions as major.minor.micro; matching any one passes
    #[arg(value_name = "ACCEPTED_VERSION")]
    pub accepted_versions: Vec<AcceptedVersion>,
}

/// Arguments for the `pubkey-algos` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PubkeyAlgosArgs {
    /// Path to the gpg binary
    #[arg(value_name = "TOOL_PATH")]
    pub tool_path: PathBuf,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_positionals_form_a_version_check() {
        let cli = Cli::try_parse_from(["gpg-check", "/usr/bin/gpg2", "false", "2.2.20", "2.4.0"])
            .unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.check.tool_path, Some(PathBuf::from("/usr/bin/gpg2")));
        assert_eq!(cli.check.kind, Some(ToolKind::Core));
        assert_eq!(
            cli.check.accepted_versions,
            vec![AcceptedVersion::new(2, 2, 20), AcceptedVersion::new(2, 4, 0)]
        );
    }

    #[test]
    fn version_subcommand_takes_the_same_arguments() {
        let cli =
            Cli::try_parse_from(["gpg-check", "version", "gpgme-config", "true", "1.16.0"]).unwrap();
        match cli.command {
            Some(Commands::Version(args)) => {
                assert_eq!(args.kind, Some(ToolKind::LibraryWrapper));
                assert_eq!(args.accepted_versions, vec![AcceptedVersion::new(1, 16, 0)]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn missing_arguments_still_parse() {
        let cli = Cli::try_parse_from(["gpg-check", "/usr/bin/gpg"]).unwrap();
        assert!(cli.check.kind.is_none());
        assert!(cli.check.accepted_versions.is_empty());
    }

    #[test]
    fn malformed_accepted_version_is_rejected() {
        assert!(Cli::try_parse_from(["gpg-check", "gpg", "false", "2.2"]).is_err());
    }

    #[test]
    fn malformed_kind_is_rejected() {
        assert!(Cli::try_parse_from(["gpg-check", "gpg", "sometimes", "2.2.20"]).is_err());
    }

    #[test]
    fn pubkey_algos_requires_tool_path() {
        let cli = Cli::try_parse_from(["gpg-check", "pubkey-algos", "/usr/bin/gpg"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::PubkeyAlgos(_))));
        assert!(Cli::try_parse_from(["gpg-check", "pubkey-algos"]).is_err());
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::try_parse_from([
            "gpg-check",
            "pubkey-algos",
            "gpg",
            "--json",
            "--locale",
            "POSIX",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.locale, "POSIX");
    }
}
