//! Probe configuration.
//!
//! The banner format of `gpg --version` is localized, so every probe runs
//! the tool under a fixed locale. The locale is part of the
//! [`Invocation`] handed to the runner rather than a process-wide
//! `set_var`, which keeps probing free of global state.
//!
//! Values come from the command line (`--locale`) or the
//! `GPG_CHECK_LOCALE` environment variable; see [`crate::cli::Cli`].

use std::path::Path;

use crate::tool::Invocation;

/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "C";

/// Flag that makes GnuPG and gpgme-config print their version banner.
pub const VERSION_FLAG: &str = "--version";

/// How the tool is invoked when probing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Value exported as `LC_ALL` to the tool.
    pub locale: String,
    /// Argument that prints the version banner.
    pub version_flag: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            version_flag: VERSION_FLAG.to_string(),
        }
    }
}

impl ProbeConfig {
    /// Default configuration with a different locale.
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            ..Self::default()
        }
    }

    /// Build the `--version` invocation for `tool`.
    pub fn version_invocation(&self, tool: &Path) -> Invocation {
        Invocation::new(tool)
            .arg(self.version_flag.clone())
            .env("LC_ALL", self.locale.clone())
    }
}
