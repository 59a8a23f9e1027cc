//! Probing a GnuPG or GPGME installation.
//!
//! The [`ToolProbe`] runs the tool's `--version` once per query through a
//! [`ToolRunner`] and interprets the banner.
//!
//! # Modules
//!
//! - [`algorithms`] - Public-key algorithm list from the banner
//! - [`outcome`] - Result of a compatibility check
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use gpg_check::config::ProbeConfig;
//! use gpg_check::probe::ToolProbe;
//! use gpg_check::tool::FakeRunner;
//! use gpg_check::version::ToolKind;
//!
//! let runner = FakeRunner::with_output("gpg (GnuPG) 2.2.27\n");
//! let config = ProbeConfig::default();
//! let probe = ToolProbe::new(&runner, &config);
//!
//! let accepted = ["2.2.20".parse().unwrap()];
//! let outcome = probe.check(Path::new("gpg"), ToolKind::Core, &accepted).unwrap();
//! assert!(outcome.is_compatible());
//! ```

pub mod algorithms;
pub mod outcome;

pub use algorithms::PubkeyAlgorithms;
pub use outcome::{CheckOutcome, CheckReport};

use std::path::Path;

use crate::config::ProbeConfig;
use crate::error::{CheckError, Result};
use crate::tool::ToolRunner;
use crate::version::{AcceptedVersion, ToolKind, ToolVersion};

/// Runs version queries against a tool.
pub struct ToolProbe<'a> {
    runner: &'a dyn ToolRunner,
    config: &'a ProbeConfig,
}

impl<'a> ToolProbe<'a> {
    /// Create a probe that spawns through `runner`.
    pub fn new(runner: &'a dyn ToolRunner, config: &'a ProbeConfig) -> Self {
        Self { runner, config }
    }

    /// Run `<tool> --version` and return the raw banner.
    pub fn banner(&self, tool: &Path) -> Result<String> {
        let invocation = self.config.version_invocation(tool);
        tracing::debug!(
            "Probing {} with LC_ALL={}",
            tool.display(),
            self.config.locale
        );
        self.runner.capture_stdout(&invocation)
    }

    /// Run the tool and return the raw version token, unparsed.
    ///
    /// Build tooling logs this token even when it is later rejected.
    pub fn raw_version(&self, tool: &Path) -> Result<String> {
        let banner = self.banner(tool)?;
        let token = ToolVersion::raw_token(&banner)?;
        tracing::debug!("{} reports version token {:?}", tool.display(), token);
        Ok(token.to_string())
    }

    /// Check the tool against `accepted` under the `kind` policy.
    ///
    /// Specs are tried in order and the first match wins. Fails with a
    /// usage error before spawning anything when `accepted` is empty.
    pub fn check(
        &self,
        tool: &Path,
        kind: ToolKind,
        accepted: &[AcceptedVersion],
    ) -> Result<CheckOutcome> {
        if accepted.is_empty() {
            return Err(CheckError::usage("at least one accepted version is required"));
        }

        let raw = self.raw_version(tool)?;
        evaluate(&raw, kind, accepted)
    }

    /// List the public-key algorithms the tool supports.
    pub fn pubkey_algorithms(&self, tool: &Path) -> Result<PubkeyAlgorithms> {
        let banner = self.banner(tool)?;
        PubkeyAlgorithms::from_banner(&banner).ok_or_else(|| CheckError::PubkeyAlgorithmsMissing {
            tool: tool.to_path_buf(),
        })
    }
}

/// Parse a raw version token and compare it against `accepted` in order.
pub fn evaluate(raw: &str, kind: ToolKind, accepted: &[AcceptedVersion]) -> Result<CheckOutcome> {
    let version = ToolVersion::parse(raw)?;
    let matched = accepted.iter().copied().find(|spec| {
        let ok = kind.accepts(&version, spec);
        tracing::debug!("{} against {} ({:?}): {}", version, spec, kind, ok);
        ok
    });

    Ok(CheckOutcome {
        version,
        kind,
        matched,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::FakeRunner;

    fn accepted(specs: &[&str]) -> Vec<AcceptedVersion> {
        specs.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn check(banner: &str, kind: ToolKind, specs: &[&str]) -> CheckOutcome {
        let runner = FakeRunner::with_output(banner);
        let config = ProbeConfig::default();
        ToolProbe::new(&runner, &config)
            .check(Path::new("gpg"), kind, &accepted(specs))
            .unwrap()
    }

    #[test]
    fn core_same_series_is_compatible() {
        let outcome = check("GnuPG 2.2.27\n", ToolKind::Core, &["2.2.20"]);
        assert!(outcome.is_compatible());
        assert_eq!(outcome.matched, Some(AcceptedVersion::new(2, 2, 20)));
    }

    #[test]
    fn core_other_minor_is_incompatible() {
        let outcome = check("GnuPG 2.4.1\n", ToolKind::Core, &["2.2.20"]);
        assert!(!outcome.is_compatible());
        assert_eq!(outcome.version.raw(), "2.4.1");
    }

    #[test]
    fn library_wrapper_newer_minor_is_compatible() {
        assert!(check("1.18.0\n", ToolKind::LibraryWrapper, &["1.16.0"]).is_compatible());
        assert!(!check("1.18.0\n", ToolKind::Core, &["1.16.0"]).is_compatible());
    }

    #[test]
    fn later_spec_can_match_after_earlier_miss() {
        let outcome = check("gpg (GnuPG) 2.4.1\n", ToolKind::Core, &["2.2.20", "2.4.0"]);
        assert_eq!(outcome.matched, Some(AcceptedVersion::new(2, 4, 0)));
    }

    #[test]
    fn first_matching_spec_is_reported() {
        let outcome = check("gpg (GnuPG) 2.2.27\n", ToolKind::Core, &["2.2.10", "2.2.20"]);
        assert_eq!(outcome.matched, Some(AcceptedVersion::new(2, 2, 10)));
    }

    #[test]
    fn suffixed_micro_is_compared_as_zero() {
        let outcome = check("1.16.0-unknown\n", ToolKind::LibraryWrapper, &["1.16.0"]);
        assert!(outcome.is_compatible());
        assert_eq!(outcome.version.micro(), 0);
    }

    #[test]
    fn no_accepted_versions_fails_without_spawning() {
        let runner = FakeRunner::with_output("GnuPG 2.2.27\n");
        let config = ProbeConfig::default();
        let err = ToolProbe::new(&runner, &config)
            .check(Path::new("gpg"), ToolKind::Core, &[])
            .unwrap_err();
        assert!(matches!(err, CheckError::Usage { .. }));
        assert_eq!(runner.call_count(), 0);
    }

    #[test]
    fn probe_runs_version_flag_under_configured_locale() {
        let runner = FakeRunner::with_output("GnuPG 2.2.27\n");
        let config = ProbeConfig::with_locale("POSIX");
        ToolProbe::new(&runner, &config)
            .raw_version(Path::new("/usr/bin/gpg2"))
            .unwrap();

        let calls = runner.invocations();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program, Path::new("/usr/bin/gpg2"));
        assert_eq!(calls[0].args, vec!["--version".to_string()]);
        assert_eq!(calls[0].env["LC_ALL"], "POSIX");
    }

    #[test]
    fn malformed_banner_propagates_parse_error() {
        let runner = FakeRunner::with_output("gpg (GnuPG) unknown\n");
        let config = ProbeConfig::default();
        let err = ToolProbe::new(&runner, &config)
            .check(Path::new("gpg"), ToolKind::Core, &accepted(&["2.2.20"]))
            .unwrap_err();
        assert!(matches!(err, CheckError::VersionParse { .. }));
    }

    #[test]
    fn raw_version_is_returned_before_validation() {
        let runner = FakeRunner::with_output("gpg (GnuPG) 2.2\n");
        let config = ProbeConfig::default();
        let raw = ToolProbe::new(&runner, &config)
            .raw_version(Path::new("gpg"))
            .unwrap();
        assert_eq!(raw, "2.2");
        assert!(matches!(
            evaluate(&raw, ToolKind::Core, &accepted(&["2.2.20"])),
            Err(CheckError::VersionParse { .. })
        ));
    }

    #[test]
    fn spawn_failure_propagates_execution_error() {
        let runner = FakeRunner::with_spawn_error(std::io::ErrorKind::NotFound);
        let config = ProbeConfig::default();
        let err = ToolProbe::new(&runner, &config)
            .raw_version(Path::new("/missing/gpg"))
            .unwrap_err();
        assert!(matches!(err, CheckError::Execution { .. }));
    }

    #[test]
    fn repeated_checks_are_identical() {
        let runner = FakeRunner::with_output("gpg (GnuPG) 2.2.27\n");
        let config = ProbeConfig::default();
        let probe = ToolProbe::new(&runner, &config);
        let specs = accepted(&["2.2.20"]);

        let first = probe.check(Path::new("gpg"), ToolKind::Core, &specs).unwrap();
        let second = probe.check(Path::new("gpg"), ToolKind::Core, &specs).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn pubkey_algorithms_are_extracted() {
        let runner = FakeRunner::with_output("gpg (GnuPG) 2.2.27\nPubkey: RSA, ELG, DSA\n");
        let config = ProbeConfig::default();
        let algos = ToolProbe::new(&runner, &config)
            .pubkey_algorithms(Path::new("gpg"))
            .unwrap();
        assert_eq!(algos.to_string(), "RSA,ELG,DSA");
    }

    #[test]
    fn missing_pubkey_line_is_an_error() {
        let runner = FakeRunner::with_output("gpg (GnuPG) 2.2.27\n");
        let config = ProbeConfig::default();
        let err = ToolProbe::new(&runner, &config)
            .pubkey_algorithms(Path::new("gpg"))
            .unwrap_err();
        assert!(matches!(err, CheckError::PubkeyAlgorithmsMissing { .. }));
    }
}
