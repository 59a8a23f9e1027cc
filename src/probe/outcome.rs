//! Result of a version compatibility check.

use serde::Serialize;

use crate::version::{AcceptedVersion, ToolKind, ToolVersion};

/// What a check found.
///
/// An incompatible version is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Version reported by the tool.
    pub version: ToolVersion,
    /// Policy the version was compared under.
    pub kind: ToolKind,
    /// First accepted version the tool satisfied, if any.
    pub matched: Option<AcceptedVersion>,
}

impl CheckOutcome {
    pub fn is_compatible(&self) -> bool {
        self.matched.is_some()
    }

    /// Machine-readable view of the outcome.
    pub fn report(&self) -> CheckReport<'_> {
        CheckReport {
            version: self.version.raw(),
            major: self.version.major(),
            minor: self.version.minor(),
            micro: self.version.micro(),
            kind: self.kind,
            compatible: self.is_compatible(),
            matched: self.matched.map(|m| m.to_string()),
        }
    }
}

/// JSON shape printed by `--json`.
#[derive(Debug, Serialize)]
pub struct CheckReport<'a> {
    pub version: &'a str,
    pub major: u64,
    pub minor: u64,
    pub micro: u64,
    pub kind: ToolKind,
    pub compatible: bool,
    pub matched: Option<String>,
}
