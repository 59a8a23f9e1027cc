//! Comparison policies for the core tool and its library wrapper.

use std::str::FromStr;

use serde::Serialize;

use super::{AcceptedVersion, ToolVersion};

/// Which comparison policy applies to the probed tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    /// GnuPG itself: the minor series is pinned.
    #[default]
    Core,
    /// GPGME: any later minor release of the same major is API compatible.
    LibraryWrapper,
}

impl ToolKind {
    /// Whether `version` satisfies `accepted` under this policy.
    ///
    /// Both policies require an equal major and a micro at least as large;
    /// they differ on the minor component.
    pub fn accepts(&self, version: &ToolVersion, accepted: &AcceptedVersion) -> bool {
        let minor_ok = match self {
            Self::Core => version.minor() == accepted.minor,
            Self::LibraryWrapper => version.minor() >= accepted.minor,
        };

        version.major() == accepted.major && minor_ok && version.micro() >= accepted.micro
    }
}

impl FromStr for ToolKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(Self::LibraryWrapper),
            "false" | "no" | "0" => Ok(Self::Core),
            _ => Err(format!(
                "expected true or false for is-library-wrapper, got '{}'",
                s
            )),
        }
    }
}
