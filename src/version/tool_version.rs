//! Version detected from a tool's self-reported banner.
//!
//! Both `gpg` and `gpg2` print the version as the last field of the first
//! line (`gpg (GnuPG) 2.2.27`). Some builds append a suffix to the micro
//! component (`1.16.0-unknown`, `2.4.5-beta12`), which is stripped before
//! comparison.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CheckError, Result};

static MICRO_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)[^0-9]*").expect("valid micro regex"));

/// A `major.minor.micro` version parsed from a banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolVersion {
    raw: String,
    major: u64,
    minor: u64,
    micro: u64,
}

impl ToolVersion {
    /// Extract the raw version token from the full `--version` output.
    ///
    /// Only the first line is considered: it is trimmed, split on single
    /// spaces, and the last token is returned unparsed.
    pub fn raw_token(banner: &str) -> Result<&str> {
        let line = banner.lines().next().ok_or_else(|| CheckError::VersionParse {
            line: String::new(),
            reason: "tool produced no output".to_string(),
        })?;

        Ok(line.trim().rsplit(' ').next().unwrap_or_default())
    }

    /// Parse a raw dotted version token such as `2.2.27` or `1.16.0-unknown`.
    ///
    /// The micro part only contributes its leading digits; if it has none it
    /// counts as `0`. Components too large for `u64` saturate.
    pub fn parse(raw: &str) -> Result<Self> {
        let parse_err = |reason: String| CheckError::VersionParse {
            line: raw.to_string(),
            reason,
        };

        let mut parts = raw.splitn(3, '.');
        let (Some(major), Some(minor), Some(micro)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(parse_err(format!(
                "expected three dot-separated parts in '{}'",
                raw
            )));
        };

        let major = parse_component(major)
            .ok_or_else(|| parse_err(format!("major component '{}' is not a number", major)))?;
        let minor = parse_component(minor)
            .ok_or_else(|| parse_err(format!("minor component '{}' is not a number", minor)))?;
        let micro = MICRO_PREFIX
            .captures(micro)
            .and_then(|caps| parse_component(&caps[1]))
            .unwrap_or(0);

        Ok(Self {
            raw: raw.to_string(),
            major,
            minor,
            micro,
        })
    }

    /// The version token exactly as the tool printed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// Micro component with any suffix stripped.
    pub fn micro(&self) -> u64 {
        self.micro
    }
}

/// Decimal component; digit strings beyond `u64::MAX` saturate.
fn parse_component(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(part.parse().unwrap_or(u64::MAX))
}

impl fmt::Display for ToolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
