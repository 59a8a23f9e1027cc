//! Caller-supplied minimum versions.

use std::fmt;
use std::str::FromStr;

use crate::error::CheckError;

/// A minimum-compatible `major.minor.micro` version given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptedVersion {
    pub major: u64,
    pub minor: u64,
    pub micro: u64,
}

impl AcceptedVersion {
    pub fn new(major: u64, minor: u64, micro: u64) -> Self {
        Self {
            major,
            minor,
            micro,
        }
    }
}

impl FromStr for AcceptedVersion {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CheckError::InvalidAcceptedVersion {
            spec: s.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = s.splitn(3, '.');
        let (Some(major), Some(minor), Some(micro)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid("expected major.minor.micro"));
        };

        let number = |part: &str| part.parse::<u64>().map_err(|_| invalid("not a number"));
        Ok(Self::new(number(major)?, number(minor)?, number(micro)?))
    }
}

impl fmt::Display for AcceptedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dotted_triple() {
        let v: AcceptedVersion = "2.2.20".parse().unwrap();
        assert_eq!(v, AcceptedVersion::new(2, 2, 20));
    }

    #[test]
    fn rejects_two_parts() {
        let err = "2.2".parse::<AcceptedVersion>().unwrap_err();
        assert!(matches!(err, CheckError::InvalidAcceptedVersion { .. }));
    }

    #[test]
    fn rejects_suffixes() {
        assert!("1.16.0-unknown".parse::<AcceptedVersion>().is_err());
        assert!("2.2.20.1".parse::<AcceptedVersion>().is_err());
    }

    #[test]
    fn rejects_empty_components() {
        assert!("2..1".parse::<AcceptedVersion>().is_err());
        assert!("".parse::<AcceptedVersion>().is_err());
    }

    #[test]
    fn display_is_dotted() {
        assert_eq!(AcceptedVersion::new(1, 16, 0).to_string(), "1.16.0");
    }
}
