//! Public-key algorithm list from the GnuPG banner.
//!
//! `gpg --version` lists its algorithms in labelled sections:
//!
//! ```text
//! Supported algorithms:
//! Pubkey: RSA, ELG, DSA, ECDH, ECDSA, EDDSA
//! Cipher: IDEA, 3DES, CAST5, BLOWFISH, AES, AES192, AES256, TWOFISH,
//!         CAMELLIA128, CAMELLIA192, CAMELLIA256
//! ```
//!
//! Only the `Pubkey:` line is read.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static PUBKEY_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Pubkey: (.+)").expect("valid pubkey regex"));

/// Ordered list of public-key algorithm names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PubkeyAlgorithms(Vec<String>);

impl PubkeyAlgorithms {
    /// Extract the list from a `--version` banner.
    ///
    /// Returns `None` when the banner has no `Pubkey:` line.
    pub fn from_banner(banner: &str) -> Option<Self> {
        let caps = PUBKEY_LINE.captures(banner)?;
        let names = caps[1]
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();
        Some(Self(names))
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for PubkeyAlgorithms {
    /// Comma-joined without spaces, e.g. `RSA,ELG,DSA`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GPG_BANNER: &str = "gpg (GnuPG) 2.2.27
libgcrypt 1.8.8
Home: /home/user/.gnupg
Supported algorithms:
Pubkey: RSA, ELG, DSA, ECDH, ECDSA, EDDSA
Cipher: IDEA, 3DES, CAST5, BLOWFISH, AES, AES192, AES256, TWOFISH,
        CAMELLIA128, CAMELLIA192, CAMELLIA256
Hash: SHA1, RIPEMD160, SHA256, SHA384, SHA512, SHA224
Compression: Uncompressed, ZIP, ZLIB, BZIP2
";

    #[test]
    fn extracts_pubkey_line() {
        let algos = PubkeyAlgorithms::from_banner(GPG_BANNER).unwrap();
        assert_eq!(algos.to_string(), "RSA,ELG,DSA,ECDH,ECDSA,EDDSA");
    }

    #[test]
    fn short_list_joins_without_spaces() {
        let algos = PubkeyAlgorithms::from_banner("Pubkey: RSA, ELG, DSA\n").unwrap();
        assert_eq!(algos.to_string(), "RSA,ELG,DSA");
        assert_eq!(algos.names().len(), 3);
    }

    #[test]
    fn does_not_read_the_following_section() {
        let algos = PubkeyAlgorithms::from_banner(GPG_BANNER).unwrap();
        assert!(!algos.names().iter().any(|n| n.starts_with("AES")));
    }

    #[test]
    fn tolerates_crlf_and_missing_spaces() {
        let algos = PubkeyAlgorithms::from_banner("Pubkey: RSA,ELG , DSA\r\n").unwrap();
        assert_eq!(algos.to_string(), "RSA,ELG,DSA");
    }

    #[test]
    fn missing_label_yields_none() {
        assert!(PubkeyAlgorithms::from_banner("gpg (GnuPG) 2.2.27\nHash: SHA1\n").is_none());
    }
}
