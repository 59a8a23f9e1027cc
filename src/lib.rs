//! gpg-check - GnuPG and GPGME version gating for builds.
//!
//! gpg-check runs a GnuPG binary (or `gpgme-config`) with `--version`,
//! extracts the dotted version from the banner, and decides whether it
//! satisfies one of the accepted versions a build asks for. It can also
//! list the public-key algorithms a GnuPG binary supports.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Probe configuration (locale, version flag)
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Version checks and algorithm listing
//! - [`tool`] - Spawning the probed tool
//! - [`ui`] - Terminal output
//! - [`version`] - Version parsing and compatibility policies
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
//! let runner = FakeRunner::with_output("1.18.0\n");
//! let config = ProbeConfig::default();
//! let probe = ToolProbe::new(&runner, &config);
//!
//! let accepted = ["1.16.0".parse().unwrap()];
//! let gpgme = probe
//!     .check(Path::new("gpgme-config"), ToolKind::LibraryWrapper, &accepted)
//!     .unwrap();
//! assert!(gpgme.is_compatible());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod probe;
pub mod tool;
pub mod ui;
pub mod version;

pub use error::{CheckError, Result};
