//! Version parsing and compatibility policies.
//!
//! # Modules
//!
//! - [`tool_version`] - Version detected from a tool's `--version` banner
//! - [`accepted`] - Caller-supplied minimum versions
//! - [`kind`] - Which comparison policy applies to a tool
//!
//! # Example
//!
//! ```
//! use gpg_check::version::{AcceptedVersion, ToolKind, ToolVersion};
//!
//! let banner = "gpg (GnuPG) 2.2.27\nlibgcrypt 1.8.8\n";
//! let detected = ToolVersion::parse(ToolVersion::raw_token(banner).unwrap()).unwrap();
//! let accepted: AcceptedVersion = "2.2.20".parse().unwrap();
//! assert!(ToolKind::Core.accepts(&detected, &accepted));
//! ```

pub mod accepted;
pub mod kind;
pub mod tool_version;

pub use accepted::AcceptedVersion;
pub use kind::ToolKind;
pub use tool_version::ToolVersion;
