//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing to the real stdout/stderr
//! - [`MockUI`] capturing output for tests
//!
//! Stdout is reserved for results that build tooling reads (the detected
//! version, the algorithm list). Diagnostics go to stderr.
//!
//! # Example
//!
//! ```
//! use gpg_check::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.emit("2.2.27");
//! ui.error("Incompatible GnuPG version");
//! assert_eq!(ui.stdout(), "2.2.27");
//! assert!(ui.has_error("Incompatible GnuPG version"));
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, CheckTheme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Write `text` to stdout verbatim, without a trailing newline.
    fn emit(&mut self, text: &str);

    /// Write a line to stdout.
    fn message(&mut self, msg: &str);

    /// Display a warning on stderr.
    fn warning(&mut self, msg: &str);

    /// Display an error on stderr.
    fn error(&mut self, msg: &str);
}
