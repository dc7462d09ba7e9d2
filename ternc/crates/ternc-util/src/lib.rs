//! ternc-util - Shared utilities for the Tern compiler front end.
//!
//! This crate holds the infrastructure the compiler phases share. Today
//! that is the diagnostic machinery used by the lexer: severity levels,
//! the [`Diagnostic`] record, and the collecting [`Handler`].
//!
//! # Example
//!
//! ```
//! use ternc_util::Handler;
//!
//! let mut handler = Handler::new();
//! handler.error("unexpected character", 3);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.diagnostics()[0].to_string(),
//!            "error: unexpected character (line 3)");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;

pub use diagnostic::{Diagnostic, Handler, Level};
