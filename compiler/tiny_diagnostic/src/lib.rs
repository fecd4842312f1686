//! Diagnostic system for the Tiny front end.
//!
//! Every diagnostic carries:
//! - an error code for searchability (`tiny explain E1001`)
//! - a message saying what went wrong
//! - the position where it went wrong
//! - optional notes and suggestions
//!
//! Lexer and parser errors convert into [`Diagnostic`]s; the CLI renders
//! them with an [`emitter::DiagnosticEmitter`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
