//! Diagnostic system for error reporting.
//!
//! Every reportable problem has:
//! - an error code, for searchability and `quill explain`
//! - a message saying what went wrong
//! - a primary span saying where
//! - optional notes and suggestions
//!
//! Lexer and parser failures become error diagnostics; type conflicts
//! become errors or warnings depending on their severity. Runtime
//! exceptions are values, not diagnostics, but share the code space so
//! `quill explain` can describe them.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
