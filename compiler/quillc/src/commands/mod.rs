//! Command handlers for the `quill` CLI.
//!
//! Each submodule implements one command. Shared helpers for reading
//! files and reporting front-end failures live here.

use quill_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use quill_diagnostic::Diagnostic;

use crate::Config;

mod check;
mod debug;
mod explain;
mod generalize;

pub use check::check_file;
pub use debug::{lex_type, render_type, tree_type};
pub use explain::{explain_error, explanation};
pub use generalize::generalize_types;

/// Report a diagnostic about `source`, an expression given on the command line.
pub(super) fn report(config: &Config, source: &str, diagnostic: &Diagnostic) {
    let mut emitter = TerminalEmitter::stderr(config.color, Config::stderr_is_tty())
        .with_source("<argument>", source);
    emitter.emit(diagnostic);
    emitter.flush();
}

/// Read a file from disk, exiting with a user-friendly error message on failure.
pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
