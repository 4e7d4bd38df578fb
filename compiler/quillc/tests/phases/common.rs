//! Shared test utilities for phase tests.

use quill_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use quill_ir::Type;
use quillc::{CheckReport, Config};

/// English messages, no colors, no extra languages.
pub fn config() -> Config {
    Config {
        color: ColorMode::Never,
        ..Config::default()
    }
}

/// Parse a type, panicking with the diagnostic on failure.
pub fn parse_type(source: &str) -> Type {
    match quillc::parse_source(source) {
        Ok(output) => output.ty,
        Err(diagnostic) => panic!("failed to parse {source:?}: {}", diagnostic.message),
    }
}

/// Render a check report the way `quill check` prints it.
pub fn emitted(name: &str, text: &str, report: &CheckReport) -> String {
    let mut out = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut out, ColorMode::Never, false)
            .with_source(name, text);
        emitter.emit_all(&report.diagnostics);
        emitter.emit_summary(report.error_count(), report.warning_count());
        emitter.flush();
    }
    String::from_utf8(out).unwrap()
}
