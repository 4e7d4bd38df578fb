//! The `check` command: report conflicts in a file of declarations.

use quill_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};

use crate::{check_source, Config};

use super::read_file;

/// Check every declaration in `path` and report in line order.
///
/// Exits with status 1 when any parse error or major conflict was found.
pub fn check_file(path: &str, config: &Config) {
    let content = read_file(path);
    let report = check_source(path, &content, config);

    let mut emitter = TerminalEmitter::stderr(config.color, Config::stderr_is_tty())
        .with_source(path, content.as_str());
    emitter.emit_all(&report.diagnostics);

    let errors = report.error_count();
    let warnings = report.warning_count();
    if errors > 0 || warnings > 0 {
        emitter.emit_summary(errors, warnings);
    }
    emitter.flush();

    if report.has_errors() {
        std::process::exit(1);
    }
    println!(
        "{path}: {} declaration{} checked",
        report.program.body().len(),
        if report.program.body().len() == 1 { "" } else { "s" }
    );
}
