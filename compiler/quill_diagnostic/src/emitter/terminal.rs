//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//! With a source attached, labels show `name:line:col` and the offending
//! line with carets under the span.

use std::io::{self, Write};

use quill_ir::Span;

use crate::{Diagnostic, Label, Severity};

use super::DiagnosticEmitter;

/// ANSI escapes, all bold.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m";
    pub const WARNING: &str = "\x1b[1;33m";
    pub const NOTE: &str = "\x1b[1;36m";
    pub const HELP: &str = "\x1b[1;32m";
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m";
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse `auto`, `always` or `never`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

struct SourceFile {
    name: String,
    text: String,
}

/// A resolved position in a source file.
struct Location<'a> {
    line: usize,
    column: usize,
    line_text: &'a str,
    /// Width of the caret run, in characters, clipped to the line.
    width: usize,
}

impl SourceFile {
    fn locate(&self, span: Span) -> Option<Location<'_>> {
        let before = self.text.get(..span.start as usize)?;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let line_end = self.text[line_start..]
            .find('\n')
            .map_or(self.text.len(), |i| line_start + i);
        let line_text = &self.text[line_start..line_end];
        let column = before[line_start..].chars().count() + 1;
        let end = (span.end as usize).min(line_end);
        let width = self
            .text
            .get(span.start as usize..end)
            .map_or(1, |s| s.chars().count().max(1));
        Some(Location {
            line: before.matches('\n').count() + 1,
            column,
            line_text,
            width,
        })
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceFile>,
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr with explicit color mode.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` is only consulted for `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the source that label spans point into.
    #[must_use]
    pub fn with_source(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.source = Some(SourceFile {
            name: name.into(),
            text: text.into(),
        });
        self
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        };
        self.write_colored(severity.as_str(), color);
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn write_label(&mut self, label: &Label, severity: Severity) {
        let marker = if label.is_primary { "-->" } else { "   " };
        let color = match (label.is_primary, severity) {
            (false, _) => colors::SECONDARY,
            (true, Severity::Warning) => colors::WARNING,
            (true, _) => colors::ERROR,
        };

        let location = self
            .source
            .as_ref()
            .and_then(|source| source.locate(label.span).map(|loc| (source, loc)));

        let Some((source, location)) = location else {
            let _ = write!(self.writer, "  {marker} {:?}: ", label.span);
            self.write_colored(&label.message, color);
            let _ = writeln!(self.writer);
            return;
        };

        // Copy out what we need before borrowing the writer mutably.
        let header = format!("{}:{}:{}", source.name, location.line, location.column);
        let gutter = location.line.to_string();
        let pad = " ".repeat(gutter.len());
        let line_text = location.line_text.to_string();
        let underline = format!(
            "{}{}",
            " ".repeat(location.column - 1),
            (if label.is_primary { "^" } else { "-" }).repeat(location.width)
        );

        let _ = writeln!(self.writer, "  {marker} {header}");
        let _ = writeln!(self.writer, "  {pad} |");
        let _ = writeln!(self.writer, "  {gutter} | {line_text}");
        let _ = write!(self.writer, "  {pad} | ");
        self.write_colored(&underline, color);
        let _ = write!(self.writer, " ");
        self.write_colored(&label.message, color);
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[CODE]: message
        self.write_severity(diagnostic.severity);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_label(label, diagnostic.severity);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::NOTE);
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "  = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {suggestion}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        let warnings = format!("{warning_count} warning{}", plural_s(warning_count));
        match (error_count, warning_count) {
            (0, 0) => {}
            (0, _) => {
                self.write_colored("warning", colors::WARNING);
                let _ = writeln!(self.writer, ": {warnings} emitted");
            }
            (errors, _) => {
                self.write_colored("error", colors::ERROR);
                let errors = if errors == 1 {
                    "previous error".to_string()
                } else {
                    format!("{errors} previous errors")
                };
                if warning_count == 0 {
                    let _ = writeln!(self.writer, ": aborting due to {errors}");
                } else {
                    let _ = writeln!(self.writer, ": aborting due to {errors}; {warnings} emitted");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
