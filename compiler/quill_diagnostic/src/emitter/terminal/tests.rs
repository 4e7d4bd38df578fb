use super::*;
use crate::ErrorCode;
use quill_ir::Span;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001)
        .with_message("unexpected token: expected `]`, found `:`")
        .with_label(Span::new(2, 3), "expected `]`")
        .with_secondary_label(Span::new(0, 1), "list opened here")
        .with_note("a list holds one element type")
        .with_suggestion("use `{#:''}` for a map")
}

fn render(emitter_setup: impl FnOnce(&mut Vec<u8>)) -> String {
    let mut output = Vec::new();
    emitter_setup(&mut output);
    String::from_utf8(output).unwrap()
}

// Fallback (no source) tests

#[test]
fn test_terminal_emitter_no_color() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false);
        emitter.emit(&sample_diagnostic());
        emitter.flush();
    });
    assert!(text.contains("error"));
    assert!(text.contains("[E1001]"));
    assert!(text.contains("unexpected token"));
    assert!(text.contains("expected `]`"));
    assert!(text.contains("note:"));
    assert!(text.contains("help:"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_terminal_emitter_with_color() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Always, false);
        emitter.emit(&sample_diagnostic());
        emitter.flush();
    });
    assert!(text.contains("\x1b["));
    assert!(text.contains("E1001"));
}

#[test]
fn test_emit_all() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false);
        emitter.emit_all(&[
            Diagnostic::error(ErrorCode::E1001).with_message("error 1"),
            Diagnostic::warning(ErrorCode::E2003).with_message("warning 1"),
        ]);
        emitter.flush();
    });
    assert!(text.contains("error[E1001]: error 1"));
    assert!(text.contains("warning[E2003]: warning 1"));
}

#[test]
fn test_emit_summary_errors() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false);
        emitter.emit_summary(2, 1);
    });
    assert!(text.contains("2 previous errors"));
    assert!(text.contains("1 warning emitted"));
}

#[test]
fn test_emit_summary_single_error() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false);
        emitter.emit_summary(1, 0);
    });
    assert!(text.contains("previous error"));
    assert!(!text.contains("errors"));
}

#[test]
fn test_emit_summary_warnings_only() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false);
        emitter.emit_summary(0, 3);
    });
    assert_eq!(text, "warning: 3 warnings emitted\n");
}

#[test]
fn test_emit_summary_nothing() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false);
        emitter.emit_summary(0, 0);
    });
    assert!(text.is_empty());
}

// Source snippet tests

#[test]
fn test_label_with_source_shows_line_and_carets() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false)
            .with_source("types.quill", "#\n''/EN\n");
        emitter.emit(
            &Diagnostic::error(ErrorCode::E2001)
                .with_message("malformed language")
                .with_label(Span::new(5, 7), "not a language code"),
        );
    });
    assert!(text.contains("--> types.quill:2:4"), "got:\n{text}");
    assert!(text.contains("2 | ''/EN"), "got:\n{text}");
    assert!(text.contains("|    ^^ not a language code"), "got:\n{text}");
}

#[test]
fn test_secondary_label_uses_dashes() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false)
            .with_source("t", "#|''|#");
        emitter.emit(
            &Diagnostic::warning(ErrorCode::E2003)
                .with_message("duplicate alternative")
                .with_label(Span::new(5, 6), "again here")
                .with_secondary_label(Span::new(0, 1), "first here"),
        );
    });
    assert!(text.contains("^ again here"), "got:\n{text}");
    assert!(text.contains("- first here"), "got:\n{text}");
}

#[test]
fn test_span_outside_source_falls_back() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false)
            .with_source("t", "#");
        emitter.emit(
            &Diagnostic::error(ErrorCode::E1002)
                .with_message("expected a type")
                .with_label(Span::new(40, 41), "here"),
        );
    });
    assert!(text.contains("--> 40..41: here"), "got:\n{text}");
}

// ColorMode

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

#[test]
fn test_color_mode_parse() {
    assert_eq!(ColorMode::parse("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::parse("never"), Some(ColorMode::Never));
    assert_eq!(ColorMode::parse("auto"), Some(ColorMode::Auto));
    assert_eq!(ColorMode::parse("sometimes"), None);
}
