//! Parse error types.

use quill_diagnostic::{Diagnostic, ErrorCode};
use quill_ir::{Span, TokenKind};
use quill_lexer::LexError;

/// A failure to parse a type expression. Parsing stops at the first one.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("expected {expected}, found {}", .found.display_name())]
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
        span: Span,
    },

    #[error("expected a type, found {}", .found.display_name())]
    ExpectedType { found: TokenKind, span: Span },

    /// Input ended inside `[` or `{`.
    #[error("unclosed `{open}`")]
    UnclosedDelimiter {
        open: char,
        open_span: Span,
        span: Span,
    },

    /// A complete type followed by more tokens.
    #[error("unexpected {} after the end of the type", .found.display_name())]
    TrailingInput { found: TokenKind, span: Span },

    /// A number lexeme that is not a finite decimal or an integer exponent.
    #[error("invalid number `{lexeme}`")]
    InvalidNumber { lexeme: String, span: Span },
}

impl ParseError {
    /// Where the error was detected.
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(err) => err.span(),
            ParseError::UnexpectedToken { span, .. }
            | ParseError::ExpectedType { span, .. }
            | ParseError::UnclosedDelimiter { span, .. }
            | ParseError::TrailingInput { span, .. }
            | ParseError::InvalidNumber { span, .. } => *span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::Lex(err) => err.code(),
            ParseError::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseError::ExpectedType { .. } => ErrorCode::E1002,
            ParseError::UnclosedDelimiter { .. } => ErrorCode::E1003,
            ParseError::TrailingInput { .. } => ErrorCode::E1004,
            ParseError::InvalidNumber { .. } => ErrorCode::E1005,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        if let ParseError::Lex(err) = self {
            return err.to_diagnostic();
        }
        let diagnostic = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            ParseError::UnclosedDelimiter {
                open,
                open_span,
                span,
            } => {
                let close = if *open == '[' { ']' } else { '}' };
                diagnostic
                    .with_label(*span, format!("expected `{close}`"))
                    .with_secondary_label(*open_span, "opened here")
            }
            ParseError::TrailingInput { span, .. } => diagnostic
                .with_label(*span, "the type already ended")
                .with_suggestion("separate alternatives with `|`"),
            ParseError::ExpectedType { span, .. } => {
                diagnostic.with_label(*span, "expected a type here")
            }
            other => diagnostic.with_label(other.span(), "here"),
        }
    }
}
