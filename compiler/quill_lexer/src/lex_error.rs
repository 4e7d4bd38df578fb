//! Lexer error types.

use quill_diagnostic::{Diagnostic, ErrorCode};
use quill_ir::{Span, SpanError};

/// A failure to tokenize a type expression.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexError {
    /// `'` opened but never closed.
    #[error("unterminated text literal")]
    UnterminatedText { span: Span },
    /// A character that starts no token.
    #[error("unexpected character `{ch}`")]
    UnexpectedCharacter { ch: char, span: Span },
    /// The input is too long for `u32` spans.
    #[error("input is too large to tokenize")]
    TooLarge(#[from] SpanError),
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnterminatedText { span } | LexError::UnexpectedCharacter { span, .. } => {
                *span
            }
            LexError::TooLarge(_) => Span::DUMMY,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::UnterminatedText { .. } => ErrorCode::E0001,
            LexError::UnexpectedCharacter { .. } | LexError::TooLarge(_) => ErrorCode::E0002,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            LexError::UnterminatedText { span } => diagnostic
                .with_label(*span, "text starts here")
                .with_suggestion("close the text with `'`"),
            LexError::UnexpectedCharacter { span, .. } => {
                diagnostic.with_label(*span, "not part of any type")
            }
            LexError::TooLarge(_) => diagnostic,
        }
    }
}
