//! Lexer for Quill type expressions, built on logos.
//!
//! Produces a `TokenList` terminated by `Eof`, or the first `LexError`.

mod lex_error;
mod raw_token;

use logos::Logos;
use quill_ir::{Span, Token, TokenList};

pub use lex_error::LexError;
use raw_token::{convert_token, RawToken};

/// Tokenize `source`.
pub fn to_tokens(source: &str) -> Result<TokenList, LexError> {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::try_from_range(logos.span())?;
        let slice = logos.slice();

        let raw = match token_result {
            Ok(raw) => raw,
            Err(()) => {
                let ch = slice.chars().next().unwrap_or('\u{fffd}');
                return Err(LexError::UnexpectedCharacter { ch, span });
            }
        };
        match convert_token(raw, slice) {
            Some(kind) => result.push(Token::new(kind, span)),
            None => return Err(LexError::UnterminatedText { span }),
        }
    }

    let end = Span::try_from_range(source.len()..source.len())?;
    result.push(Token::new(quill_ir::TokenKind::Eof, end));
    Ok(result)
}
