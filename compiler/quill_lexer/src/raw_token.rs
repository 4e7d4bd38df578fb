//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before text
//! cooking and final token conversion.

use logos::Logos;
use quill_ir::TokenKind;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum RawToken {
    #[token("_")]
    Placeholder,
    #[token("#")]
    Hash,
    #[token("?")]
    Question,
    #[token("ø")]
    NoneSymbol,
    #[token("⊤")]
    True,
    #[token("⊥")]
    False,

    #[token("/")]
    Slash,
    #[token("^")]
    Caret,
    #[token("·")]
    Dot,
    #[token("-")]
    Dash,
    #[token("|")]
    Pipe,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(":")]
    Colon,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    #[regex(r"[A-Za-z]+")]
    Name,

    // Escapes are cooked during conversion.
    #[regex(r"'([^'\\]|\\.)*'")]
    Text,

    // Same prefix as `Text` without the closing quote; only wins when the
    // quote never closes.
    #[regex(r"'([^'\\]|\\.)*\\?")]
    UnterminatedText,
}

/// Convert a raw token to a `TokenKind`. `None` for `UnterminatedText`.
pub(crate) fn convert_token(raw: RawToken, slice: &str) -> Option<TokenKind> {
    let kind = match raw {
        RawToken::Placeholder => TokenKind::Placeholder,
        RawToken::Hash => TokenKind::Hash,
        RawToken::Question => TokenKind::Question,
        RawToken::NoneSymbol => TokenKind::NoneSymbol,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Caret => TokenKind::Caret,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Dash => TokenKind::Dash,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Number => TokenKind::Number(slice.to_string()),
        RawToken::Name => TokenKind::Name(slice.to_string()),
        RawToken::Text => {
            let content = &slice[1..slice.len() - 1];
            TokenKind::Text(unescape_text(content))
        }
        RawToken::UnterminatedText => return None,
    };
    Some(kind)
}

/// A backslash makes the next character literal: `\'` is `'`, `\\` is `\`.
pub(crate) fn unescape_text(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests;
