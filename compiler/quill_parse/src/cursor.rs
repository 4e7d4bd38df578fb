//! Token cursor for navigating the token stream.

use quill_ir::{Span, Token, TokenKind, TokenList};

use crate::ParseError;

static EOF: Token = Token {
    kind: TokenKind::Eof,
    span: Span::DUMMY,
};

/// Position in a token list that always ends with `Eof`.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor {
            tokens: tokens.as_slice(),
            pos: 0,
        }
    }

    /// The current token; past the end this keeps returning the last one.
    #[inline]
    pub fn current(&self) -> &'a Token {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .unwrap_or(&EOF)
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the most recently consumed token.
    pub fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(token) => token.span,
            None => Span::DUMMY,
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Whether the current token has the same kind as `kind`, ignoring
    /// payloads.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(kind)
    }

    pub fn peek_next_kind(&self) -> &'a TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(&EOF.kind, |token| &token.kind)
    }

    /// Whether the current and next tokens touch, with no whitespace.
    pub fn current_and_next_adjacent(&self) -> bool {
        self.tokens
            .get(self.pos + 1)
            .is_some_and(|next| self.current_span().is_adjacent_to(next.span))
    }

    /// Consume the current token. Never moves past `Eof`.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume a token of `kind` or fail with `UnexpectedToken`.
    pub fn expect(&mut self, kind: &TokenKind) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(ParseError::UnexpectedToken {
                expected: kind.display_name(),
                found: self.current_kind().clone(),
                span: self.current_span(),
            })
        }
    }
}
