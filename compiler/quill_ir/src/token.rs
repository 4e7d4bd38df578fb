//! Tokens for type expressions.

use std::fmt;

use crate::Span;

/// Token kinds of the type-expression sublanguage.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// `_`, the placeholder (any) type.
    Placeholder,
    /// `#`
    Hash,
    /// `?`
    Question,
    /// `ø`
    NoneSymbol,
    /// `⊤`
    True,
    /// `⊥`
    False,
    /// Quoted text, escapes already cooked.
    Text(String),
    /// Unsigned decimal lexeme. A leading `-` is a separate token.
    Number(String),
    /// Identifier: unit dimensions, language codes, regions.
    Name(String),
    /// `/`
    Slash,
    /// `^`
    Caret,
    /// `·`, unit product.
    Dot,
    /// `-`: region separator, negative literals and exponents.
    Dash,
    /// `|`
    Pipe,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `:`
    Colon,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Human-readable description for parse errors.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Placeholder => "`_`",
            TokenKind::Hash => "`#`",
            TokenKind::Question => "`?`",
            TokenKind::NoneSymbol => "`ø`",
            TokenKind::True => "`⊤`",
            TokenKind::False => "`⊥`",
            TokenKind::Text(_) => "text",
            TokenKind::Number(_) => "number",
            TokenKind::Name(_) => "name",
            TokenKind::Slash => "`/`",
            TokenKind::Caret => "`^`",
            TokenKind::Dot => "`·`",
            TokenKind::Dash => "`-`",
            TokenKind::Pipe => "`|`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Colon => "`:`",
            TokenKind::Eof => "end of input",
        }
    }

    /// Whether this token can start a type.
    pub fn starts_type(&self) -> bool {
        matches!(
            self,
            TokenKind::Placeholder
                | TokenKind::Hash
                | TokenKind::Question
                | TokenKind::NoneSymbol
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Text(_)
                | TokenKind::Number(_)
                | TokenKind::LBracket
                | TokenKind::LBrace
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Text(text) => write!(f, "Text({text:?})"),
            TokenKind::Number(n) => write!(f, "Number({n})"),
            TokenKind::Name(name) => write!(f, "Name({name})"),
            other => f.write_str(other.display_name()),
        }
    }
}

/// A token with its source span.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Lexer output: tokens in source order, always terminated by `Eof`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Token kinds without spans, for tests and `quill lex`.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
