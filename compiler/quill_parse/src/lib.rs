//! Parser for Quill type expressions.
//!
//! Recursive descent over a [`TokenList`], producing a [`Type`] and a
//! [`SpanMap`] from node paths to source spans. Types themselves carry no
//! spans, so diagnostics about a node look its path up in the side table.
//!
//! ```text
//! type      := primary ('|' primary)*
//! primary   := '_' | '?' | '⊤' | '⊥' | 'ø'
//!            | '#' unit?
//!            | '-'? NUMBER unit?
//!            | TEXT ('/' language)?
//!            | '[' type ']'
//!            | '{' type (':' type)? '}'
//! unit      := factors ('/' factors)?
//! factors   := factor ('·' factor)*
//! factor    := NAME ('^' '-'? NUMBER)?
//! language  := NAME ('-' (NAME | NUMBER))?
//! ```

mod cursor;
mod error;
mod grammar;

use quill_ir::{SpanMap, TokenList, Type};

pub use cursor::Cursor;
pub use error::ParseError;

/// A parsed type and where each of its nodes came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOutput {
    pub ty: Type,
    pub spans: SpanMap,
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse one complete type, rejecting trailing tokens.
    pub fn parse_complete_type(&mut self) -> Result<ParseOutput, ParseError> {
        let output = self.parse_type()?;
        if !self.cursor.is_at_end() {
            return Err(ParseError::TrailingInput {
                found: self.cursor.current_kind().clone(),
                span: self.cursor.current_span(),
            });
        }
        Ok(output)
    }
}

/// Parse a complete type from tokens.
#[tracing::instrument(level = "trace", skip_all, fields(tokens = tokens.len()))]
pub fn parse_type(tokens: &TokenList) -> Result<ParseOutput, ParseError> {
    Parser::new(tokens).parse_complete_type()
}

/// Tokenize and parse `source`.
pub fn parse(source: &str) -> Result<ParseOutput, ParseError> {
    let tokens = quill_lexer::to_tokens(source)?;
    parse_type(&tokens)
}

#[cfg(test)]
mod tests;
