//! Type parsing.
//!
//! Every production returns a [`ParseOutput`] rooted at the node it built.
//! Parents graft their children's span tables under the child's index, so
//! the final table is keyed by paths from the outermost type.

use quill_ir::{
    BooleanType, Language, NodePath, NumberLiteral, NumberType, Span, SpanMap, TextType,
    TokenKind, Type, UnionType, Unit,
};
use quill_stack::ensure_sufficient_stack;

use crate::{ParseError, ParseOutput, Parser};

/// Assemble a node from its own span and its children's tables, in
/// child-index order.
fn composite(ty: Type, span: Span, children: impl IntoIterator<Item = SpanMap>) -> ParseOutput {
    let mut spans = SpanMap::new();
    spans.insert(NodePath::root(), span);
    for (index, child) in children.into_iter().enumerate() {
        spans.extend(child.nested_under(&NodePath::root().child(index)));
    }
    ParseOutput { ty, spans }
}

fn leaf(ty: Type, span: Span) -> ParseOutput {
    composite(ty, span, std::iter::empty())
}

/// A modifier (unit or language) is the only child of its leaf.
fn modified_leaf(ty: Type, span: Span, modifier: Option<Span>) -> ParseOutput {
    let modifier = modifier.map(|span| {
        let mut spans = SpanMap::new();
        spans.insert(NodePath::root(), span);
        spans
    });
    composite(ty, span, modifier)
}

fn root_span(output: &ParseOutput) -> Span {
    output.spans.get(&NodePath::root()).unwrap_or(Span::DUMMY)
}

impl Parser<'_> {
    /// `type := primary ('|' primary)*`
    pub(crate) fn parse_type(&mut self) -> Result<ParseOutput, ParseError> {
        ensure_sufficient_stack(|| self.parse_union())
    }

    fn parse_union(&mut self) -> Result<ParseOutput, ParseError> {
        let first = self.parse_primary()?;
        if !self.cursor.check(&TokenKind::Pipe) {
            return Ok(first);
        }
        self.cursor.advance();
        let second = self.parse_primary()?;
        let mut rest = Vec::new();
        while self.cursor.check(&TokenKind::Pipe) {
            self.cursor.advance();
            rest.push(self.parse_primary()?);
        }

        let last = rest.last().unwrap_or(&second);
        let span = root_span(&first).merge(root_span(last));
        let (rest_types, rest_spans): (Vec<Type>, Vec<SpanMap>) =
            rest.into_iter().map(|alt| (alt.ty, alt.spans)).unzip();
        let ty = Type::Union(UnionType::with_alternatives(first.ty, second.ty, rest_types));
        Ok(composite(
            ty,
            span,
            [first.spans, second.spans].into_iter().chain(rest_spans),
        ))
    }

    fn parse_primary(&mut self) -> Result<ParseOutput, ParseError> {
        let span = self.cursor.current_span();
        let ty = match self.cursor.current_kind() {
            TokenKind::Placeholder => Type::Any,
            TokenKind::Question => Type::boolean(),
            TokenKind::True => Type::from(BooleanType::literal(true)),
            TokenKind::False => Type::from(BooleanType::literal(false)),
            TokenKind::NoneSymbol => Type::none(),
            TokenKind::Hash => {
                self.cursor.advance();
                let unit = self.parse_unit()?;
                let number = NumberType {
                    value: None,
                    unit: unit.as_ref().map(|(unit, _)| unit.clone()),
                };
                let end = self.cursor.previous_span();
                return Ok(modified_leaf(
                    Type::Number(number),
                    span.merge(end),
                    unit.map(|(_, span)| span),
                ));
            }
            TokenKind::Dash | TokenKind::Number(_) => return self.parse_number_literal(),
            TokenKind::Text(_) => return self.parse_text(),
            TokenKind::LBracket => return self.parse_list(),
            TokenKind::LBrace => return self.parse_set_or_map(),
            found => {
                return Err(ParseError::ExpectedType {
                    found: found.clone(),
                    span,
                })
            }
        };
        self.cursor.advance();
        Ok(leaf(ty, span))
    }

    /// `'-'? NUMBER unit?`, where the sign must touch the digits.
    fn parse_number_literal(&mut self) -> Result<ParseOutput, ParseError> {
        let start = self.cursor.current_span();
        let negative = self.cursor.check(&TokenKind::Dash);
        if negative {
            if !(self.cursor.current_and_next_adjacent()
                && matches!(self.cursor.peek_next_kind(), TokenKind::Number(_)))
            {
                return Err(ParseError::ExpectedType {
                    found: TokenKind::Dash,
                    span: start,
                });
            }
            self.cursor.advance();
        }
        let TokenKind::Number(digits) = self.cursor.current_kind() else {
            return Err(ParseError::ExpectedType {
                found: self.cursor.current_kind().clone(),
                span: self.cursor.current_span(),
            });
        };
        let lexeme = if negative {
            format!("-{digits}")
        } else {
            digits.clone()
        };
        let literal_span = start.merge(self.cursor.advance().span);
        let Some(value) = NumberLiteral::parse(&lexeme) else {
            return Err(ParseError::InvalidNumber {
                lexeme,
                span: literal_span,
            });
        };

        let unit = self.parse_unit()?;
        let number = NumberType {
            value: Some(value),
            unit: unit.as_ref().map(|(unit, _)| unit.clone()),
        };
        let span = literal_span.merge(self.cursor.previous_span());
        Ok(modified_leaf(
            Type::Number(number),
            span,
            unit.map(|(_, span)| span),
        ))
    }

    /// `unit := factors ('/' factors)?`
    ///
    /// Returns `None` when no unit is written or when every exponent
    /// cancels (`#m/m` is a plain number).
    fn parse_unit(&mut self) -> Result<Option<(Unit, Span)>, ParseError> {
        if !matches!(self.cursor.current_kind(), TokenKind::Name(_)) {
            return Ok(None);
        }
        let start = self.cursor.current_span();
        let mut dimensions = Vec::new();
        self.parse_factors(1, &mut dimensions)?;
        if self.cursor.check(&TokenKind::Slash)
            && matches!(self.cursor.peek_next_kind(), TokenKind::Name(_))
        {
            self.cursor.advance();
            self.parse_factors(-1, &mut dimensions)?;
        }
        let span = start.merge(self.cursor.previous_span());
        Ok(Unit::from_dimensions(dimensions).map(|unit| (unit, span)))
    }

    /// `factors := factor ('·' factor)*`, `factor := NAME ('^' '-'? NUMBER)?`
    fn parse_factors(
        &mut self,
        sign: i32,
        dimensions: &mut Vec<(String, i32)>,
    ) -> Result<(), ParseError> {
        loop {
            let name = match self.cursor.current_kind() {
                TokenKind::Name(name) => name.clone(),
                found => {
                    return Err(ParseError::UnexpectedToken {
                        expected: "a unit name",
                        found: found.clone(),
                        span: self.cursor.current_span(),
                    })
                }
            };
            self.cursor.advance();
            let exponent = if self.cursor.check(&TokenKind::Caret) {
                self.cursor.advance();
                self.parse_exponent()?
            } else {
                1
            };
            dimensions.push((name, exponent.saturating_mul(sign)));

            if !self.cursor.check(&TokenKind::Dot) {
                return Ok(());
            }
            self.cursor.advance();
        }
    }

    fn parse_exponent(&mut self) -> Result<i32, ParseError> {
        let start = self.cursor.current_span();
        let negative = self.cursor.check(&TokenKind::Dash);
        if negative {
            self.cursor.advance();
        }
        let TokenKind::Number(digits) = self.cursor.current_kind() else {
            return Err(ParseError::UnexpectedToken {
                expected: "an exponent",
                found: self.cursor.current_kind().clone(),
                span: self.cursor.current_span(),
            });
        };
        let span = start.merge(self.cursor.advance().span);
        // Widened first so `-2147483648` fits once the sign is applied.
        let invalid = || ParseError::InvalidNumber {
            lexeme: digits.clone(),
            span,
        };
        let magnitude: i64 = digits.parse().map_err(|_| invalid())?;
        let exponent = if negative { -magnitude } else { magnitude };
        i32::try_from(exponent).map_err(|_| invalid())
    }

    /// `TEXT ('/' language)?`
    fn parse_text(&mut self) -> Result<ParseOutput, ParseError> {
        let token = self.cursor.advance();
        let TokenKind::Text(text) = &token.kind else {
            return Err(ParseError::ExpectedType {
                found: token.kind.clone(),
                span: token.span,
            });
        };
        let language = if self.cursor.check(&TokenKind::Slash) {
            self.cursor.advance();
            Some(self.parse_language()?)
        } else {
            None
        };

        // `''` is the text type itself, not an empty literal.
        let ty = TextType {
            text: (!text.is_empty()).then(|| text.clone()),
            language: language.as_ref().map(|(language, _)| language.clone()),
        };
        let span = token.span.merge(self.cursor.previous_span());
        Ok(modified_leaf(
            Type::Text(ty),
            span,
            language.map(|(_, span)| span),
        ))
    }

    /// `language := NAME ('-' (NAME | NUMBER))?`
    fn parse_language(&mut self) -> Result<(Language, Span), ParseError> {
        let start = self.cursor.current_span();
        let TokenKind::Name(code) = self.cursor.current_kind() else {
            return Err(ParseError::UnexpectedToken {
                expected: "a language code",
                found: self.cursor.current_kind().clone(),
                span: start,
            });
        };
        self.cursor.advance();
        let mut language = Language::new(code.clone());

        if self.cursor.check(&TokenKind::Dash) {
            self.cursor.advance();
            match self.cursor.current_kind() {
                TokenKind::Name(region) | TokenKind::Number(region) => {
                    language = language.with_region(region.clone());
                    self.cursor.advance();
                }
                found => {
                    return Err(ParseError::UnexpectedToken {
                        expected: "a region",
                        found: found.clone(),
                        span: self.cursor.current_span(),
                    })
                }
            }
        }
        Ok((language, start.merge(self.cursor.previous_span())))
    }

    /// `'[' type ']'`
    fn parse_list(&mut self) -> Result<ParseOutput, ParseError> {
        let open = self.cursor.advance().span;
        let element = self.parse_type()?;
        let close = self.expect_close(&TokenKind::RBracket, '[', open)?;
        Ok(composite(
            Type::list(element.ty),
            open.merge(close),
            [element.spans],
        ))
    }

    /// `'{' type (':' type)? '}'`
    fn parse_set_or_map(&mut self) -> Result<ParseOutput, ParseError> {
        let open = self.cursor.advance().span;
        let first = self.parse_type()?;

        if self.cursor.check(&TokenKind::Colon) {
            self.cursor.advance();
            let value = self.parse_type()?;
            let close = self.expect_close(&TokenKind::RBrace, '{', open)?;
            return Ok(composite(
                Type::map(first.ty, value.ty),
                open.merge(close),
                [first.spans, value.spans],
            ));
        }

        let close = self.expect_close(&TokenKind::RBrace, '{', open)?;
        Ok(composite(
            Type::set(first.ty),
            open.merge(close),
            [first.spans],
        ))
    }

    fn expect_close(
        &mut self,
        close: &TokenKind,
        open: char,
        open_span: Span,
    ) -> Result<Span, ParseError> {
        if self.cursor.is_at_end() {
            return Err(ParseError::UnclosedDelimiter {
                open,
                open_span,
                span: self.cursor.current_span(),
            });
        }
        self.cursor.expect(close)
    }
}
