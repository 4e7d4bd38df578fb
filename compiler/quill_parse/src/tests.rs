use super::*;
use pretty_assertions::assert_eq;
use quill_ir::{
    BooleanType, Language, NodePath, NumberLiteral, NumberType, Span, TextType, TokenKind, UnionType, Unit,
};
use quill_lexer::LexError;

fn parse_ok(source: &str) -> ParseOutput {
    match parse(source) {
        Ok(output) => output,
        Err(err) => panic!("failed to parse {source:?}: {err}"),
    }
}

fn ty(source: &str) -> Type {
    parse_ok(source).ty
}

fn parse_err(source: &str) -> ParseError {
    match parse(source) {
        Ok(output) => panic!("expected {source:?} to fail, got {}", output.ty),
        Err(err) => err,
    }
}

fn number(lexeme: &str) -> NumberLiteral {
    match NumberLiteral::parse(lexeme) {
        Some(literal) => literal,
        None => panic!("bad literal {lexeme}"),
    }
}

fn path(indices: &[u32]) -> NodePath {
    NodePath::from_indices(indices)
}

#[test]
fn basic_leaves() {
    assert_eq!(ty("_"), Type::Any);
    assert_eq!(ty("?"), Type::boolean());
    assert_eq!(ty("⊤"), Type::from(BooleanType::literal(true)));
    assert_eq!(ty("⊥"), Type::from(BooleanType::literal(false)));
    assert_eq!(ty("ø"), Type::none());
    assert_eq!(ty("#"), Type::number());
    assert_eq!(ty("''"), Type::text());
}

#[test]
fn number_literals_and_units() {
    assert_eq!(
        ty("1"),
        Type::from(NumberType::literal(number("1"), None))
    );
    assert_eq!(
        ty("-2.5"),
        Type::from(NumberType::literal(number("-2.5"), None))
    );
    assert_eq!(ty("#m"), Type::from(NumberType::with_unit(Unit::named("m"))));

    let speed = Unit::from_dimensions([("m", 1), ("s", -1)]);
    assert_eq!(
        ty("3m/s"),
        Type::from(NumberType::literal(number("3"), speed))
    );

    let force = Unit::from_dimensions([("kg", 1), ("m", 1), ("s", -2)]);
    assert_eq!(ty("#kg·m/s^2").render(), "#kg·m/s^2");
    assert_eq!(
        ty("#kg·m/s^2"),
        Type::Number(NumberType {
            value: None,
            unit: force,
        })
    );
}

#[test]
fn negative_exponents_and_repeats() {
    assert_eq!(ty("#s^-1").render(), "#s^-1");
    assert_eq!(ty("#m·m").render(), "#m^2");
    assert_eq!(ty("#m^2/m").render(), "#m");
}

#[test]
fn cancelled_unit_is_unitless() {
    let output = parse_ok("#m/m");
    assert_eq!(output.ty, Type::number());
    assert_eq!(output.spans.len(), 1);
}

#[test]
fn text_literals_and_languages() {
    assert_eq!(ty("'hi'"), Type::from(TextType::literal("hi", None)));
    assert_eq!(ty(r"'it\'s'"), Type::from(TextType::literal("it's", None)));
    assert_eq!(
        ty("''/en"),
        Type::from(TextType::in_language(Language::new("en")))
    );
    assert_eq!(
        ty("'hola'/es-419"),
        Type::from(TextType::literal(
            "hola",
            Some(Language::new("es").with_region("419"))
        ))
    );
    assert_eq!(
        ty("''/en-US"),
        Type::from(TextType::in_language(
            Language::new("en").with_region("US")
        ))
    );
}

#[test]
fn containers() {
    assert_eq!(ty("[#]"), Type::list(Type::number()));
    assert_eq!(ty("{''}"), Type::set(Type::text()));
    assert_eq!(ty("{'':#}"), Type::map(Type::text(), Type::number()));
    assert_eq!(
        ty("[{#m:[?]}]"),
        Type::list(Type::map(
            Type::from(NumberType::with_unit(Unit::named("m"))),
            Type::list(Type::boolean())
        ))
    );
}

#[test]
fn unions_are_flat() {
    let parsed = ty("# | '' | ø");
    let Type::Union(union) = &parsed else {
        panic!("expected a union, got {parsed}");
    };
    assert_eq!(
        union.alternatives(),
        &[Type::number(), Type::text(), Type::none()]
    );
}

#[test]
fn unions_inside_containers() {
    assert_eq!(
        ty("[#|'']"),
        Type::list(Type::Union(UnionType::with_alternatives(
            Type::number(),
            Type::text(),
            Vec::new()
        )))
    );
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(ty(" [ # | '' ] "), ty("[#|'']"));
    assert_eq!(ty("{ '' : # }"), ty("{'':#}"));
}

#[test]
fn render_round_trips() {
    for source in [
        "_",
        "?",
        "⊤",
        "⊥",
        "ø",
        "#",
        "-1.25",
        "#m^2/kg·s",
        "''",
        "'a\\'b'/en-US",
        "[#]",
        "{''}",
        "{'':[?]}",
        "#|''|ø",
        "[1|2]|{⊤}",
    ] {
        let parsed = ty(source);
        let rendered = parsed.render();
        assert_eq!(ty(&rendered), parsed, "{source} rendered as {rendered}");
    }
}

#[test]
fn spans_for_leaves_and_modifiers() {
    let output = parse_ok("#m");
    assert_eq!(output.spans.get(&NodePath::root()), Some(Span::new(0, 2)));
    assert_eq!(output.spans.get(&path(&[0])), Some(Span::new(1, 2)));

    let output = parse_ok("'hi'/en-US");
    assert_eq!(output.spans.get(&NodePath::root()), Some(Span::new(0, 10)));
    assert_eq!(output.spans.get(&path(&[0])), Some(Span::new(5, 10)));

    let output = parse_ok("-3");
    assert_eq!(output.spans.get(&NodePath::root()), Some(Span::new(0, 2)));
}

#[test]
fn spans_for_nested_nodes() {
    let output = parse_ok("[#|'a']");
    assert_eq!(output.spans.get(&NodePath::root()), Some(Span::new(0, 7)));
    assert_eq!(output.spans.get(&path(&[0])), Some(Span::new(1, 6)));
    assert_eq!(output.spans.get(&path(&[0, 0])), Some(Span::new(1, 2)));
    assert_eq!(output.spans.get(&path(&[0, 1])), Some(Span::new(3, 6)));
    assert_eq!(output.spans.len(), 4);

    let output = parse_ok("{#:''}");
    assert_eq!(output.spans.get(&path(&[0])), Some(Span::new(1, 2)));
    assert_eq!(output.spans.get(&path(&[1])), Some(Span::new(3, 5)));
}

#[test]
fn every_span_addresses_a_node() {
    let output = parse_ok("{''/en:[1m|#]}|ø");
    for indices in [&[][..], &[0], &[0, 0], &[0, 0, 0], &[0, 1], &[0, 1, 0], &[0, 1, 0, 0], &[1]] {
        let at = path(indices);
        assert!(output.spans.get(&at).is_some(), "no span at {at}");
        assert!(
            quill_ir::descendant(&output.ty, &at).is_some(),
            "no node at {at}"
        );
    }
}

#[test]
fn unexpected_character_is_a_lex_error() {
    assert_eq!(
        parse_err("#@"),
        ParseError::Lex(LexError::UnexpectedCharacter {
            ch: '@',
            span: Span::new(1, 2),
        })
    );
}

#[test]
fn unterminated_text() {
    assert_eq!(
        parse_err("'abc"),
        ParseError::Lex(LexError::UnterminatedText {
            span: Span::new(0, 4),
        })
    );
}

#[test]
fn empty_input_expects_a_type() {
    assert_eq!(
        parse_err(""),
        ParseError::ExpectedType {
            found: TokenKind::Eof,
            span: Span::new(0, 0),
        }
    );
    assert_eq!(
        parse_err("#|"),
        ParseError::ExpectedType {
            found: TokenKind::Eof,
            span: Span::new(2, 2),
        }
    );
}

#[test]
fn detached_dash_is_not_a_sign() {
    assert_eq!(
        parse_err("- 1"),
        ParseError::ExpectedType {
            found: TokenKind::Dash,
            span: Span::new(0, 1),
        }
    );
}

#[test]
fn unclosed_delimiters() {
    assert_eq!(
        parse_err("[#"),
        ParseError::UnclosedDelimiter {
            open: '[',
            open_span: Span::new(0, 1),
            span: Span::new(2, 2),
        }
    );
    assert_eq!(
        parse_err("{#:''"),
        ParseError::UnclosedDelimiter {
            open: '{',
            open_span: Span::new(0, 1),
            span: Span::new(5, 5),
        }
    );
}

#[test]
fn wrong_closer() {
    assert_eq!(
        parse_err("[# #"),
        ParseError::UnexpectedToken {
            expected: "`]`",
            found: TokenKind::Hash,
            span: Span::new(3, 4),
        }
    );
}

#[test]
fn trailing_input() {
    assert_eq!(
        parse_err("# #"),
        ParseError::TrailingInput {
            found: TokenKind::Hash,
            span: Span::new(2, 3),
        }
    );
}

#[test]
fn fractional_exponent_is_invalid() {
    assert_eq!(
        parse_err("#m^1.5"),
        ParseError::InvalidNumber {
            lexeme: "1.5".into(),
            span: Span::new(3, 6),
        }
    );
}

#[test]
fn extreme_exponents_round_trip() {
    for dimensions in [
        vec![("m", i32::MIN)],
        vec![("m", i32::MAX)],
        vec![("m", 1), ("s", i32::MIN)],
        vec![("m", 1), ("s", -i32::MAX)],
    ] {
        let Some(unit) = Unit::from_dimensions(dimensions) else {
            panic!("unit cancelled");
        };
        let original = Type::from(NumberType::with_unit(unit));
        let rendered = original.render();
        assert_eq!(ty(&rendered), original, "{rendered}");
    }
}

#[test]
fn out_of_range_exponent_is_invalid() {
    assert_eq!(
        parse_err("#m^2147483648"),
        ParseError::InvalidNumber {
            lexeme: "2147483648".into(),
            span: Span::new(3, 13),
        }
    );
    assert!(matches!(
        parse_err("#m^-2147483649"),
        ParseError::InvalidNumber { .. }
    ));
}

#[test]
fn malformed_units_and_languages() {
    assert!(matches!(
        parse_err("#m·"),
        ParseError::UnexpectedToken {
            expected: "a unit name",
            ..
        }
    ));
    assert!(matches!(
        parse_err("#m^"),
        ParseError::UnexpectedToken {
            expected: "an exponent",
            ..
        }
    ));
    assert!(matches!(
        parse_err("''/"),
        ParseError::UnexpectedToken {
            expected: "a language code",
            found: TokenKind::Eof,
            ..
        }
    ));
    assert!(matches!(
        parse_err("''/en-"),
        ParseError::UnexpectedToken {
            expected: "a region",
            ..
        }
    ));
}

#[test]
fn deep_nesting() {
    let depth = 500;
    let source = format!("{}#{}", "[".repeat(depth), "]".repeat(depth));
    let output = parse_ok(&source);
    assert_eq!(output.spans.len(), depth + 1);

    let mut node = &output.ty;
    let mut levels = 0;
    while let Type::List(list) = node {
        node = list.element();
        levels += 1;
    }
    assert_eq!(levels, depth);
    assert_eq!(node, &Type::number());
}

#[test]
fn parse_type_accepts_token_lists() {
    let tokens = match quill_lexer::to_tokens("{#}") {
        Ok(tokens) => tokens,
        Err(err) => panic!("{err}"),
    };
    assert_eq!(parse_type(&tokens).map(|output| output.ty), Ok(Type::set(Type::number())));
}
