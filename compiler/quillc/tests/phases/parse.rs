//! Front-end phase tests: tokens, trees and renderings.

use pretty_assertions::assert_eq;
use quill_diagnostic::ErrorCode;
use quill_ir::{NodeKind, NodePath, TokenKind};

use crate::common::parse_type;

#[test]
fn render_is_canonical() {
    for (source, expected) in [
        ("  1 | 'a'  ", "1|'a'"),
        ("[ # ]", "[#]"),
        ("{ 'k' : ⊤ }", "{'k':⊤}"),
        ("'hola'/es-419", "'hola'/es-419"),
        ("#m·s^-1", "#m/s"),
    ] {
        assert_eq!(parse_type(source).render(), expected, "rendering {source:?}");
    }
}

#[test]
fn rendering_reparses_to_the_same_tree() {
    for source in ["1|[2|'x'/en]", "{#kg:{''}}", "ø|⊥|_", "-2.5m^2"] {
        let ty = parse_type(source);
        assert_eq!(parse_type(&ty.render()), ty, "reparsing {source:?}");
    }
}

#[test]
fn tokens_end_with_eof() {
    let tokens = quill_lexer::to_tokens("[#]").unwrap();
    assert_eq!(
        tokens.kinds(),
        vec![
            TokenKind::LBracket,
            TokenKind::Hash,
            TokenKind::RBracket,
            TokenKind::Eof
        ]
    );
}

#[test]
fn modifiers_are_the_first_child() {
    let ty = parse_type("'hi'/en");
    let language = quill_ir::descendant(&ty, &NodePath::from_indices(&[0])).unwrap();
    assert_eq!(language.kind(), NodeKind::Language);
    assert_eq!(language.render(), "en");
}

#[test]
fn parse_failures_carry_codes() {
    for (source, code) in [
        ("'abc", ErrorCode::E0001),
        ("#@", ErrorCode::E0002),
        ("'a'/", ErrorCode::E1001),
        ("#|", ErrorCode::E1002),
        ("[#", ErrorCode::E1003),
        ("# #", ErrorCode::E1004),
        ("#m^1.5", ErrorCode::E1005),
    ] {
        let diagnostic = quillc::parse_source(source).unwrap_err();
        assert_eq!(diagnostic.code, code, "parsing {source:?}");
    }
}
