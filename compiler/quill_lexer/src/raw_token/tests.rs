use super::*;

#[test]
fn test_unescape_plain() {
    assert_eq!(unescape_text("hello"), "hello");
    assert_eq!(unescape_text(""), "");
}

#[test]
fn test_unescape_quotes_and_backslashes() {
    assert_eq!(unescape_text(r"\'"), "'");
    assert_eq!(unescape_text(r"\\"), "\\");
    assert_eq!(unescape_text(r"a\qb"), "aqb");
}

#[test]
fn test_unterminated_converts_to_none() {
    assert_eq!(convert_token(RawToken::UnterminatedText, "'ab"), None);
    assert_eq!(
        convert_token(RawToken::Text, "'a\\'b'"),
        Some(TokenKind::Text("a'b".to_string()))
    );
}
