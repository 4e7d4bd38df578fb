use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E2001.as_str(), "E2001");
}

#[test]
fn test_all_variants_classified() {
    for code in ErrorCode::ALL {
        let ranges = [
            code.is_lexer_error(),
            code.is_parser_error(),
            code.is_conflict(),
            code.is_eval_error(),
        ];
        assert_eq!(
            ranges.iter().filter(|&&r| r).count(),
            1,
            "{code} must belong to exactly one range"
        );
    }
}

#[test]
fn test_phase_matches_leading_digit() {
    for code in ErrorCode::ALL {
        let digit = code.as_str().as_bytes()[1];
        match digit {
            b'0' => assert!(code.is_lexer_error()),
            b'1' => assert!(code.is_parser_error()),
            b'2' => assert!(code.is_conflict()),
            b'6' => assert!(code.is_eval_error()),
            _ => panic!("unexpected phase digit in {code}"),
        }
    }
}

#[test]
fn test_from_str_round_trips() {
    for &code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(code));
    }
    assert_eq!("e2003".parse::<ErrorCode>(), Ok(ErrorCode::E2003));
    assert_eq!("E9999".parse::<ErrorCode>(), Err(()));
    assert_eq!("".parse::<ErrorCode>(), Err(()));
}
