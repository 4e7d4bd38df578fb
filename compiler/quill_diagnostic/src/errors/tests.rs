use super::*;

#[test]
fn test_every_code_is_documented() {
    for &code in ErrorCode::ALL {
        assert!(ErrorDocs::has_docs(code), "{code} has no documentation");
    }
}

#[test]
fn test_docs_start_with_their_code() {
    for code in ErrorDocs::all_codes() {
        let doc = ErrorDocs::get(code).unwrap_or_default();
        assert!(
            doc.starts_with(&format!("# {code}:")),
            "{code} doc has the wrong heading"
        );
    }
}

#[test]
fn test_no_duplicate_entries() {
    let codes: Vec<ErrorCode> = ErrorDocs::all_codes().collect();
    for (i, code) in codes.iter().enumerate() {
        assert!(!codes[i + 1..].contains(code), "{code} documented twice");
    }
}
