use super::*;
use crate::{ConflictText, ExceptionText, NodeText, TextKey};

#[test]
fn test_english_is_complete() {
    for key in NodeText::ALL {
        assert!(key.lookup(&ENGLISH).is_some(), "missing node text {key:?}");
    }
    for key in ConflictText::ALL {
        assert!(key.lookup(&ENGLISH).is_some(), "missing conflict text {key:?}");
    }
    for key in ExceptionText::ALL {
        assert!(key.lookup(&ENGLISH).is_some(), "missing exception text {key:?}");
    }
}

#[test]
fn test_tables_have_no_duplicate_keys() {
    for locale in AVAILABLE {
        for key in NodeText::ALL {
            let count = locale.nodes.iter().filter(|(k, _)| *k == key).count();
            assert!(count <= 1, "{} has {count} entries for {key:?}", locale.code);
        }
        for key in ConflictText::ALL {
            let count = locale.conflicts.iter().filter(|(k, _)| *k == key).count();
            assert!(count <= 1, "{} has {count} entries for {key:?}", locale.code);
        }
        for key in ExceptionText::ALL {
            let count = locale.exceptions.iter().filter(|(k, _)| *k == key).count();
            assert!(count <= 1, "{} has {count} entries for {key:?}", locale.code);
        }
    }
}

#[test]
fn test_codes_are_unique() {
    let mut codes: Vec<&str> = AVAILABLE.iter().map(|l| l.code).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), AVAILABLE.len());
}
