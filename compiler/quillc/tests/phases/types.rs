//! Type phase tests: generalization and conflicts over parsed input.

use pretty_assertions::assert_eq;
use quill_ir::NodePath;
use quill_types::{ComputeConflicts, ConflictKind, Context, Generalize, TypeFlags};

use crate::common::{config, parse_type};

#[test]
fn generalize_matches_the_driver() {
    for source in ["'hi'|'hello'", "1m|2|3", "{1|2:2|3}", "[⊤]|[⊥]"] {
        let direct = parse_type(source).generalize(&Context::new());
        let driven = quillc::generalize_source(source, &config()).unwrap();
        assert_eq!(driven, direct, "generalizing {source:?}");
    }
}

#[test]
fn generalized_output_is_canonical_and_stable() {
    let ty = quillc::generalize_source("'a'/en|1kg|'b'/en|2kg|ø", &config()).unwrap();
    assert_eq!(ty.render(), "''/en|#kg|ø");
    assert!(TypeFlags::of(&ty).is_canonical());
    assert_eq!(ty.generalize(&Context::new()), ty);
}

#[test]
fn conflicts_are_listed_in_pre_order() {
    let ty = parse_type("['a'/EN]|['a'/EN]|_");
    let kinds: Vec<(ConflictKind, NodePath)> = ty
        .compute_conflicts(&Context::new())
        .into_iter()
        .map(|conflict| (conflict.kind, conflict.path))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (
                ConflictKind::DuplicateAlternative { first: 0 },
                NodePath::from_indices(&[1])
            ),
            (ConflictKind::AlternativeAcceptsAll, NodePath::from_indices(&[2])),
            (
                ConflictKind::MalformedLanguage { code: "EN".into() },
                NodePath::from_indices(&[0, 0, 0])
            ),
            (
                ConflictKind::MalformedLanguage { code: "EN".into() },
                NodePath::from_indices(&[1, 0, 0])
            ),
        ]
    );
}

#[test]
fn configured_languages_reach_the_context() {
    let mut config = config();
    let ty = parse_type("''/tlh|''/qya");
    assert_eq!(ty.compute_conflicts(&config.context()).len(), 2);
    config.languages = vec!["tlh".into(), "qya".into()];
    assert_eq!(ty.compute_conflicts(&config.context()), Vec::new());
}
