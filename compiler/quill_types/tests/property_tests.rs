//! Property-based tests for generalization and rendering.
//!
//! Random type trees, including nested unions that the parser would never
//! produce, are checked for:
//! 1. Render round trip: `parse(render(t))` renders identically
//! 2. Idempotence: generalizing twice equals generalizing once
//! 3. Canonical output: no literals, no singleton or duplicate alternatives
//! 4. Stability under re-parsing: `parse(render(t))` generalizes to the
//!    same rendering as `t`

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use quill_ir::{BooleanType, Language, NumberLiteral, NumberType, TextType, Type, Unit};
use quill_types::{Context, Generalize, TypeFlags};
use rustc_hash::FxHashSet;

fn unit_strategy() -> impl Strategy<Value = Option<Unit>> {
    prop_oneof![
        Just(None),
        Just(Some(Unit::named("m"))),
        Just(Unit::from_dimensions([("m", 1), ("s", -1)])),
        Just(Unit::from_dimensions([("kg", 2)])),
    ]
}

fn language_strategy() -> impl Strategy<Value = Option<Language>> {
    prop_oneof![
        Just(None),
        Just(Some(Language::new("en"))),
        Just(Some(Language::new("fr"))),
        Just(Some(Language::new("es").with_region("419"))),
    ]
}

fn leaf_strategy() -> impl Strategy<Value = Type> {
    prop_oneof![
        Just(Type::Any),
        Just(Type::boolean()),
        any::<bool>().prop_map(|value| Type::from(BooleanType::literal(value))),
        Just(Type::none()),
        unit_strategy().prop_map(|unit| Type::Number(NumberType { value: None, unit })),
        (-50i64..50, unit_strategy()).prop_map(|(value, unit)| {
            Type::from(NumberType::literal(NumberLiteral::from_int(value), unit))
        }),
        ("[a-z' ]{0,4}", language_strategy()).prop_map(|(text, language)| {
            Type::Text(TextType {
                text: (!text.is_empty()).then_some(text),
                language,
            })
        }),
    ]
}

fn type_strategy() -> impl Strategy<Value = Type> {
    leaf_strategy().prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(Type::list),
            inner.clone().prop_map(Type::set),
            (inner.clone(), inner.clone()).prop_map(|(key, value)| Type::map(key, value)),
            prop::collection::vec(inner, 2..5)
                .prop_map(|alternatives| Type::union(alternatives).expect("two or more")),
        ]
    })
}

fn parse(source: &str) -> Type {
    quill_parse::parse(source)
        .unwrap_or_else(|err| panic!("failed to parse {source:?}: {err}"))
        .ty
}

/// Every union in `ty` has distinct, non-union alternatives.
fn assert_canonical_unions(ty: &Type) {
    if let Type::Union(union) = ty {
        let mut seen = FxHashSet::default();
        for alternative in union.alternatives() {
            assert!(!matches!(alternative, Type::Union(_)), "nested union in {ty}");
            assert!(seen.insert(alternative.render()), "duplicate in {ty}");
        }
    }
    for child in ty.child_types() {
        assert_canonical_unions(child);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn render_round_trips(ty in type_strategy()) {
        let rendered = ty.render();
        prop_assert_eq!(parse(&rendered).render(), rendered);
    }

    #[test]
    fn generalization_is_idempotent(ty in type_strategy()) {
        let context = Context::new();
        let once = ty.generalize(&context);
        prop_assert_eq!(once.generalize(&context), once);
    }

    #[test]
    fn generalized_types_are_canonical(ty in type_strategy()) {
        let general = ty.generalize(&Context::new());
        let flags = TypeFlags::of(&general);
        prop_assert!(!flags.contains(TypeFlags::HAS_LITERAL), "{}", general);
        assert_canonical_unions(&general);
    }

    #[test]
    fn generalization_survives_reparsing(ty in type_strategy()) {
        let context = Context::new();
        let reparsed = parse(&ty.render());
        prop_assert_eq!(
            reparsed.generalize(&context).render(),
            ty.generalize(&context).render()
        );
    }

    #[test]
    fn non_unions_keep_their_basis(ty in type_strategy()) {
        prop_assume!(!matches!(ty, Type::Union(_)));
        let general = ty.generalize(&Context::new());
        prop_assert_eq!(general.basis_type_name(), ty.basis_type_name());
    }
}
