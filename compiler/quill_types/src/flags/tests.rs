use super::*;
use pretty_assertions::assert_eq;
use quill_ir::{Language, NumberLiteral, NumberType, TextType, Unit};

fn one() -> Type {
    Type::Number(NumberType::literal(NumberLiteral::from_int(1), None))
}

fn english() -> Type {
    Type::from(TextType::in_language(Language::new("en")))
}

#[test]
fn flags_size() {
    assert_eq!(std::mem::size_of::<TypeFlags>(), 1);
}

#[test]
fn leaves() {
    assert_eq!(TypeFlags::of(&Type::number()), TypeFlags::empty());
    assert_eq!(TypeFlags::of(&Type::Any), TypeFlags::empty());
    assert_eq!(TypeFlags::of(&one()), TypeFlags::HAS_LITERAL);
    assert_eq!(TypeFlags::of(&english()), TypeFlags::HAS_LANGUAGE);
    assert_eq!(
        TypeFlags::of(&Type::from(NumberType::with_unit(Unit::named("m")))),
        TypeFlags::empty()
    );
}

#[test]
fn containers_inherit_from_children() {
    let flags = TypeFlags::of(&Type::map(english(), Type::list(one())));
    assert_eq!(flags, TypeFlags::HAS_LITERAL | TypeFlags::HAS_LANGUAGE);
}

#[test]
fn unions_are_never_canonical() {
    let union = Type::map(
        Type::text(),
        Type::union(vec![Type::number(), Type::text()]).unwrap(),
    );
    let flags = TypeFlags::of(&union);
    assert!(flags.contains(TypeFlags::HAS_UNION));
    assert!(!flags.is_canonical());
}

#[test]
fn canonical_types() {
    for ty in [
        Type::Any,
        Type::boolean(),
        Type::none(),
        Type::set(Type::from(NumberType::with_unit(Unit::named("s")))),
        Type::map(Type::text(), Type::list(Type::number())),
        english(),
    ] {
        assert!(TypeFlags::of(&ty).is_canonical(), "{ty}");
    }
    assert!(!TypeFlags::of(&Type::list(one())).is_canonical());
}

#[test]
fn only_unions_and_languages_may_conflict() {
    assert!(!TypeFlags::of(&Type::list(one())).may_conflict());
    assert!(!TypeFlags::of(&Type::from(NumberType::with_unit(Unit::named("m")))).may_conflict());
    assert!(TypeFlags::of(&Type::set(english())).may_conflict());
    assert!(TypeFlags::of(&Type::union(vec![one(), Type::text()]).unwrap()).may_conflict());
}
