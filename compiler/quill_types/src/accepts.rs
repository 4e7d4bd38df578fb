//! Assignability between types.

use quill_ir::{NumberType, TextType, Type};
use quill_stack::ensure_sufficient_stack;

use crate::Context;

/// Whether values of one type may be used where another is expected.
pub trait Assignable {
    /// Whether every value of `found` is a value of `self`.
    fn accepts(&self, found: &Type, context: &Context) -> bool;
}

impl Assignable for Type {
    fn accepts(&self, found: &Type, context: &Context) -> bool {
        ensure_sufficient_stack(|| accepts(self, found, context))
    }
}

fn accepts(expected: &Type, found: &Type, context: &Context) -> bool {
    if expected.accepts_all() {
        return true;
    }
    // A union is accepted alternative by alternative.
    if let Type::Union(found) = found {
        return found
            .alternatives()
            .iter()
            .all(|alternative| expected.accepts(alternative, context));
    }
    match (expected, found) {
        (Type::Union(expected), found) => expected
            .alternatives()
            .iter()
            .any(|alternative| alternative.accepts(found, context)),
        (Type::Boolean(expected), Type::Boolean(found)) => {
            expected.value.is_none() || expected.value == found.value
        }
        (Type::None(_), Type::None(_)) => true,
        (Type::Number(expected), Type::Number(found)) => accepts_number(expected, found),
        (Type::Text(expected), Type::Text(found)) => accepts_text(expected, found),
        (Type::List(expected), Type::List(found)) => {
            expected.element().accepts(found.element(), context)
        }
        (Type::Set(expected), Type::Set(found)) => {
            expected.element().accepts(found.element(), context)
        }
        (Type::Map(expected), Type::Map(found)) => {
            expected.key().accepts(found.key(), context)
                && expected.value().accepts(found.value(), context)
        }
        _ => false,
    }
}

/// Units must match exactly, so `#` takes only unitless numbers.
fn accepts_number(expected: &NumberType, found: &NumberType) -> bool {
    if expected.unit != found.unit {
        return false;
    }
    match (&expected.value, &found.value) {
        (None, _) => true,
        #[allow(clippy::float_cmp, reason = "literals compare by exact value")]
        (Some(expected), Some(found)) => expected.value() == found.value(),
        (Some(_), None) => false,
    }
}

/// An untagged text type takes text in any language.
fn accepts_text(expected: &TextType, found: &TextType) -> bool {
    let language_ok = match &expected.language {
        None => true,
        Some(language) => found.language.as_ref() == Some(language),
    };
    let text_ok = match &expected.text {
        None => true,
        Some(text) => found.text.as_ref() == Some(text),
    };
    language_ok && text_ok
}
