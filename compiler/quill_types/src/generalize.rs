//! Generalization: the canonical, literal-free form of a type.
//!
//! Leaves lose their literal value but keep their modifier. Containers are
//! rebuilt around their generalized children. Unions are flattened,
//! generalized alternative by alternative, and deduplicated by canonical
//! rendering, keeping the first occurrence of each form.
//!
//! Number alternatives of a union form one group: their unit survives only
//! if every one of them wrote the same unit (or none did). Text languages
//! are part of a leaf's rendering, so `''/en` and `''/fr` never merge.

use quill_ir::{NumberType, TextType, Type, UnionType, Unit};
use quill_stack::ensure_sufficient_stack;
use rustc_hash::FxHashSet;

use crate::{Context, TypeFlags};

/// Types that can be generalized.
pub trait Generalize {
    fn generalize(&self, context: &Context) -> Type;
}

impl Generalize for Type {
    fn generalize(&self, context: &Context) -> Type {
        generalize(self, context)
    }
}

/// Generalize `ty`. Already-canonical types are cloned without rebuilding.
#[tracing::instrument(level = "trace", skip_all, fields(ty = %ty))]
pub fn generalize(ty: &Type, _context: &Context) -> Type {
    if TypeFlags::of(ty).is_canonical() {
        return ty.clone();
    }
    generalize_type(ty)
}

fn generalize_type(ty: &Type) -> Type {
    ensure_sufficient_stack(|| match ty {
        Type::Any | Type::None(_) => ty.clone(),
        Type::Boolean(_) => Type::boolean(),
        Type::Number(number) => Type::Number(NumberType {
            value: None,
            unit: number.unit.clone(),
        }),
        Type::Text(text) => Type::Text(TextType {
            text: None,
            language: text.language.clone(),
        }),
        Type::List(list) => Type::list(generalize_type(list.element())),
        Type::Set(set) => Type::set(generalize_type(set.element())),
        Type::Map(map) => Type::map(generalize_type(map.key()), generalize_type(map.value())),
        Type::Union(union) => generalize_union(union),
    })
}

fn generalize_union(union: &UnionType) -> Type {
    let alternatives = union.flattened();
    let keep_units = units_agree(&alternatives);

    let mut seen = FxHashSet::default();
    let mut survivors = Vec::with_capacity(alternatives.len());
    for alternative in &alternatives {
        let mut general = generalize_type(alternative);
        if !keep_units {
            if let Type::Number(number) = &mut general {
                number.unit = None;
            }
        }
        if seen.insert(general.render()) {
            survivors.push(general);
        }
    }

    if survivors.len() < alternatives.len() {
        tracing::debug!(
            before = alternatives.len(),
            after = survivors.len(),
            "collapsed union alternatives"
        );
    }

    // A union has at least one alternative, so at least one survives.
    let mut survivors = survivors.into_iter();
    match (survivors.next(), survivors.next()) {
        (Some(first), Some(second)) => {
            Type::Union(UnionType::with_alternatives(first, second, survivors))
        }
        (Some(only), None) => only,
        (None, _) => Type::Any,
    }
}

/// Whether every number alternative carries the same unit (or none).
fn units_agree(alternatives: &[&Type]) -> bool {
    let mut units = alternatives.iter().filter_map(|alternative| match alternative {
        Type::Number(number) => Some(number.unit.as_ref()),
        _ => None,
    });
    let Some(first) = units.next() else {
        return true;
    };
    units.all(|unit: Option<&Unit>| unit == first)
}
