//! The structural type algebra.
//!
//! # Variants
//!
//! | variant   | syntax            | basis     |
//! |-----------|-------------------|-----------|
//! | `Any`     | `_`               | `any`     |
//! | `Boolean` | `?`, `⊤`, `⊥`     | `boolean` |
//! | `None`    | `ø`               | `none`    |
//! | `Number`  | `#`, `1`, `#m`    | `number`  |
//! | `Text`    | `''`, `'hi'/en`   | `text`    |
//! | `List`    | `[T]`             | `list`    |
//! | `Set`     | `{T}`             | `set`     |
//! | `Map`     | `{K:V}`           | `map`     |
//! | `Union`   | `A\|B`            | `union`   |
//!
//! Literal types carry an optional value and, for numbers and text, an
//! optional modifier (unit or language). Generalization and conflict
//! checking live in `quill_types`; this module only defines shape,
//! construction, and rendering.

mod container;
mod language;
mod leaf;
mod node_impl;
mod render;
mod union;
mod unit;

use std::fmt;

use quill_stack::ensure_sufficient_stack;

pub use container::{ListType, MapType, SetType};
pub use language::Language;
pub use leaf::{BooleanType, NoneType, NumberLiteral, NumberType, TextType};
pub use union::UnionType;
pub use unit::Unit;

use crate::{GrammarError, NodePath};

/// The underlying runtime representation of a type's values.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BasisTypeName {
    Any,
    Boolean,
    None,
    Number,
    Text,
    List,
    Set,
    Map,
    Union,
}

impl BasisTypeName {
    pub fn as_str(self) -> &'static str {
        match self {
            BasisTypeName::Any => "any",
            BasisTypeName::Boolean => "boolean",
            BasisTypeName::None => "none",
            BasisTypeName::Number => "number",
            BasisTypeName::Text => "text",
            BasisTypeName::List => "list",
            BasisTypeName::Set => "set",
            BasisTypeName::Map => "map",
            BasisTypeName::Union => "union",
        }
    }
}

impl fmt::Display for BasisTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A type expression.
#[derive(Eq, PartialEq, Hash, Debug)]
pub enum Type {
    /// The universal type `_`.
    Any,
    Boolean(BooleanType),
    None(NoneType),
    Number(NumberType),
    Text(TextType),
    List(ListType),
    Set(SetType),
    Map(MapType),
    Union(UnionType),
}

// Derived `Clone` would recurse once per level without a stack guard.
impl Clone for Type {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| match self {
            Type::Any => Type::Any,
            Type::Boolean(boolean) => Type::Boolean(*boolean),
            Type::None(none) => Type::None(*none),
            Type::Number(number) => Type::Number(number.clone()),
            Type::Text(text) => Type::Text(text.clone()),
            Type::List(list) => Type::List(list.clone()),
            Type::Set(set) => Type::Set(set.clone()),
            Type::Map(map) => Type::Map(map.clone()),
            Type::Union(union) => Type::Union(union.clone()),
        })
    }
}

impl Type {
    /// `#`
    #[inline]
    pub fn number() -> Self {
        Type::Number(NumberType::default())
    }

    /// `''`
    #[inline]
    pub fn text() -> Self {
        Type::Text(TextType::default())
    }

    /// `?`
    #[inline]
    pub fn boolean() -> Self {
        Type::Boolean(BooleanType::default())
    }

    /// `ø`
    #[inline]
    pub fn none() -> Self {
        Type::None(NoneType)
    }

    /// `[element]`
    pub fn list(element: Type) -> Self {
        Type::List(ListType::new(element))
    }

    /// `{element}`
    pub fn set(element: Type) -> Self {
        Type::Set(SetType::new(element))
    }

    /// `{key:value}`
    pub fn map(key: Type, value: Type) -> Self {
        Type::Map(MapType::new(key, value))
    }

    /// A union over `alternatives`, collapsing a singleton to its only
    /// alternative. Fails on an empty list.
    pub fn union(alternatives: Vec<Type>) -> Result<Type, GrammarError> {
        match <[Type; 1]>::try_from(alternatives) {
            Ok([only]) => Ok(only),
            Err(alternatives) => UnionType::new(alternatives).map(Type::Union),
        }
    }

    /// Whether every value is assignable to this type.
    pub fn accepts_all(&self) -> bool {
        match self {
            Type::Any => true,
            Type::Union(union) => {
                ensure_sufficient_stack(|| union.alternatives().iter().any(Type::accepts_all))
            }
            _ => false,
        }
    }

    pub fn basis_type_name(&self) -> BasisTypeName {
        match self {
            Type::Any => BasisTypeName::Any,
            Type::Boolean(_) => BasisTypeName::Boolean,
            Type::None(_) => BasisTypeName::None,
            Type::Number(_) => BasisTypeName::Number,
            Type::Text(_) => BasisTypeName::Text,
            Type::List(_) => BasisTypeName::List,
            Type::Set(_) => BasisTypeName::Set,
            Type::Map(_) => BasisTypeName::Map,
            Type::Union(_) => BasisTypeName::Union,
        }
    }

    /// A leaf that carries a literal value (`1`, `'hi'`, `⊤`).
    pub fn is_literal(&self) -> bool {
        match self {
            Type::Boolean(b) => b.value.is_some(),
            Type::Number(n) => n.value.is_some(),
            Type::Text(t) => t.text.is_some(),
            _ => false,
        }
    }

    /// Directly owned child types, in grammar order.
    pub fn child_types(&self) -> Vec<&Type> {
        match self {
            Type::Any | Type::Boolean(_) | Type::None(_) | Type::Number(_) | Type::Text(_) => {
                Vec::new()
            }
            Type::List(list) => vec![list.element()],
            Type::Set(set) => vec![set.element()],
            Type::Map(map) => vec![map.key(), map.value()],
            Type::Union(union) => union.alternatives().iter().collect(),
        }
    }

    /// The type at `path`, or `None` if the path leaves the type tree or
    /// lands on a non-type node (a unit or language).
    pub fn type_at(&self, path: &NodePath) -> Option<&Type> {
        let mut ty = self;
        for &index in path.indices() {
            ty = ty.child_types().get(index as usize).copied()?;
        }
        Some(ty)
    }

    /// Canonical concrete syntax.
    pub fn render(&self) -> String {
        let mut buf = String::new();
        self.render_into(&mut buf);
        buf
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<NumberType> for Type {
    fn from(ty: NumberType) -> Self {
        Type::Number(ty)
    }
}

impl From<TextType> for Type {
    fn from(ty: TextType) -> Self {
        Type::Text(ty)
    }
}

impl From<BooleanType> for Type {
    fn from(ty: BooleanType) -> Self {
        Type::Boolean(ty)
    }
}
