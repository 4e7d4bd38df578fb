//! [`Node`] implementations for types and their modifiers.

use std::borrow::Cow;

use super::{render, Language, Type, Unit};
use crate::{Glyph, Node, NodeKind, Slot};

impl Node for Type {
    fn kind(&self) -> NodeKind {
        match self {
            Type::Any => NodeKind::AnyType,
            Type::Boolean(_) => NodeKind::BooleanType,
            Type::None(_) => NodeKind::NoneType,
            Type::Number(_) => NodeKind::NumberType,
            Type::Text(_) => NodeKind::TextType,
            Type::List(_) => NodeKind::ListType,
            Type::Set(_) => NodeKind::SetType,
            Type::Map(_) => NodeKind::MapType,
            Type::Union(_) => NodeKind::UnionType,
        }
    }

    fn slot(&self, field: &str) -> Slot<'_> {
        match (self, field) {
            (Type::Boolean(boolean), "value") => match boolean.value {
                Some(true) => Slot::Token(Cow::Borrowed("⊤")),
                Some(false) => Slot::Token(Cow::Borrowed("⊥")),
                None => Slot::Empty,
            },
            (Type::Number(number), "value") => number
                .value
                .as_ref()
                .map_or(Slot::Empty, |value| Slot::Token(Cow::Borrowed(value.as_str()))),
            (Type::Number(number), "unit") => number
                .unit
                .as_ref()
                .map_or(Slot::Empty, |unit| Slot::One(unit)),
            (Type::Text(text), "text") => text
                .text
                .as_deref()
                .map_or(Slot::Empty, |text| Slot::Token(Cow::Borrowed(text))),
            (Type::Text(text), "language") => text
                .language
                .as_ref()
                .map_or(Slot::Empty, |language| Slot::One(language)),
            (Type::List(list), "element") => Slot::One(list.element()),
            (Type::Set(set), "element") => Slot::One(set.element()),
            (Type::Map(map), "key") => Slot::One(map.key()),
            (Type::Map(map), "value") => Slot::One(map.value()),
            (Type::Union(union), "alternatives") => Slot::Many(
                union
                    .alternatives()
                    .iter()
                    .map(|alternative| alternative as &dyn Node)
                    .collect(),
            ),
            _ => Slot::Empty,
        }
    }

    fn render(&self) -> String {
        Type::render(self)
    }

    fn glyph(&self) -> Glyph {
        match self {
            Type::Any => Glyph::Placeholder,
            Type::Boolean(_) => Glyph::Boolean,
            Type::None(_) => Glyph::None,
            Type::Number(_) => Glyph::Number,
            Type::Text(_) => Glyph::Text,
            Type::List(_) => Glyph::List,
            Type::Set(_) => Glyph::Set,
            Type::Map(_) => Glyph::Map,
            Type::Union(_) => Glyph::Union,
        }
    }
}

impl Node for Language {
    fn kind(&self) -> NodeKind {
        NodeKind::Language
    }

    fn slot(&self, field: &str) -> Slot<'_> {
        match field {
            "code" => Slot::Token(Cow::Borrowed(self.code())),
            "region" => self
                .region()
                .map_or(Slot::Empty, |region| Slot::Token(Cow::Borrowed(region))),
            _ => Slot::Empty,
        }
    }

    fn render(&self) -> String {
        let mut buf = String::new();
        render::render_language(self, &mut buf);
        buf
    }

    fn glyph(&self) -> Glyph {
        Glyph::Language
    }
}

impl Node for Unit {
    fn kind(&self) -> NodeKind {
        NodeKind::Unit
    }

    fn slot(&self, field: &str) -> Slot<'_> {
        match field {
            "dimensions" => Slot::Token(Cow::Owned(Node::render(self))),
            _ => Slot::Empty,
        }
    }

    fn render(&self) -> String {
        let mut buf = String::new();
        render::render_unit(self, &mut buf);
        buf
    }

    fn glyph(&self) -> Glyph {
        Glyph::Unit
    }
}
