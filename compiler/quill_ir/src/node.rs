//! The node contract shared by every tree element.
//!
//! A node declares its grammar: an ordered list of fields, each accepting
//! either a lexeme (`Accepts::Token`) or nodes of particular kinds, with an
//! arity. Children, grammar checking, and path lookup are all derived from
//! the grammar plus [`Node::slot`], so the per-kind code only has to say
//! what is in each field.

use std::borrow::Cow;
use std::fmt;

use quill_locale::{Locales, NodeText};
use quill_stack::ensure_sufficient_stack;

use crate::{Glyph, NodePath};

/// Discriminant of every node kind.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    AnyType,
    BooleanType,
    NoneType,
    NumberType,
    TextType,
    ListType,
    SetType,
    MapType,
    UnionType,
    Language,
    Unit,
    Program,
}

/// Every node kind that is a type.
pub const TYPE_KINDS: &[NodeKind] = &[
    NodeKind::AnyType,
    NodeKind::BooleanType,
    NodeKind::NoneType,
    NodeKind::NumberType,
    NodeKind::TextType,
    NodeKind::ListType,
    NodeKind::SetType,
    NodeKind::MapType,
    NodeKind::UnionType,
];

/// How many values a field holds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Arity {
    One,
    Optional,
    Many { min: usize },
}

/// What a field holds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Accepts {
    /// A lexeme, such as a literal value or a language code.
    Token,
    /// Child nodes of one of these kinds.
    Nodes(&'static [NodeKind]),
}

/// One slot of a grammar.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Field {
    pub name: &'static str,
    pub accepts: Accepts,
    pub arity: Arity,
}

impl Field {
    const fn token(name: &'static str, arity: Arity) -> Self {
        Field {
            name,
            accepts: Accepts::Token,
            arity,
        }
    }

    const fn nodes(name: &'static str, kinds: &'static [NodeKind], arity: Arity) -> Self {
        Field {
            name,
            accepts: Accepts::Nodes(kinds),
            arity,
        }
    }
}

/// Ordered field list.
pub type Grammar = &'static [Field];

static NO_FIELDS: [Field; 0] = [];
static BOOLEAN_FIELDS: [Field; 1] = [Field::token("value", Arity::Optional)];
static NUMBER_FIELDS: [Field; 2] = [
    Field::token("value", Arity::Optional),
    Field::nodes("unit", &[NodeKind::Unit], Arity::Optional),
];
static TEXT_FIELDS: [Field; 2] = [
    Field::token("text", Arity::Optional),
    Field::nodes("language", &[NodeKind::Language], Arity::Optional),
];
static ELEMENT_FIELDS: [Field; 1] = [Field::nodes("element", TYPE_KINDS, Arity::One)];
static MAP_FIELDS: [Field; 2] = [
    Field::nodes("key", TYPE_KINDS, Arity::One),
    Field::nodes("value", TYPE_KINDS, Arity::One),
];
static UNION_FIELDS: [Field; 1] = [Field::nodes(
    "alternatives",
    TYPE_KINDS,
    Arity::Many { min: 2 },
)];
static LANGUAGE_FIELDS: [Field; 2] = [
    Field::token("code", Arity::One),
    Field::token("region", Arity::Optional),
];
static UNIT_FIELDS: [Field; 1] = [Field::token("dimensions", Arity::One)];
static PROGRAM_FIELDS: [Field; 2] = [
    Field::token("name", Arity::One),
    Field::nodes("body", TYPE_KINDS, Arity::Many { min: 0 }),
];

impl NodeKind {
    /// The static grammar of this kind.
    pub fn grammar(self) -> Grammar {
        match self {
            NodeKind::AnyType | NodeKind::NoneType => &NO_FIELDS,
            NodeKind::BooleanType => &BOOLEAN_FIELDS,
            NodeKind::NumberType => &NUMBER_FIELDS,
            NodeKind::TextType => &TEXT_FIELDS,
            NodeKind::ListType | NodeKind::SetType => &ELEMENT_FIELDS,
            NodeKind::MapType => &MAP_FIELDS,
            NodeKind::UnionType => &UNION_FIELDS,
            NodeKind::Language => &LANGUAGE_FIELDS,
            NodeKind::Unit => &UNIT_FIELDS,
            NodeKind::Program => &PROGRAM_FIELDS,
        }
    }

    /// Locale key for this kind's name and description.
    pub fn text_key(self) -> NodeText {
        match self {
            NodeKind::AnyType => NodeText::AnyType,
            NodeKind::BooleanType => NodeText::BooleanType,
            NodeKind::NoneType => NodeText::NoneType,
            NodeKind::NumberType => NodeText::NumberType,
            NodeKind::TextType => NodeText::TextType,
            NodeKind::ListType => NodeText::ListType,
            NodeKind::SetType => NodeText::SetType,
            NodeKind::MapType => NodeText::MapType,
            NodeKind::UnionType => NodeText::UnionType,
            NodeKind::Language => NodeText::Language,
            NodeKind::Unit => NodeText::Unit,
            NodeKind::Program => NodeText::Program,
        }
    }

    /// Identifier used in debug output.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::AnyType => "AnyType",
            NodeKind::BooleanType => "BooleanType",
            NodeKind::NoneType => "NoneType",
            NodeKind::NumberType => "NumberType",
            NodeKind::TextType => "TextType",
            NodeKind::ListType => "ListType",
            NodeKind::SetType => "SetType",
            NodeKind::MapType => "MapType",
            NodeKind::UnionType => "UnionType",
            NodeKind::Language => "Language",
            NodeKind::Unit => "Unit",
            NodeKind::Program => "Program",
        }
    }

    pub fn is_type(self) -> bool {
        TYPE_KINDS.contains(&self)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The contents of one grammar field.
#[derive(Debug)]
pub enum Slot<'a> {
    Empty,
    Token(Cow<'a, str>),
    One(&'a dyn Node),
    Many(Vec<&'a dyn Node>),
}

/// The capability every tree element provides.
///
/// Cloning is ordinary [`Clone`] on the concrete type: trees own their
/// children, so a clone is a structurally identical, independent tree.
pub trait Node: fmt::Debug + Send + Sync {
    fn kind(&self) -> NodeKind;

    fn grammar(&self) -> Grammar {
        self.kind().grammar()
    }

    /// The value of the field named `field`; `Slot::Empty` for unknown names.
    fn slot(&self, field: &str) -> Slot<'_>;

    /// Child nodes in grammar order.
    fn children(&self) -> Vec<&dyn Node> {
        let mut children = Vec::new();
        for field in self.grammar() {
            match self.slot(field.name) {
                Slot::One(node) => children.push(node),
                Slot::Many(nodes) => children.extend(nodes),
                Slot::Empty | Slot::Token(_) => {}
            }
        }
        children
    }

    /// Localized name of this node.
    fn describe(&self, locales: &Locales) -> String {
        locales.get(self.kind().text_key()).name.to_string()
    }

    /// Canonical concrete syntax.
    fn render(&self) -> String;

    fn glyph(&self) -> Glyph;
}

/// Follow `path` from `root`.
pub fn descendant<'a>(root: &'a dyn Node, path: &NodePath) -> Option<&'a dyn Node> {
    let mut node = root;
    for &index in path.indices() {
        node = node.children().get(index as usize).copied()?;
    }
    Some(node)
}

/// A node whose fields do not match its grammar.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("{kind} requires `{field}`")]
    MissingField {
        kind: NodeKind,
        field: &'static str,
    },
    #[error("{kind}.{field} needs at least {min} nodes, found {found}")]
    TooFew {
        kind: NodeKind,
        field: &'static str,
        min: usize,
        found: usize,
    },
    #[error("{kind}.{field} does not accept {found}")]
    UnexpectedKind {
        kind: NodeKind,
        field: &'static str,
        found: NodeKind,
    },
    #[error("{kind}.{field} holds the wrong shape of value")]
    ShapeMismatch {
        kind: NodeKind,
        field: &'static str,
    },
}

/// Validate `node` and all of its descendants against their grammars.
pub fn check_grammar(node: &dyn Node) -> Result<(), GrammarError> {
    let kind = node.kind();
    for field in node.grammar() {
        let slot = node.slot(field.name);
        check_field(kind, field, &slot)?;
    }
    ensure_sufficient_stack(|| node.children().into_iter().try_for_each(check_grammar))
}

fn check_field(kind: NodeKind, field: &Field, slot: &Slot<'_>) -> Result<(), GrammarError> {
    let count = match slot {
        Slot::Empty => 0,
        Slot::Token(_) | Slot::One(_) => 1,
        Slot::Many(nodes) => nodes.len(),
    };

    match field.arity {
        Arity::One if count != 1 => {
            return Err(GrammarError::MissingField {
                kind,
                field: field.name,
            })
        }
        Arity::Optional if count > 1 => {
            return Err(GrammarError::ShapeMismatch {
                kind,
                field: field.name,
            })
        }
        Arity::Many { min } if count < min => {
            return Err(GrammarError::TooFew {
                kind,
                field: field.name,
                min,
                found: count,
            })
        }
        _ => {}
    }

    match (field.accepts, slot) {
        (_, Slot::Empty) | (Accepts::Token, Slot::Token(_)) => Ok(()),
        (Accepts::Nodes(kinds), Slot::One(node)) => accepts_kind(kind, field, kinds, *node),
        (Accepts::Nodes(kinds), Slot::Many(nodes)) => nodes
            .iter()
            .try_for_each(|node| accepts_kind(kind, field, kinds, *node)),
        _ => Err(GrammarError::ShapeMismatch {
            kind,
            field: field.name,
        }),
    }
}

fn accepts_kind(
    kind: NodeKind,
    field: &Field,
    kinds: &[NodeKind],
    node: &dyn Node,
) -> Result<(), GrammarError> {
    if kinds.contains(&node.kind()) {
        Ok(())
    } else {
        Err(GrammarError::UnexpectedKind {
            kind,
            field: field.name,
            found: node.kind(),
        })
    }
}
