//! Typed message keys.
//!
//! Each key family has a `Texts` record type and knows how to find itself
//! in a [`Locale`] table. This replaces stringly-typed selectors: adding a
//! key without a table entry is caught by the completeness tests.

use crate::locale::{ConflictTexts, ExceptionTexts, Locale, NodeTexts};

/// A key that can be resolved against a single locale table.
pub trait TextKey: Copy + Eq + 'static {
    /// The record stored for this key.
    type Texts: 'static;

    /// Look up this key in one locale, without fallback.
    fn lookup(self, locale: &'static Locale) -> Option<&'static Self::Texts>;

    /// Record returned when no table has the key.
    ///
    /// Unreachable while English is complete.
    fn missing() -> &'static Self::Texts;
}

static MISSING_NODE: NodeTexts = NodeTexts {
    name: "_",
    description: "_",
};

static MISSING_CONFLICT: ConflictTexts = ConflictTexts { message: "_" };

static MISSING_EXCEPTION: ExceptionTexts = ExceptionTexts {
    name: "_",
    explanation: "_",
};

/// Texts for node kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeText {
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

impl NodeText {
    pub const ALL: [NodeText; 12] = [
        NodeText::AnyType,
        NodeText::BooleanType,
        NodeText::NoneType,
        NodeText::NumberType,
        NodeText::TextType,
        NodeText::ListType,
        NodeText::SetType,
        NodeText::MapType,
        NodeText::UnionType,
        NodeText::Language,
        NodeText::Unit,
        NodeText::Program,
    ];
}

impl TextKey for NodeText {
    type Texts = NodeTexts;

    fn lookup(self, locale: &'static Locale) -> Option<&'static NodeTexts> {
        locale
            .nodes
            .iter()
            .find(|(key, _)| *key == self)
            .map(|(_, texts)| texts)
    }

    fn missing() -> &'static NodeTexts {
        &MISSING_NODE
    }
}

/// Texts for static type-check conflicts.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ConflictText {
    MalformedLanguage,
    UnknownLanguage,
    DuplicateAlternative,
    AlternativeAcceptsAll,
}

impl ConflictText {
    pub const ALL: [ConflictText; 4] = [
        ConflictText::MalformedLanguage,
        ConflictText::UnknownLanguage,
        ConflictText::DuplicateAlternative,
        ConflictText::AlternativeAcceptsAll,
    ];
}

impl TextKey for ConflictText {
    type Texts = ConflictTexts;

    fn lookup(self, locale: &'static Locale) -> Option<&'static ConflictTexts> {
        locale
            .conflicts
            .iter()
            .find(|(key, _)| *key == self)
            .map(|(_, texts)| texts)
    }

    fn missing() -> &'static ConflictTexts {
        &MISSING_CONFLICT
    }
}

/// Texts for runtime exception values.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExceptionText {
    ReadOnlyEdit,
    EditOutOfRange,
    TypeMismatch,
}

impl ExceptionText {
    pub const ALL: [ExceptionText; 3] = [
        ExceptionText::ReadOnlyEdit,
        ExceptionText::EditOutOfRange,
        ExceptionText::TypeMismatch,
    ];
}

impl TextKey for ExceptionText {
    type Texts = ExceptionTexts;

    fn lookup(self, locale: &'static Locale) -> Option<&'static ExceptionTexts> {
        locale
            .exceptions
            .iter()
            .find(|(key, _)| *key == self)
            .map(|(_, texts)| texts)
    }

    fn missing() -> &'static ExceptionTexts {
        &MISSING_EXCEPTION
    }
}
