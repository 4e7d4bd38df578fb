//! Quill IR - the node contract and the structural type algebra.
//!
//! This crate contains the data structures shared by every phase:
//! - Spans and tokens for the front end
//! - The [`Node`] contract: kind, grammar, children, render, glyph
//! - The [`Type`] algebra: `_`, literal types, containers, unions
//! - [`NodePath`] and [`SpanMap`] for pointing into trees without spans
//!
//! # Design Philosophy
//!
//! - **Closed variants**: every node kind is an enum variant, so adding one
//!   forces every operation to handle it.
//! - **Owned trees**: children are owned (`Box`/`Vec`), never shared, never
//!   cyclic. Trees are immutable after construction; edits build new trees.
//! - **Canonical text**: `render()` is the only observable format and must
//!   re-parse to an equivalent tree.

mod glyph;
mod node;
mod path;
mod span;
mod token;
mod ty;

pub use glyph::Glyph;
pub use node::{
    check_grammar, descendant, Accepts, Arity, Field, Grammar, GrammarError, Node, NodeKind, Slot,
    TYPE_KINDS,
};
pub use path::{NodePath, SpanMap};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
pub use ty::{
    BasisTypeName, BooleanType, Language, ListType, MapType, NoneType, NumberLiteral, NumberType,
    SetType, TextType, Type, UnionType, Unit,
};
