//! Union types.

use quill_stack::ensure_sufficient_stack;

use super::Type;
use crate::{GrammarError, NodeKind};

/// `A|B|...`, with at least two alternatives in written order.
///
/// Nested unions are allowed here; the generalizer flattens them.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct UnionType {
    alternatives: Vec<Type>,
}

impl UnionType {
    /// Fails with [`GrammarError::TooFew`] for fewer than two alternatives.
    pub fn new(alternatives: Vec<Type>) -> Result<Self, GrammarError> {
        if alternatives.len() < 2 {
            return Err(GrammarError::TooFew {
                kind: NodeKind::UnionType,
                field: "alternatives",
                min: 2,
                found: alternatives.len(),
            });
        }
        Ok(UnionType { alternatives })
    }

    /// Infallible construction from two alternatives and any number more.
    pub fn with_alternatives(first: Type, second: Type, rest: impl IntoIterator<Item = Type>) -> Self {
        let mut alternatives = vec![first, second];
        alternatives.extend(rest);
        UnionType { alternatives }
    }

    pub fn alternatives(&self) -> &[Type] {
        &self.alternatives
    }

    /// Alternatives with nested unions spliced in place, depth first.
    pub fn flattened(&self) -> Vec<&Type> {
        fn collect<'a>(alternatives: &'a [Type], out: &mut Vec<&'a Type>) {
            for alternative in alternatives {
                match alternative {
                    Type::Union(inner) => {
                        ensure_sufficient_stack(|| collect(inner.alternatives(), out));
                    }
                    other => out.push(other),
                }
            }
        }
        let mut out = Vec::with_capacity(self.alternatives.len());
        collect(&self.alternatives, &mut out);
        out
    }
}
