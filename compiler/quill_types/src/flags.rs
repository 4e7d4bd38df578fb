//! Structural summary flags.
//!
//! Types are plain owned trees, so flags are computed by one walk rather
//! than cached at construction. The generalizer uses them to return
//! already-canonical types untouched, and conflict checking to skip trees
//! with nothing to report.

use bitflags::bitflags;
use quill_ir::Type;
use quill_stack::ensure_sufficient_stack;

bitflags! {
    /// What a type tree contains.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct TypeFlags: u8 {
        /// Contains a literal leaf (`1`, `'hi'`, `⊤`).
        const HAS_LITERAL = 1 << 0;
        /// Contains a union.
        const HAS_UNION = 1 << 1;
        /// Contains a text with a language.
        const HAS_LANGUAGE = 1 << 2;
    }
}

impl TypeFlags {
    /// Compute the flags of `ty` and everything below it.
    pub fn of(ty: &Type) -> TypeFlags {
        ensure_sufficient_stack(|| {
            let mut own = TypeFlags::empty();
            own.set(TypeFlags::HAS_LITERAL, ty.is_literal());
            own.set(TypeFlags::HAS_UNION, matches!(ty, Type::Union(_)));
            own.set(
                TypeFlags::HAS_LANGUAGE,
                matches!(ty, Type::Text(t) if t.language.is_some()),
            );
            ty.child_types()
                .into_iter()
                .fold(own, |acc, child| acc | TypeFlags::of(child))
        })
    }

    /// Generalization would return the type unchanged.
    #[inline]
    pub const fn is_canonical(self) -> bool {
        !self.intersects(Self::HAS_LITERAL.union(Self::HAS_UNION))
    }

    /// Only unions and languages produce conflicts; units never do.
    #[inline]
    pub const fn may_conflict(self) -> bool {
        self.intersects(Self::HAS_UNION.union(Self::HAS_LANGUAGE))
    }
}

#[cfg(test)]
mod tests;
