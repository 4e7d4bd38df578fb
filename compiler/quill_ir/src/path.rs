//! Paths into node trees.
//!
//! Nodes do not store spans or parent links. A [`NodePath`] names a node by
//! the child indices (in grammar order) that lead to it from a root, which
//! is enough for conflicts to point at the offending node and for the
//! parser to record where each node came from.

use std::fmt;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::Span;

/// Child-index path from a root node. The empty path is the root.
#[derive(Clone, Eq, PartialEq, Hash, Default)]
pub struct NodePath {
    indices: SmallVec<[u32; 8]>,
}

impl NodePath {
    /// The root path.
    #[inline]
    pub fn root() -> Self {
        NodePath {
            indices: SmallVec::new(),
        }
    }

    /// Build from explicit indices.
    pub fn from_indices(indices: &[u32]) -> Self {
        NodePath {
            indices: SmallVec::from_slice(indices),
        }
    }

    /// Path of this node's `index`th child.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.indices.clone();
        indices.push(u32::try_from(index).unwrap_or(u32::MAX));
        NodePath { indices }
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.indices.is_empty()
    }

    /// Path of the parent node, `None` at the root.
    pub fn parent(&self) -> Option<NodePath> {
        let (_, rest) = self.indices.split_last()?;
        Some(NodePath {
            indices: SmallVec::from_slice(rest),
        })
    }
}

impl fmt::Debug for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.indices.is_empty() {
            return f.write_str("/");
        }
        for index in &self.indices {
            write!(f, "/{index}")?;
        }
        Ok(())
    }
}

/// Side table from node paths to source spans.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpanMap {
    spans: FxHashMap<NodePath, Span>,
}

impl SpanMap {
    pub fn new() -> Self {
        SpanMap::default()
    }

    pub fn insert(&mut self, path: NodePath, span: Span) {
        self.spans.insert(path, span);
    }

    pub fn get(&self, path: &NodePath) -> Option<Span> {
        self.spans.get(path).copied()
    }

    /// Span of the node, or of its nearest recorded ancestor.
    pub fn nearest(&self, path: &NodePath) -> Option<Span> {
        let mut current = Some(path.clone());
        while let Some(p) = current {
            if let Some(span) = self.get(&p) {
                return Some(span);
            }
            current = p.parent();
        }
        None
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Re-root every entry under `prefix`, e.g. when a parsed type becomes
    /// a declaration of a larger tree.
    #[must_use]
    pub fn nested_under(&self, prefix: &NodePath) -> SpanMap {
        let spans = self
            .spans
            .iter()
            .map(|(path, span)| {
                let mut indices = prefix.indices.clone();
                indices.extend_from_slice(path.indices());
                (NodePath { indices }, *span)
            })
            .collect();
        SpanMap { spans }
    }

    /// Merge entries from another map, overwriting duplicates.
    pub fn extend(&mut self, other: SpanMap) {
        self.spans.extend(other.spans);
    }
}

#[cfg(test)]
mod tests;
