//! Programs: a named list of type declarations.

use std::borrow::Cow;

use quill_ir::{Glyph, Node, NodeKind, NodePath, Slot, Type};
use quill_types::{ComputeConflicts, Conflict, Context};

/// The root of an editable tree.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Program {
    name: String,
    body: Vec<Type>,
}

impl Program {
    pub fn new(name: impl Into<String>, body: Vec<Type>) -> Self {
        Program {
            name: name.into(),
            body,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &[Type] {
        &self.body
    }

    pub fn declaration(&self, index: usize) -> Option<&Type> {
        self.body.get(index)
    }

    /// A copy of this program with declaration `index` replaced, or `None`
    /// if there is no such declaration. `self` is left untouched.
    #[must_use]
    pub fn with_declaration(&self, index: usize, replacement: Type) -> Option<Program> {
        if index >= self.body.len() {
            return None;
        }
        let mut edited = self.clone();
        edited.body[index] = replacement;
        Some(edited)
    }
}

impl Node for Program {
    fn kind(&self) -> NodeKind {
        NodeKind::Program
    }

    fn slot(&self, field: &str) -> Slot<'_> {
        match field {
            "name" => Slot::Token(Cow::Borrowed(&self.name)),
            "body" => Slot::Many(self.body.iter().map(|ty| ty as &dyn Node).collect()),
            _ => Slot::Empty,
        }
    }

    /// One declaration per line.
    fn render(&self) -> String {
        self.body
            .iter()
            .map(Type::render)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn glyph(&self) -> Glyph {
        Glyph::Program
    }
}

impl ComputeConflicts for Program {
    fn collect_conflicts(&self, context: &Context, path: &NodePath, out: &mut Vec<Conflict>) {
        for (index, declaration) in self.body.iter().enumerate() {
            declaration.collect_conflicts(context, &path.child(index), out);
        }
    }
}
