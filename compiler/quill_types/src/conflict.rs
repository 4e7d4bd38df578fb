//! Static conflicts.
//!
//! A conflict is a diagnostic returned as data. Every node reports its own
//! conflicts first and then its children's, in grammar order, so the
//! result for a tree is a pre-order listing. Conflicts name their node by
//! [`NodePath`]; callers turn that into a source location with the
//! parser's span table.

use quill_diagnostic::{Diagnostic, ErrorCode};
use quill_ir::{Language, Node, NodeKind, NodePath, Span, Type, UnionType, Unit};
use quill_locale::{ConflictText, Locales};
use quill_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;

use crate::{Context, TypeFlags};

/// How serious a conflict is.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ConflictSeverity {
    /// The program is wrong.
    Major,
    /// The program works but something is probably unintended.
    Minor,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ConflictKind {
    /// A language tag that is not shaped like `en` or `en-US`.
    MalformedLanguage { code: String },
    /// A well-formed language tag the context does not know.
    UnknownLanguage { code: String },
    /// A union alternative written identically to the one at index
    /// `first` of the same union.
    DuplicateAlternative { first: usize },
    /// A union alternative that accepts every value.
    AlternativeAcceptsAll,
}

impl ConflictKind {
    pub fn severity(&self) -> ConflictSeverity {
        match self {
            ConflictKind::MalformedLanguage { .. } => ConflictSeverity::Major,
            ConflictKind::UnknownLanguage { .. }
            | ConflictKind::DuplicateAlternative { .. }
            | ConflictKind::AlternativeAcceptsAll => ConflictSeverity::Minor,
        }
    }

    pub fn message_key(&self) -> ConflictText {
        match self {
            ConflictKind::MalformedLanguage { .. } => ConflictText::MalformedLanguage,
            ConflictKind::UnknownLanguage { .. } => ConflictText::UnknownLanguage,
            ConflictKind::DuplicateAlternative { .. } => ConflictText::DuplicateAlternative,
            ConflictKind::AlternativeAcceptsAll => ConflictText::AlternativeAcceptsAll,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ConflictKind::MalformedLanguage { .. } => ErrorCode::E2001,
            ConflictKind::UnknownLanguage { .. } => ErrorCode::E2002,
            ConflictKind::DuplicateAlternative { .. } => ErrorCode::E2003,
            ConflictKind::AlternativeAcceptsAll => ErrorCode::E2004,
        }
    }
}

/// One diagnostic about one node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Conflict {
    pub kind: ConflictKind,
    /// Path from the checked root to the offending node.
    pub path: NodePath,
    pub node: NodeKind,
    /// Canonical rendering of the offending node, the message's `$1`.
    pub subject: String,
}

impl Conflict {
    fn new(kind: ConflictKind, path: NodePath, node: &dyn Node) -> Self {
        Conflict {
            kind,
            path,
            node: node.kind(),
            subject: node.render(),
        }
    }

    #[inline]
    pub fn severity(&self) -> ConflictSeverity {
        self.kind.severity()
    }

    #[inline]
    pub fn message_key(&self) -> ConflictText {
        self.kind.message_key()
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// The localized message.
    pub fn explain(&self, locales: &Locales) -> String {
        let template = locales.get(self.message_key()).message;
        locales.concretize(template, &[self.subject.as_str()])
    }

    /// A diagnostic labelled at `span`: an error for major conflicts, a
    /// warning for minor ones.
    pub fn to_diagnostic(&self, locales: &Locales, span: Span) -> Diagnostic {
        let diagnostic = match self.severity() {
            ConflictSeverity::Major => Diagnostic::error(self.code()),
            ConflictSeverity::Minor => Diagnostic::warning(self.code()),
        };
        let diagnostic = diagnostic
            .with_message(self.explain(locales))
            .with_label(span, locales.get(self.node.text_key()).name);
        match &self.kind {
            ConflictKind::DuplicateAlternative { first } => {
                diagnostic.with_note(format!("first written as alternative {}", first + 1))
            }
            ConflictKind::UnknownLanguage { .. } => {
                diagnostic.with_suggestion("add the code with `--languages=` if it is intended")
            }
            _ => diagnostic,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity() == ConflictSeverity::Major
    }
}

/// Nodes that can report conflicts.
pub trait ComputeConflicts {
    /// All conflicts of this node and its descendants, in pre-order.
    #[tracing::instrument(level = "trace", skip_all)]
    fn compute_conflicts(&self, context: &Context) -> Vec<Conflict> {
        let mut conflicts = Vec::new();
        self.collect_conflicts(context, &NodePath::root(), &mut conflicts);
        conflicts
    }

    /// Append the conflicts of the subtree at `path` to `out`.
    fn collect_conflicts(&self, context: &Context, path: &NodePath, out: &mut Vec<Conflict>);
}

impl ComputeConflicts for Type {
    #[tracing::instrument(level = "trace", skip_all)]
    fn compute_conflicts(&self, context: &Context) -> Vec<Conflict> {
        let mut conflicts = Vec::new();
        if TypeFlags::of(self).may_conflict() {
            self.collect_conflicts(context, &NodePath::root(), &mut conflicts);
        }
        conflicts
    }

    fn collect_conflicts(&self, context: &Context, path: &NodePath, out: &mut Vec<Conflict>) {
        ensure_sufficient_stack(|| match self {
            // `_` conflicts with nothing, so it can stand in while editing.
            Type::Any | Type::Boolean(_) | Type::None(_) => {}
            Type::Number(number) => {
                if let Some(unit) = &number.unit {
                    unit.collect_conflicts(context, &path.child(0), out);
                }
            }
            Type::Text(text) => {
                if let Some(language) = &text.language {
                    language.collect_conflicts(context, &path.child(0), out);
                }
            }
            Type::List(list) => list
                .element()
                .collect_conflicts(context, &path.child(0), out),
            Type::Set(set) => set.element().collect_conflicts(context, &path.child(0), out),
            Type::Map(map) => {
                map.key().collect_conflicts(context, &path.child(0), out);
                map.value().collect_conflicts(context, &path.child(1), out);
            }
            Type::Union(union) => {
                union_conflicts(union, path, out);
                for (index, alternative) in union.alternatives().iter().enumerate() {
                    alternative.collect_conflicts(context, &path.child(index), out);
                }
            }
        });
    }
}

fn union_conflicts(union: &UnionType, path: &NodePath, out: &mut Vec<Conflict>) {
    let mut first_seen: FxHashMap<String, usize> = FxHashMap::default();
    for (index, alternative) in union.alternatives().iter().enumerate() {
        if alternative.accepts_all() {
            out.push(Conflict::new(
                ConflictKind::AlternativeAcceptsAll,
                path.child(index),
                alternative,
            ));
        }
        let rendered = alternative.render();
        if let Some(&first) = first_seen.get(&rendered) {
            out.push(Conflict::new(
                ConflictKind::DuplicateAlternative { first },
                path.child(index),
                alternative,
            ));
        } else {
            first_seen.insert(rendered, index);
        }
    }
}

impl ComputeConflicts for Language {
    fn collect_conflicts(&self, context: &Context, path: &NodePath, out: &mut Vec<Conflict>) {
        let code = self.to_string();
        if !self.has_wellformed_code() || !self.has_wellformed_region() {
            out.push(Conflict::new(
                ConflictKind::MalformedLanguage { code },
                path.clone(),
                self,
            ));
        } else if !context.knows_language(self.code()) {
            out.push(Conflict::new(
                ConflictKind::UnknownLanguage { code },
                path.clone(),
                self,
            ));
        }
    }
}

impl ComputeConflicts for Unit {
    /// Any set of dimension names is a valid unit.
    fn collect_conflicts(&self, _context: &Context, _path: &NodePath, _out: &mut Vec<Conflict>) {}
}
