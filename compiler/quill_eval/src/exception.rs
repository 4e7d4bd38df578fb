//! Exceptions as values.
//!
//! A runtime failure never unwinds. The evaluator builds an
//! [`ExceptionValue`] recording what went wrong, which program it happened
//! in and which evaluator raised it, and returns it like any other value.
//! The value is immutable; its explanation is resolved from the locale
//! layer only when someone asks for it.

use std::fmt;
use std::sync::{Arc, Weak};

use quill_diagnostic::ErrorCode;
use quill_ir::Type;
use quill_locale::{ExceptionText, ExceptionTexts, Locales};

use crate::{Evaluator, Program};

/// What went wrong.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExceptionKind {
    /// An edit was attempted on a read-only source.
    ReadOnlyEdit,
    /// An edit named a declaration the program does not have.
    EditOutOfRange { index: usize, len: usize },
    /// A value did not conform to the type it was checked against.
    TypeMismatch { expected: Type, found: Type },
}

impl ExceptionKind {
    pub fn text_key(&self) -> ExceptionText {
        match self {
            ExceptionKind::ReadOnlyEdit => ExceptionText::ReadOnlyEdit,
            ExceptionKind::EditOutOfRange { .. } => ExceptionText::EditOutOfRange,
            ExceptionKind::TypeMismatch { .. } => ExceptionText::TypeMismatch,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ExceptionKind::ReadOnlyEdit => ErrorCode::E6001,
            ExceptionKind::EditOutOfRange { .. } => ErrorCode::E6002,
            ExceptionKind::TypeMismatch { .. } => ErrorCode::E6003,
        }
    }

    /// Values for the explanation template's placeholders.
    fn arguments(&self) -> Vec<String> {
        match self {
            ExceptionKind::ReadOnlyEdit => Vec::new(),
            ExceptionKind::EditOutOfRange { index, len } => {
                vec![index.to_string(), len.to_string()]
            }
            ExceptionKind::TypeMismatch { expected, found } => {
                vec![expected.render(), found.render()]
            }
        }
    }
}

/// A raised exception.
///
/// Holds the program it was raised in and a weak handle to its evaluator,
/// so an exception kept after its evaluator is gone does not keep the
/// evaluator alive.
#[derive(Clone)]
pub struct ExceptionValue {
    kind: ExceptionKind,
    program: Arc<Program>,
    evaluator: Weak<Evaluator>,
}

impl ExceptionValue {
    pub(crate) fn new(kind: ExceptionKind, program: Arc<Program>, evaluator: Weak<Evaluator>) -> Self {
        ExceptionValue {
            kind,
            program,
            evaluator,
        }
    }

    pub fn kind(&self) -> &ExceptionKind {
        &self.kind
    }

    /// The program current when the exception was raised.
    pub fn program(&self) -> &Arc<Program> {
        &self.program
    }

    /// The evaluator that raised this, if it still exists.
    pub fn evaluator(&self) -> Option<Arc<Evaluator>> {
        self.evaluator.upgrade()
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// The localized name and explanation template.
    pub fn exception_text(&self, locales: &Locales) -> &'static ExceptionTexts {
        locales.get(self.kind.text_key())
    }

    /// The localized explanation with its placeholders filled in.
    pub fn explanation(&self, locales: &Locales) -> String {
        let arguments = self.kind.arguments();
        let arguments: Vec<&str> = arguments.iter().map(String::as_str).collect();
        locales.concretize(self.exception_text(locales).explanation, &arguments)
    }
}

impl PartialEq for ExceptionValue {
    /// Same failure, same program tree, same evaluator.
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && Arc::ptr_eq(&self.program, &other.program)
            && Weak::ptr_eq(&self.evaluator, &other.evaluator)
    }
}

impl fmt::Debug for ExceptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExceptionValue")
            .field("kind", &self.kind)
            .field("program", &self.program.name())
            .finish_non_exhaustive()
    }
}
