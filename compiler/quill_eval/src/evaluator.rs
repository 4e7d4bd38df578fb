//! The evaluator facade.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use quill_ir::Type;
use quill_types::{Assignable, Context};

use crate::{ExceptionKind, ExceptionValue, Program, Source, Value};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique evaluator identity.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct EvaluatorId(u64);

impl EvaluatorId {
    fn next() -> Self {
        EvaluatorId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for EvaluatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "evaluator#{}", self.0)
    }
}

/// Owns the current source and the log of raised exceptions.
///
/// Exceptions stay in the log until drained.
pub struct Evaluator {
    id: EvaluatorId,
    /// Handle given to the exceptions this evaluator raises.
    this: Weak<Evaluator>,
    source: RwLock<Source>,
    exceptions: Mutex<Vec<ExceptionValue>>,
}

impl Evaluator {
    pub fn new(source: Source) -> Arc<Evaluator> {
        Arc::new_cyclic(|this| Evaluator {
            id: EvaluatorId::next(),
            this: this.clone(),
            source: RwLock::new(source),
            exceptions: Mutex::new(Vec::new()),
        })
    }

    #[inline]
    pub fn id(&self) -> EvaluatorId {
        self.id
    }

    /// A snapshot of the current source.
    pub fn source(&self) -> Source {
        self.source.read().clone()
    }

    pub fn program(&self) -> Arc<Program> {
        Arc::clone(self.source.read().program())
    }

    /// Replace declaration `index` of the current program.
    ///
    /// Returns `ø` once the edited program is installed. A read-only source
    /// raises [`ExceptionKind::ReadOnlyEdit`] and a missing declaration
    /// raises [`ExceptionKind::EditOutOfRange`]; in both cases the source is
    /// unchanged.
    #[tracing::instrument(level = "trace", skip_all, fields(evaluator = %self.id, index = index))]
    pub fn edit(&self, index: usize, replacement: Type) -> Value {
        let mut source = self.source.write();
        let program = Arc::clone(source.program());
        if source.is_read_only() {
            drop(source);
            return self.raise(ExceptionKind::ReadOnlyEdit, program);
        }
        let Some(edited) = program.with_declaration(index, replacement) else {
            drop(source);
            let len = program.body().len();
            return self.raise(ExceptionKind::EditOutOfRange { index, len }, program);
        };
        *source = source.with_program(edited);
        Value::None
    }

    /// `value` itself if `expected` accepts its type, otherwise a
    /// [`ExceptionKind::TypeMismatch`]. Exceptions pass through unchecked.
    pub fn conform(&self, value: Value, expected: &Type, context: &Context) -> Value {
        if value.is_exception() {
            return value;
        }
        let found = value.type_of();
        if expected.accepts(&found, context) {
            return value;
        }
        let kind = ExceptionKind::TypeMismatch {
            expected: expected.clone(),
            found,
        };
        self.raise(kind, self.program())
    }

    /// Every exception raised so far, oldest first.
    ///
    /// The log keeps growing for the evaluator's lifetime. Long-running
    /// callers should drain it with [`Evaluator::take_exceptions`].
    pub fn exceptions(&self) -> Vec<ExceptionValue> {
        self.exceptions.lock().clone()
    }

    /// Empty the log, returning what it held, oldest first.
    pub fn take_exceptions(&self) -> Vec<ExceptionValue> {
        std::mem::take(&mut *self.exceptions.lock())
    }

    fn raise(&self, kind: ExceptionKind, program: Arc<Program>) -> Value {
        let exception = ExceptionValue::new(kind, program, self.this.clone());
        tracing::debug!(
            evaluator = %self.id,
            code = %exception.code(),
            "raised exception"
        );
        self.exceptions.lock().push(exception.clone());
        Value::Exception(exception)
    }
}

impl fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluator")
            .field("id", &self.id)
            .field("program", &self.program().name())
            .finish_non_exhaustive()
    }
}
