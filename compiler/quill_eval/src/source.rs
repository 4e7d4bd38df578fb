//! The program an evaluator works on.

use std::sync::Arc;

use crate::Program;

/// A program plus whether it may be edited.
#[derive(Clone, Debug)]
pub struct Source {
    program: Arc<Program>,
    read_only: bool,
}

impl Source {
    /// An editable source.
    pub fn new(program: Program) -> Self {
        Source {
            program: Arc::new(program),
            read_only: false,
        }
    }

    /// A source that rejects every edit.
    pub fn read_only(program: Program) -> Self {
        Source {
            program: Arc::new(program),
            read_only: true,
        }
    }

    pub fn program(&self) -> &Arc<Program> {
        &self.program
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// The same source around a new program.
    #[must_use]
    pub(crate) fn with_program(&self, program: Program) -> Source {
        Source {
            program: Arc::new(program),
            read_only: self.read_only,
        }
    }
}
