//! Type operations for Quill.
//!
//! `quill_ir` defines what a type *is*. This crate defines what can be
//! computed from one:
//!
//! - [`Generalize`]: reduce a type to its canonical, literal-free shape
//! - [`ComputeConflicts`]: static diagnostics as data ([`Conflict`])
//! - [`Assignable`]: whether one type accepts the values of another
//! - [`TypeFlags`]: one-pass summary used to skip work
//!
//! All operations are pure functions of a type and a read-only
//! [`Context`], so they may run concurrently over shared trees.

mod accepts;
mod conflict;
mod context;
mod flags;
mod generalize;

pub use accepts::Assignable;
pub use conflict::{ComputeConflicts, Conflict, ConflictKind, ConflictSeverity};
pub use context::{Context, KNOWN_LANGUAGES};
pub use flags::TypeFlags;
pub use generalize::{generalize, Generalize};
