//! Evaluation facade for Quill.
//!
//! This crate does not run programs. It owns the current [`Source`], applies
//! structural edits to its [`Program`], checks [`Value`]s against types,
//! and represents every runtime failure as an [`ExceptionValue`]: an
//! ordinary value that flows back to the caller and can explain itself in
//! any locale.
//!
//! # Thread Safety
//!
//! An [`Evaluator`] is always shared as `Arc<Evaluator>`. Its source sits
//! behind a `RwLock` and its exception log behind a `Mutex`; programs are
//! immutable and shared by `Arc`, so an edit builds a new tree and swaps it
//! in while readers keep the old one.

mod evaluator;
mod exception;
mod program;
mod source;
mod value;

pub use evaluator::{Evaluator, EvaluatorId};
pub use exception::{ExceptionKind, ExceptionValue};
pub use program::Program;
pub use source::Source;
pub use value::Value;
