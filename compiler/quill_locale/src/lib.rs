//! Quill Locale - message keys and translation tables.
//!
//! Every human-readable string the compiler shows comes from here. Callers
//! never format prose themselves; they select a typed key and, when the
//! template has placeholders, fill it with [`Locales::concretize`].
//!
//! # Key Space
//!
//! - [`NodeText`]: one entry per node kind (name + description)
//! - [`ConflictText`]: one entry per static conflict (message template)
//! - [`ExceptionText`]: one entry per runtime exception (name + explanation)
//!
//! # Fallback
//!
//! A [`Locales`] value is an ordered preference list. Lookups walk the list
//! and always end at English, which is complete by construction (checked by
//! the tests in this crate).

mod concretize;
mod keys;
mod locale;
mod locales;
mod tables;

pub use concretize::concretize;
pub use keys::{ConflictText, ExceptionText, NodeText, TextKey};
pub use locale::{ConflictTexts, ExceptionTexts, Locale, NodeTexts};
pub use locales::Locales;
pub use tables::{ENGLISH, SPANISH};
