//! Built-in translation tables.
//!
//! English is the reference table and must stay complete; other tables may
//! be partial.

mod en;
mod es;

use crate::Locale;

pub use en::ENGLISH;
pub use es::SPANISH;

/// Every locale compiled into the binary.
pub(crate) static AVAILABLE: &[&Locale] = &[&ENGLISH, &SPANISH];

#[cfg(test)]
mod tests;
