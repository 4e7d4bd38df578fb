//! A single locale's translation table.

use crate::keys::{ConflictText, ExceptionText, NodeText};

/// Name and description of a node kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeTexts {
    /// Short name, e.g. "text type".
    pub name: &'static str,
    /// One-sentence description for tooltips and `explain`.
    pub description: &'static str,
}

/// Message template for a conflict.
///
/// `$1` is the rendered offending node; some conflicts add `$2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConflictTexts {
    pub message: &'static str,
}

/// Name and explanation template for an exception value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExceptionTexts {
    pub name: &'static str,
    /// Template resolved by [`crate::Locales::concretize`].
    pub explanation: &'static str,
}

/// A complete or partial translation table.
///
/// Partial tables are allowed; missing entries fall back through
/// [`crate::Locales`].
#[derive(Debug)]
pub struct Locale {
    /// ISO 639-1 language code.
    pub code: &'static str,
    /// Endonym shown in locale pickers.
    pub name: &'static str,
    pub nodes: &'static [(NodeText, NodeTexts)],
    pub conflicts: &'static [(ConflictText, ConflictTexts)],
    pub exceptions: &'static [(ExceptionText, ExceptionTexts)],
}
