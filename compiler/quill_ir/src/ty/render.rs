//! Canonical concrete syntax for types.
//!
//! The output re-parses to an equivalent tree. Unions render flat, so a
//! nested union re-parses as a single union with the same rendering.

use std::fmt::Write;

use quill_stack::ensure_sufficient_stack;

use super::{Language, NumberType, TextType, Type, Unit};

impl Type {
    /// Append the canonical rendering of `self` to `buf`.
    pub fn render_into(&self, buf: &mut String) {
        ensure_sufficient_stack(|| match self {
            Type::Any => buf.push('_'),
            Type::Boolean(boolean) => buf.push(match boolean.value {
                None => '?',
                Some(true) => '⊤',
                Some(false) => '⊥',
            }),
            Type::None(_) => buf.push('ø'),
            Type::Number(number) => render_number(number, buf),
            Type::Text(text) => render_text(text, buf),
            Type::List(list) => {
                buf.push('[');
                list.element().render_into(buf);
                buf.push(']');
            }
            Type::Set(set) => {
                buf.push('{');
                set.element().render_into(buf);
                buf.push('}');
            }
            Type::Map(map) => {
                buf.push('{');
                map.key().render_into(buf);
                buf.push(':');
                map.value().render_into(buf);
                buf.push('}');
            }
            Type::Union(union) => {
                for (i, alternative) in union.alternatives().iter().enumerate() {
                    if i > 0 {
                        buf.push('|');
                    }
                    alternative.render_into(buf);
                }
            }
        });
    }
}

fn render_number(number: &NumberType, buf: &mut String) {
    match &number.value {
        Some(value) => buf.push_str(value.as_str()),
        None => buf.push('#'),
    }
    if let Some(unit) = &number.unit {
        render_unit(unit, buf);
    }
}

fn render_text(text: &TextType, buf: &mut String) {
    buf.push('\'');
    if let Some(text) = &text.text {
        for c in text.chars() {
            if matches!(c, '\'' | '\\') {
                buf.push('\\');
            }
            buf.push(c);
        }
    }
    buf.push('\'');
    if let Some(language) = &text.language {
        buf.push('/');
        render_language(language, buf);
    }
}

pub(super) fn render_unit(unit: &Unit, buf: &mut String) {
    // Writing to a String cannot fail.
    let _ = write!(buf, "{unit}");
}

pub(super) fn render_language(language: &Language, buf: &mut String) {
    let _ = write!(buf, "{language}");
}
