//! Leaf types: booleans, none, numbers, text.

use std::fmt;

use super::{Language, Unit};

/// `?`, or the literal `⊤` / `⊥`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct BooleanType {
    pub value: Option<bool>,
}

impl BooleanType {
    pub fn literal(value: bool) -> Self {
        BooleanType { value: Some(value) }
    }
}

/// `ø`
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct NoneType;

/// A number literal, kept as its decimal lexeme so rendering is exact.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct NumberLiteral(String);

impl NumberLiteral {
    /// Validate a lexeme of the form `-?digits(.digits)?` with a finite value.
    pub fn parse(lexeme: &str) -> Option<Self> {
        let digits = lexeme.strip_prefix('-').unwrap_or(lexeme);
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits, None),
        };
        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !fraction.map_or(true, all_digits) {
            return None;
        }
        let value: f64 = lexeme.parse().ok()?;
        value.is_finite().then(|| NumberLiteral(lexeme.to_string()))
    }

    /// Literal from an integer.
    pub fn from_int(value: i64) -> Self {
        NumberLiteral(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value; lexemes are validated at construction.
    pub fn value(&self) -> f64 {
        self.0.parse().unwrap_or(f64::NAN)
    }
}

impl fmt::Display for NumberLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `#`, `#m`, `1`, `2.5m/s`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct NumberType {
    pub value: Option<NumberLiteral>,
    pub unit: Option<Unit>,
}

impl NumberType {
    pub fn literal(value: NumberLiteral, unit: Option<Unit>) -> Self {
        NumberType {
            value: Some(value),
            unit,
        }
    }

    /// `#unit`
    pub fn with_unit(unit: Unit) -> Self {
        NumberType {
            value: None,
            unit: Some(unit),
        }
    }
}

/// `''`, `'hi'`, `''/en`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TextType {
    pub text: Option<String>,
    pub language: Option<Language>,
}

impl TextType {
    pub fn literal(text: impl Into<String>, language: Option<Language>) -> Self {
        TextType {
            text: Some(text.into()),
            language,
        }
    }

    /// `''/language`
    pub fn in_language(language: Language) -> Self {
        TextType {
            text: None,
            language: Some(language),
        }
    }
}
