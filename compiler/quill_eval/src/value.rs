//! Runtime values.

use std::fmt;

use quill_ir::{BooleanType, Language, NumberLiteral, NumberType, TextType, Type, Unit};

use crate::ExceptionValue;

/// A value the evaluator can check against types.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    None,
    Boolean(bool),
    Number {
        value: NumberLiteral,
        unit: Option<Unit>,
    },
    Text {
        text: String,
        language: Option<Language>,
    },
    List(Vec<Value>),
    Set(Vec<Value>),
    Map(Vec<(Value, Value)>),
    /// A raised runtime failure.
    Exception(ExceptionValue),
}

impl Value {
    /// A unitless integer.
    pub fn number(value: i64) -> Self {
        Value::Number {
            value: NumberLiteral::from_int(value),
            unit: None,
        }
    }

    pub fn measure(value: i64, unit: Unit) -> Self {
        Value::Number {
            value: NumberLiteral::from_int(value),
            unit: Some(unit),
        }
    }

    /// Untagged text.
    pub fn text(text: impl Into<String>) -> Self {
        Value::Text {
            text: text.into(),
            language: None,
        }
    }

    pub fn is_exception(&self) -> bool {
        matches!(self, Value::Exception(_))
    }

    pub fn as_exception(&self) -> Option<&ExceptionValue> {
        match self {
            Value::Exception(exception) => Some(exception),
            _ => None,
        }
    }

    /// The most specific type of this value.
    ///
    /// Scalars give literal types. A container's element type is the union
    /// of its elements' types in first-occurrence order, or `_` when empty.
    /// Exceptions have type `_`.
    pub fn type_of(&self) -> Type {
        match self {
            Value::None => Type::none(),
            Value::Boolean(value) => Type::from(BooleanType::literal(*value)),
            Value::Number { value, unit } => {
                Type::from(NumberType::literal(value.clone(), unit.clone()))
            }
            Value::Text { text, language } if text.is_empty() => Type::Text(TextType {
                text: None,
                language: language.clone(),
            }),
            Value::Text { text, language } => {
                Type::from(TextType::literal(text.clone(), language.clone()))
            }
            Value::List(values) => Type::list(union_of(values.iter())),
            Value::Set(values) => Type::set(union_of(values.iter())),
            Value::Map(entries) => Type::map(
                union_of(entries.iter().map(|(key, _)| key)),
                union_of(entries.iter().map(|(_, value)| value)),
            ),
            Value::Exception(_) => Type::Any,
        }
    }

    /// Concrete syntax: scalars as their literal types, containers with
    /// space-separated elements, exceptions as `!` and their code.
    pub fn render(&self) -> String {
        match self {
            Value::List(values) => format!("[{}]", render_all(values.iter())),
            Value::Set(values) => format!("{{{}}}", render_all(values.iter())),
            Value::Map(entries) => {
                let entries: Vec<String> = entries
                    .iter()
                    .map(|(key, value)| format!("{}:{}", key.render(), value.render()))
                    .collect();
                format!("{{{}}}", entries.join(" "))
            }
            Value::Exception(exception) => format!("!{}", exception.code()),
            scalar => scalar.type_of().render(),
        }
    }
}

fn render_all<'a>(values: impl Iterator<Item = &'a Value>) -> String {
    values.map(Value::render).collect::<Vec<_>>().join(" ")
}

/// Distinct element types, deduplicated by rendering.
fn union_of<'a>(values: impl Iterator<Item = &'a Value>) -> Type {
    let mut alternatives: Vec<Type> = Vec::new();
    for value in values {
        let ty = value.type_of();
        let rendered = ty.render();
        if !alternatives.iter().any(|seen| seen.render() == rendered) {
            alternatives.push(ty);
        }
    }
    Type::union(alternatives).unwrap_or(Type::Any)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
