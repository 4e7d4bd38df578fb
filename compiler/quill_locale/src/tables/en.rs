use crate::keys::{ConflictText, ExceptionText, NodeText};
use crate::locale::{ConflictTexts, ExceptionTexts, Locale, NodeTexts};

pub static ENGLISH: Locale = Locale {
    code: "en",
    name: "English",
    nodes: &[
        (
            NodeText::AnyType,
            NodeTexts {
                name: "any type",
                description: "a placeholder type that accepts every value",
            },
        ),
        (
            NodeText::BooleanType,
            NodeTexts {
                name: "boolean type",
                description: "either ⊤ or ⊥",
            },
        ),
        (
            NodeText::NoneType,
            NodeTexts {
                name: "none type",
                description: "the absence of a value",
            },
        ),
        (
            NodeText::NumberType,
            NodeTexts {
                name: "number type",
                description: "a number, optionally with a unit",
            },
        ),
        (
            NodeText::TextType,
            NodeTexts {
                name: "text type",
                description: "text, optionally in a specific language",
            },
        ),
        (
            NodeText::ListType,
            NodeTexts {
                name: "list type",
                description: "an ordered sequence of values of one type",
            },
        ),
        (
            NodeText::SetType,
            NodeTexts {
                name: "set type",
                description: "an unordered collection of unique values",
            },
        ),
        (
            NodeText::MapType,
            NodeTexts {
                name: "map type",
                description: "a mapping from keys of one type to values of another",
            },
        ),
        (
            NodeText::UnionType,
            NodeTexts {
                name: "union type",
                description: "a value of any one of several types",
            },
        ),
        (
            NodeText::Language,
            NodeTexts {
                name: "language",
                description: "a language tag, like en or es-MX",
            },
        ),
        (
            NodeText::Unit,
            NodeTexts {
                name: "unit",
                description: "a unit of measure, like m or m/s^2",
            },
        ),
        (
            NodeText::Program,
            NodeTexts {
                name: "program",
                description: "a named sequence of declarations",
            },
        ),
    ],
    conflicts: &[
        (
            ConflictText::MalformedLanguage,
            ConflictTexts {
                message: "$1 isn't a language code; use two or three lowercase letters, like en or haw",
            },
        ),
        (
            ConflictText::UnknownLanguage,
            ConflictTexts {
                message: "I don't know a language with the code $1",
            },
        ),
        (
            ConflictText::DuplicateAlternative,
            ConflictTexts {
                message: "$1 is already an alternative of this union",
            },
        ),
        (
            ConflictText::AlternativeAcceptsAll,
            ConflictTexts {
                message: "$1 accepts every value, so the other alternatives of this union never matter",
            },
        ),
    ],
    exceptions: &[
        (
            ExceptionText::ReadOnlyEdit,
            ExceptionTexts {
                name: "read-only edit",
                explanation: "This source is read-only, so I can't change it.",
            },
        ),
        (
            ExceptionText::EditOutOfRange,
            ExceptionTexts {
                name: "edit out of range",
                explanation: "There is no declaration $1 to edit; this program has $2.",
            },
        ),
        (
            ExceptionText::TypeMismatch,
            ExceptionTexts {
                name: "type mismatch",
                explanation: "I expected a value of type $1, but received $2.",
            },
        ),
    ],
};
