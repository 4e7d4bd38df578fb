//! Embedded error documentation for `quill explain`.
//!
//! Conflict and exception messages are localized through `quill_locale`;
//! these documents are the longer English explanation shown alongside.

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the documentation for an error code.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented error codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    /// Check if an error code has documentation.
    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    // Lexer errors (E0xxx)
    (
        ErrorCode::E0001,
        "# E0001: unterminated text literal\n\n\
         A text literal was opened with `'` but never closed.\n\n\
         ```\n'hello\n```\n\n\
         Close it with a matching `'`. A quote inside text is written `\\'`.\n",
    ),
    (
        ErrorCode::E0002,
        "# E0002: unexpected character\n\n\
         The type expression contains a character that starts no token.\n\
         Types are built from `_ ? ⊤ ⊥ ø # ' [ ] { } : | /` plus numbers\n\
         and unit names.\n",
    ),
    // Parser errors (E1xxx)
    (
        ErrorCode::E1001,
        "# E1001: unexpected token\n\n\
         The parser found a token that cannot appear at this point.\n\n\
         ```\n[#:'']\n```\n\n\
         A list holds one element type; use `{#:''}` for a map.\n",
    ),
    (
        ErrorCode::E1002,
        "# E1002: expected a type\n\n\
         A type was required here but the input ended or held something else.\n\n\
         ```\n#|\n```\n\n\
         Every `|` must be followed by another alternative.\n",
    ),
    (
        ErrorCode::E1003,
        "# E1003: unclosed delimiter\n\n\
         A `[` or `{` was opened but never closed.\n\n\
         ```\n[#\n```\n",
    ),
    (
        ErrorCode::E1004,
        "# E1004: trailing input\n\n\
         A complete type was parsed but more tokens follow it.\n\n\
         ```\n# #\n```\n\n\
         Separate alternatives with `|`.\n",
    ),
    (
        ErrorCode::E1005,
        "# E1005: invalid number\n\n\
         Number literals are decimal: digits, optionally a `.` and more digits,\n\
         optionally preceded by `-`. Exponents such as `1e3` are not supported.\n",
    ),
    // Type conflicts (E2xxx)
    (
        ErrorCode::E2001,
        "# E2001: malformed language\n\n\
         A language tag must be two or three lowercase letters, optionally\n\
         followed by `-` and a region of two uppercase letters or three digits.\n\n\
         ```\n''/EN\n''/en-us\n```\n\n\
         Write `''/en` or `''/en-US`.\n",
    ),
    (
        ErrorCode::E2002,
        "# E2002: unknown language\n\n\
         The language tag is well formed but names no known language. Extra\n\
         languages can be declared with `--languages=`.\n",
    ),
    (
        ErrorCode::E2003,
        "# E2003: duplicate alternative\n\n\
         A union lists the same alternative twice. The duplicate has no effect\n\
         and can be removed.\n\n\
         ```\n#|''|#\n```\n",
    ),
    (
        ErrorCode::E2004,
        "# E2004: alternative accepts everything\n\n\
         One alternative of a union is `_`, which accepts every value, so the\n\
         other alternatives never matter.\n\n\
         ```\n#|_\n```\n\n\
         Use `_` alone, or remove it.\n",
    ),
    // Runtime exceptions (E6xxx)
    (
        ErrorCode::E6001,
        "# E6001: read-only edit\n\n\
         An edit was requested on a source that is read-only. The source is\n\
         unchanged and the edit evaluates to this exception.\n",
    ),
    (
        ErrorCode::E6002,
        "# E6002: edit out of range\n\n\
         An edit named a declaration index past the end of the program.\n",
    ),
    (
        ErrorCode::E6003,
        "# E6003: type mismatch\n\n\
         A value was checked against a type that does not accept it.\n",
    ),
];

#[cfg(test)]
mod tests;
