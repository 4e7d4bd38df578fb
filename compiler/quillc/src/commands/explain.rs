//! The `explain` command: display documentation for error codes.

use quill_diagnostic::{ErrorCode, ErrorDocs};
use quill_locale::{ConflictText, ExceptionText, Locales};

use crate::Config;

/// Display the documentation and localized message for a code.
pub fn explain_error(code_str: &str, config: &Config) {
    let Some(code) = code_str.parse::<ErrorCode>().ok() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Examples: E0001, E1001, E2002, E6001");
        std::process::exit(1);
    };

    let Some(text) = explanation(code, &config.locales) else {
        eprintln!("No documentation available for {code}");
        std::process::exit(1);
    };
    println!("{text}");
}

/// Documentation for `code`, followed by its localized message template
/// for conflict and exception codes.
pub fn explanation(code: ErrorCode, locales: &Locales) -> Option<String> {
    let doc = ErrorDocs::get(code)?;
    let mut text = doc.trim_end().to_string();
    if let Some(localized) = localized_message(code, locales) {
        text.push_str("\n\n");
        text.push_str(&localized);
    }
    Some(text)
}

fn localized_message(code: ErrorCode, locales: &Locales) -> Option<String> {
    let conflict = match code {
        ErrorCode::E2001 => Some(ConflictText::MalformedLanguage),
        ErrorCode::E2002 => Some(ConflictText::UnknownLanguage),
        ErrorCode::E2003 => Some(ConflictText::DuplicateAlternative),
        ErrorCode::E2004 => Some(ConflictText::AlternativeAcceptsAll),
        _ => None,
    };
    if let Some(key) = conflict {
        return Some(format!("Message: {}", locales.get(key).message));
    }

    let exception = match code {
        ErrorCode::E6001 => ExceptionText::ReadOnlyEdit,
        ErrorCode::E6002 => ExceptionText::EditOutOfRange,
        ErrorCode::E6003 => ExceptionText::TypeMismatch,
        _ => return None,
    };
    let texts = locales.get(exception);
    Some(format!("{}: {}", texts.name, texts.explanation))
}
