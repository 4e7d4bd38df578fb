//! Driver tests: what `quill check` and `quill explain` print.

use pretty_assertions::assert_eq;
use quill_diagnostic::ErrorCode;
use quill_locale::Locales;
use quillc::commands::explanation;

use crate::common::{config, emitted};

#[test]
fn check_output_points_into_the_file() {
    let text = "// sizes\n#kg\n''/EN\n";
    let report = quillc::check_source("sizes.quill", text, &config());
    let output = emitted("sizes.quill", text, &report);

    assert!(output.starts_with("error[E2001]: EN isn't a language code"), "{output}");
    assert!(output.contains("--> sizes.quill:3:4"), "{output}");
    assert!(output.contains("  3 | ''/EN"), "{output}");
    assert!(output.contains("^^ language"), "{output}");
    assert!(output.ends_with("error: aborting due to previous error\n"), "{output}");
}

#[test]
fn duplicate_alternatives_note_the_first() {
    let text = "1|'a'|1\n";
    let report = quillc::check_source("u.quill", text, &config());
    let output = emitted("u.quill", text, &report);

    assert!(output.starts_with("warning[E2003]: 1 is already an alternative"), "{output}");
    assert!(output.contains("--> u.quill:1:7"), "{output}");
    assert!(output.contains("note: first written as alternative 1"), "{output}");
    assert!(output.ends_with("warning: 1 warning emitted\n"), "{output}");
}

#[test]
fn unknown_languages_suggest_the_flag() {
    let text = "''/zz";
    let report = quillc::check_source("l.quill", text, &config());
    let output = emitted("l.quill", text, &report);
    assert!(output.contains("help: add the code with `--languages=`"), "{output}");
}

#[test]
fn diagnostics_keep_line_order_across_many_lines() {
    let text: String = (0..200)
        .map(|i| if i % 50 == 0 { "''/EN\n" } else { "#\n" })
        .collect();
    let report = quillc::check_source("many.quill", &text, &config());
    let starts: Vec<u32> = report
        .diagnostics
        .iter()
        .filter_map(|d| d.primary_span())
        .map(|span| span.start)
        .collect();
    assert_eq!(starts.len(), 4);
    let mut sorted = starts.clone();
    sorted.sort_unstable();
    assert_eq!(starts, sorted);
    assert_eq!(report.program.body().len(), 200);
}

#[test]
fn explain_includes_localized_messages() {
    let english = explanation(ErrorCode::E2002, &Locales::english()).unwrap();
    assert!(english.starts_with("# E2002"), "{english}");
    assert!(english.ends_with("Message: I don't know a language with the code $1"));

    let spanish = explanation(ErrorCode::E2002, &Locales::new(&["es"])).unwrap();
    assert!(spanish.ends_with("Message: No conozco ningún idioma con el código $1"));
}

#[test]
fn explain_exceptions_show_name_and_template() {
    let text = explanation(ErrorCode::E6001, &Locales::english()).unwrap();
    assert!(text.ends_with("read-only edit: This source is read-only, so I can't change it."));
}

#[test]
fn explain_front_end_codes_have_docs_only() {
    let text = explanation(ErrorCode::E1003, &Locales::english()).unwrap();
    assert!(!text.contains("Message:"));
    assert!(!text.is_empty());
}
