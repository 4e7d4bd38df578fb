//! Evaluation phase tests: edits and conformance over checked programs.

use pretty_assertions::assert_eq;
use quill_eval::{Evaluator, ExceptionKind, Source, Value};
use quill_ir::Node;
use quill_locale::Locales;
use quill_types::Context;

use crate::common::{config, parse_type};

fn checked_program(text: &str) -> quill_eval::Program {
    quillc::check_source("decls.quill", text, &config()).program
}

#[test]
fn checked_files_become_programs() {
    let program = checked_program("// header\n1|2\n\n'a'/en\n");
    assert_eq!(program.name(), "decls.quill");
    assert_eq!(program.render(), "1|2\n'a'/en");
}

#[test]
fn editing_a_checked_program() {
    let evaluator = Evaluator::new(Source::new(checked_program("#\n''\n")));
    assert_eq!(evaluator.edit(1, parse_type("''/en")), Value::None);
    assert_eq!(evaluator.program().render(), "#\n''/en");
    assert!(evaluator.exceptions().is_empty());
}

#[test]
fn read_only_programs_raise_instead_of_changing() {
    let evaluator = Evaluator::new(Source::read_only(checked_program("#\n")));
    let before = evaluator.program();

    let result = evaluator.edit(0, parse_type("?"));
    let exception = result.as_exception().unwrap();
    assert_eq!(exception.kind(), &ExceptionKind::ReadOnlyEdit);
    assert_eq!(
        exception.explanation(&Locales::english()),
        "This source is read-only, so I can't change it."
    );
    assert!(std::sync::Arc::ptr_eq(exception.program(), &before));
    assert_eq!(evaluator.program().render(), "#");
    assert_eq!(evaluator.exceptions(), vec![exception.clone()]);
}

#[test]
fn conform_checks_values_against_declarations() {
    let program = checked_program("#\n[''/en]\n");
    let evaluator = Evaluator::new(Source::new(program.clone()));
    let context = Context::new();

    let number = program.declaration(0).unwrap();
    assert_eq!(evaluator.conform(Value::number(3), number, &context), Value::number(3));

    let mismatch = evaluator.conform(Value::text("x"), number, &context);
    let exception = mismatch.as_exception().unwrap();
    assert_eq!(
        exception.explanation(&Locales::english()),
        "I expected a value of type #, but received 'x'."
    );
    assert_eq!(mismatch.render(), "!E6003");
}
