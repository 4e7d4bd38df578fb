//! Debug commands: `render`, `tree` and `lex` for inspecting the front end.

use crate::{outline, parse_source, Config};

use super::report;

/// Parse a type and print its canonical rendering.
pub fn render_type(source: &str, config: &Config) {
    match parse_source(source) {
        Ok(output) => println!("{}", output.ty),
        Err(diagnostic) => {
            report(config, source, &diagnostic);
            std::process::exit(1);
        }
    }
}

/// Parse a type and print its node outline.
pub fn tree_type(source: &str, config: &Config) {
    match parse_source(source) {
        Ok(output) => print!("{}", outline(&output.ty)),
        Err(diagnostic) => {
            report(config, source, &diagnostic);
            std::process::exit(1);
        }
    }
}

/// Lex a type and display the token stream.
pub fn lex_type(source: &str, config: &Config) {
    let tokens = match quill_lexer::to_tokens(source) {
        Ok(tokens) => tokens,
        Err(error) => {
            report(config, source, &error.to_diagnostic());
            std::process::exit(1);
        }
    };

    println!("Tokens for '{source}' ({} tokens):", tokens.len());
    for token in &tokens {
        println!("  {} @ {:?}", token.kind, token.span);
    }
}
