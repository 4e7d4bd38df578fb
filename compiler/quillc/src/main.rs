//! Quill CLI
//!
//! Type canonicalization and conflict checking from the command line.

use quillc::commands::{
    check_file, explain_error, generalize_types, lex_type, render_type, tree_type,
};
use quillc::Config;

fn main() {
    quillc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let (config, operands) = match Config::from_args(&args[2..]) {
        Ok(parsed) => parsed,
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    };

    match command.as_str() {
        "generalize" => {
            if operands.is_empty() {
                eprintln!("Usage: quill generalize <type>... [--languages=<codes>]");
                std::process::exit(1);
            }
            generalize_types(&operands, &config);
        }
        "check" => {
            let [path] = operands.as_slice() else {
                eprintln!("Usage: quill check <file> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --locale=<codes>     Message languages, most preferred first");
                eprintln!("  --color=<mode>       auto, always or never");
                eprintln!("  --languages=<codes>  Extra language codes to accept");
                std::process::exit(1);
            };
            check_file(path, &config);
        }
        "render" => {
            let [source] = operands.as_slice() else {
                eprintln!("Usage: quill render <type>");
                std::process::exit(1);
            };
            render_type(source, &config);
        }
        "tree" => {
            let [source] = operands.as_slice() else {
                eprintln!("Usage: quill tree <type>");
                std::process::exit(1);
            };
            tree_type(source, &config);
        }
        "lex" => {
            let [source] = operands.as_slice() else {
                eprintln!("Usage: quill lex <type>");
                std::process::exit(1);
            };
            lex_type(source, &config);
        }
        "explain" => {
            let [code] = operands.as_slice() else {
                eprintln!("Usage: quill explain <error-code>");
                eprintln!("Example: quill explain E2002");
                std::process::exit(1);
            };
            explain_error(code, &config);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("quill {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Quill - type canonicalization and conflict checking");
    println!();
    println!("Usage: quill <command> [options]");
    println!();
    println!("Commands:");
    println!("  generalize <type>...  Print the canonical form of each type");
    println!("  check <file>          Report conflicts, one declaration per line");
    println!("  render <type>         Print the canonical rendering of a type");
    println!("  tree <type>           Show the node outline of a type");
    println!("  lex <type>            Show the token stream");
    println!("  explain <code>        Explain an error code (e.g. E2002)");
    println!("  help                  Show this message");
    println!("  version               Show version information");
    println!();
    println!("Options:");
    println!("  --locale=<codes>      Message languages, e.g. es,en (QUILL_LOCALE)");
    println!("  --color=<mode>        auto, always or never (QUILL_COLOR)");
    println!("  --languages=<codes>   Extra language codes to accept");
    println!();
    println!("Set QUILL_LOG=debug for tracing output, QUILL_LOG_TREE=1 to indent it.");
}
