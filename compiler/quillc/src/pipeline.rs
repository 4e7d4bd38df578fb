//! The phases the commands run, as plain functions.

use quill_diagnostic::Diagnostic;
use quill_eval::Program;
use quill_ir::{Node, NodePath, Span, SpanMap, Type};
use quill_parse::ParseOutput;
use quill_types::{generalize, ComputeConflicts, Conflict};
use rayon::prelude::*;

use crate::Config;

/// Lex and parse one type expression.
pub fn parse_source(source: &str) -> Result<ParseOutput, Diagnostic> {
    quill_parse::parse(source).map_err(|error| error.to_diagnostic())
}

/// Parse `source` and return its generalization.
pub fn generalize_source(source: &str, config: &Config) -> Result<Type, Diagnostic> {
    let output = parse_source(source)?;
    Ok(generalize(&output.ty, &config.context()))
}

/// One line per node, children indented under their parent.
///
/// Each line shows the node's glyph symbol, its kind and its rendering.
pub fn outline(root: &dyn Node) -> String {
    let mut out = String::new();
    let mut pending: Vec<(usize, &dyn Node)> = vec![(0, root)];
    while let Some((depth, node)) = pending.pop() {
        out.push_str(&"  ".repeat(depth));
        out.push_str(node.glyph().symbol());
        out.push(' ');
        out.push_str(node.kind().as_str());
        out.push(' ');
        out.push_str(&node.render());
        out.push('\n');
        pending.extend(node.children().into_iter().rev().map(|child| (depth + 1, child)));
    }
    out
}

/// Result of checking a file of type declarations.
#[derive(Debug)]
pub struct CheckReport {
    /// The declarations that parsed, in line order.
    pub program: Program,
    /// Parse errors and conflicts, in line order, spans relative to the file.
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}

/// One line of a checked file.
enum Line {
    Parsed { offset: u32, spans: SpanMap, ty: Type },
    Failed(Diagnostic),
}

/// Check every declaration line of `text`.
///
/// Empty lines and lines starting with `//` are skipped. Lines are parsed
/// in parallel; the parsed declarations become one [`Program`] named
/// `name`, whose conflicts are mapped back onto their lines.
#[tracing::instrument(level = "trace", skip_all, fields(name = name))]
pub fn check_source(name: &str, text: &str, config: &Config) -> CheckReport {
    let lines: Vec<(usize, &str)> = declaration_lines(text).collect();
    let parsed: Vec<Line> = lines
        .par_iter()
        .map(|&(offset, line)| {
            // Offsets past u32::MAX cannot be located; the lexer rejects them anyway.
            let offset = u32::try_from(offset).unwrap_or(u32::MAX);
            match parse_source(line) {
                Ok(output) => Line::Parsed {
                    offset,
                    spans: output.spans,
                    ty: output.ty,
                },
                Err(diagnostic) => Line::Failed(diagnostic.offset_by(offset)),
            }
        })
        .collect();

    let body: Vec<Type> = parsed
        .iter()
        .filter_map(|line| match line {
            Line::Parsed { ty, .. } => Some(ty.clone()),
            Line::Failed(_) => None,
        })
        .collect();
    let program = Program::new(name, body);

    let mut by_declaration: Vec<Vec<Conflict>> = vec![Vec::new(); program.body().len()];
    for conflict in program.compute_conflicts(&config.context()) {
        if let Some(&index) = conflict.path.indices().first() {
            if let Some(bucket) = by_declaration.get_mut(index as usize) {
                bucket.push(conflict);
            }
        }
    }

    let mut diagnostics = Vec::new();
    let mut buckets = by_declaration.into_iter();
    for line in parsed {
        match line {
            Line::Failed(diagnostic) => diagnostics.push(diagnostic),
            Line::Parsed { offset, spans, .. } => {
                let conflicts = buckets.next().unwrap_or_default();
                for conflict in conflicts {
                    let within =
                        NodePath::from_indices(conflict.path.indices().get(1..).unwrap_or_default());
                    let span = spans.nearest(&within).unwrap_or(Span::DUMMY);
                    let diagnostic = conflict.to_diagnostic(&config.locales, span);
                    diagnostics.push(diagnostic.offset_by(offset));
                }
            }
        }
    }

    CheckReport {
        program,
        diagnostics,
    }
}

/// Byte offset and text of each line worth parsing.
fn declaration_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = 0;
    text.split_inclusive('\n').filter_map(move |raw| {
        let start = offset;
        offset += raw.len();
        let line = raw.trim_end_matches(['\n', '\r']);
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            None
        } else {
            Some((start, line))
        }
    })
}
