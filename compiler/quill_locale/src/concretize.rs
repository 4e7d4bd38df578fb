//! Template filling.
//!
//! Templates use `$1`..`$9` for positional arguments and `$$` for a literal
//! dollar sign. A placeholder without a matching argument renders as `_`,
//! the same symbol Quill uses for an unknown type.

/// Fill a template with positional arguments.
pub fn concretize(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('$') => {
                chars.next();
                out.push('$');
            }
            Some(d @ '1'..='9') => {
                chars.next();
                let index = d as usize - '1' as usize;
                out.push_str(args.get(index).copied().unwrap_or("_"));
            }
            _ => out.push('$'),
        }
    }

    out
}
