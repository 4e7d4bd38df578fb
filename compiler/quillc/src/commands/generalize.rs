//! The `generalize` command.

use crate::{generalize_source, Config};

use super::report;

/// Print the canonical form of each type, one per line.
///
/// Every argument is attempted; the process exits with status 1 if any of
/// them failed to parse.
pub fn generalize_types(sources: &[String], config: &Config) {
    let mut failed = false;
    for source in sources {
        match generalize_source(source, config) {
            Ok(ty) => println!("{ty}"),
            Err(diagnostic) => {
                report(config, source, &diagnostic);
                failed = true;
            }
        }
    }
    if failed {
        std::process::exit(1);
    }
}
