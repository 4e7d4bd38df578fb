//! The Quill command-line driver.
//!
//! The binary in `main.rs` only dispatches on the command name. Everything
//! it runs lives here so the integration tests can drive the same phases
//! without spawning a process.

pub mod commands;
mod config;
mod pipeline;

use std::sync::Once;

pub use config::{Config, ConfigError};
pub use pipeline::{check_source, generalize_source, outline, parse_source, CheckReport};

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Filter directives come from `QUILL_LOG`, or `RUST_LOG` when that is
/// unset. With neither variable nothing is installed. `QUILL_LOG_TREE`
/// switches to indented hierarchical output. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(directives) = std::env::var("QUILL_LOG").or_else(|_| std::env::var("RUST_LOG"))
        else {
            return;
        };
        let filter = EnvFilter::new(directives);

        if std::env::var_os("QUILL_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
