//! Log output for debugging the lexer and parser.
//!
//! Enable with `RUST_LOG=tiny_parse=trace` (or any other filter). Logs go to
//! standard error so they never mix with the trace on standard output.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber if `RUST_LOG` is set.
///
/// With `tree` the events render as an indented tree. Safe to call more than
/// once; only the first call has any effect.
pub fn init_tracing(tree: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let registry = tracing_subscriber::registry().with(filter);
        if tree {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .init();
        }
    });
}
