//! Tracing setup for the `tracker` binary
//!
//! Log lines go to stderr so command output on stdout stays clean. The level
//! defaults to `info` for this crate and can be changed with `RUST_LOG`.

use std::sync::Once;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter directive for this crate
pub const DEFAULT_DIRECTIVE: &str = "finance_tracker=info";

/// Install the global tracing subscriber (idempotent)
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = DEFAULT_DIRECTIVE.parse::<Directive>() {
            filter = filter.add_directive(directive);
        }

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
