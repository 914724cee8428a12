//! Tracing subscriber setup for host applications.
//!
//! The library only emits events; the embedding app decides whether to
//! install a subscriber by calling [`init_logging`] once at startup.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` does not mention this crate.
fn default_directive(quiet: bool) -> &'static str {
    if quiet {
        "switch_helper=error"
    } else {
        "switch_helper=info"
    }
}

/// Install a stderr fmt subscriber filtered by `RUST_LOG`.
///
/// Calling it a second time is a no-op: the global subscriber is already set.
pub fn init_logging(quiet: bool) {
    let filter = match default_directive(quiet).parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .with(filter)
        .try_init();
}
