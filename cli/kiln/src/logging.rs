//! Diagnostic logging setup.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` is unset, by verbosity.
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "kiln=info,kiln_plan=info,kiln_docs=warn",
        1 => "kiln=debug,kiln_plan=debug,kiln_docs=debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Logs go to stderr so reports on stdout stay
/// machine-readable. Fails if a global subscriber is already installed.
pub fn init(verbose: u8) -> Result<(), TryInitError> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) if verbose == 0 => EnvFilter::new(directives),
        _ => EnvFilter::new(default_directive(verbose)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
}
