//! Tracing subscriber setup

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// `--verbose`: per-fixture and per-conversion debug events from this crate,
/// info from dependencies
const VERBOSE_FILTER: &str = "pair_color=debug,info";

/// Quiet by default: the binary's stdout is the manual or a conversion result,
/// so only warnings reach stderr
const QUIET_FILTER: &str = "pair_color=warn";

/// Install the global subscriber. Logs go to stderr so stdout stays printable.
/// `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: bool) {
    let default = if verbose { VERBOSE_FILTER } else { QUIET_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
