//! Log output setup
//!
//! `RUST_LOG` wins when set; otherwise `info`, or `debug` with `--verbose`.
//! Logs go to stderr so JSON on stdout stays parseable.

use tracing_subscriber::{fmt, EnvFilter};

pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
