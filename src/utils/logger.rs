//! Tracing subscriber setup for the command-line front end.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directives used when `RUST_LOG` is unset or unparseable.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "splitshift=debug,info"
    } else {
        "splitshift=info"
    }
}

/// Builds a filter from an explicit `RUST_LOG` value. A non-empty, valid
/// `env` wins over the verbosity flag.
pub fn filter_from(env: Option<&str>, verbose: bool) -> EnvFilter {
    env.filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directives(verbose)))
}

/// Builds the log filter from the process environment.
pub fn log_filter(verbose: bool) -> EnvFilter {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(env.as_deref(), verbose)
}

/// Installs a compact human-readable subscriber writing to stderr.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(log_filter(verbose))
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

/// Installs a JSON-lines subscriber writing to stderr.
pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(log_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .json(),
        )
        .init();
}
