use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the stderr logger.
///
/// `log_level` wins when given; otherwise `RUST_LOG` is used, defaulting to
/// `warn` so that print failures show up without extra flags.
pub fn init_logger(log_level: Option<&str>, use_color: bool) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_ansi(use_color)
        .with_filter(filter);

    // A subscriber may already be installed when embedded in another process.
    if tracing_subscriber::registry().with(stderr_layer).try_init().is_err() {
        eprintln!("solkit: a global logger is already installed");
    }
}
