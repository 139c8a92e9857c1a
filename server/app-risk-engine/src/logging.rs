//! Tracing setup for the binary. Logs go to stderr; stdout is reserved for JSON.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over `fallback_level`.
/// Calling it twice is harmless (the second install is ignored).
pub fn init(fallback_level: &str) {
  let filter = EnvFilter::try_from_default_env()
    .or_else(|_| EnvFilter::try_new(fallback_level))
    .unwrap_or_else(|_| EnvFilter::new("warn"));

  let stderr_layer = tracing_subscriber::fmt::layer()
    .with_ansi(false)
    .with_writer(std::io::stderr)
    .with_target(true);

  let _ = tracing_subscriber::registry()
    .with(filter)
    .with(stderr_layer)
    .try_init();
}
