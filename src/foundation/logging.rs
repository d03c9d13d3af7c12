use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a global `tracing` subscriber writing to stderr.
///
/// `filter` follows the `EnvFilter` syntax (e.g. `"info"`, `"pixelspace=trace"`).
/// When `None`, `RUST_LOG` is consulted, falling back to `warn`.
/// Idempotent; later calls are ignored, as is a subscriber installed elsewhere.
pub fn init_tracing(filter: Option<&str>) {
    INIT.call_once(|| {
        let filter = match filter {
            Some(f) => EnvFilter::new(f),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        };
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
        tracing::debug!("tracing initialized");
    });
}
