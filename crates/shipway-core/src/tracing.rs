use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the JSON stdout subscriber. `RUST_LOG` controls the filter and
/// defaults to `info` when unset or unparsable.
///
/// Calling it again after the subscriber is installed is a no-op, which
/// keeps `#[tokio::test]` setups that share a process from panicking.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .try_init();
}
