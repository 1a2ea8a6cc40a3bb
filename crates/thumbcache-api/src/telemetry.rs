//! Tracing setup.

use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize console tracing with a compact format.
///
/// Filter defaults to `thumbcache=debug,tower_http=debug`; override via
/// `RUST_LOG`.
pub fn init_telemetry() {
    let console_fmt = tracing_subscriber::fmt::layer().event_format(
        Format::default()
            .compact()
            .with_target(false)
            .without_time(),
    );
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "thumbcache=debug,tower_http=debug".into()),
        )
        .with(console_fmt)
        .init();
}
