//! Platform-aware logging initialization.
//!
//! For WASM builds, `tracing` events are routed to the browser console with
//! a level that can be persisted in localStorage. Server builds use the
//! standard env-filter subscriber.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for the current platform.
///
/// This function is idempotent - it can be called multiple times but will
/// only initialize once.
pub fn init() {
    INIT.call_once(|| {
        #[cfg(feature = "web")]
        init_web_logging();

        #[cfg(all(feature = "server", not(feature = "web")))]
        init_server_logging();
    });
}

#[cfg(feature = "web")]
fn init_web_logging() {
    console_error_panic_hook::set_once();
    use tracing_subscriber::{filter::LevelFilter, prelude::*};
    use tracing_web::MakeWebConsoleWriter;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(MakeWebConsoleWriter::new())
        .without_time(); // WASM doesn't have std::time

    // Default to WARN for web unless overridden
    let level = stored_log_level().unwrap_or(LevelFilter::WARN);

    tracing_subscriber::registry().with(level).with(fmt_layer).init();
}

#[cfg(feature = "web")]
fn stored_log_level() -> Option<tracing::level_filters::LevelFilter> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let level_str = storage.get_item("wl_web_log_level").ok()??;

    match level_str.as_str() {
        "error" => Some(tracing::level_filters::LevelFilter::ERROR),
        "warn" => Some(tracing::level_filters::LevelFilter::WARN),
        "info" => Some(tracing::level_filters::LevelFilter::INFO),
        "debug" => Some(tracing::level_filters::LevelFilter::DEBUG),
        "trace" => Some(tracing::level_filters::LevelFilter::TRACE),
        _ => None,
    }
}

#[cfg(all(feature = "server", not(feature = "web")))]
fn init_server_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
