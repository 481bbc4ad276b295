// src/log.rs
// Thin layer over `tracing`: one-time subscriber setup plus the crate's short log macros.
use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, fmt};

#[doc(hidden)]
pub use tracing;

use crate::config::consts::DEFAULT_LOG_FILTER;

static INIT: OnceLock<()> = OnceLock::new();

/// Install the stderr subscriber. `RUST_LOG` wins over the default filter.
/// Safe to call more than once; only the first call does anything.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        let _ = fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_timer(fmt::time::uptime())
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::tracing::warn!($($arg)*)
    };
}
