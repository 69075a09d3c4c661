//! Logging setup
//!
//! `RUST_LOG` wins over the configured level. The format is `pretty` for
//! development or `json` for production log shipping.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Build the filter: `RUST_LOG` if set, otherwise the configured level for
/// this crate plus HTTP tracing.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("outbreak={},tower_http={}", config.level, config.level))
    })
}

/// Install the global subscriber. Call once, at startup.
pub fn init(config: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    match config.format.as_str() {
        "json" => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        other => {
            registry.with(tracing_subscriber::fmt::layer()).init();
            if other != "pretty" {
                tracing::warn!(format = %other, "Unknown log format, using pretty");
            }
        }
    }
}
