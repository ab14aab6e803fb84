//! Logging setup.
//!
//! The data structures only emit `tracing` events; installing a subscriber is
//! left to the embedding application, which can use [`init_logging`] to get
//! the crate's default formatting driven by [`LogConfig`].

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{Error, Result};

/// Builds the filter for `config`, letting `RUST_LOG` take precedence.
fn build_filter(config: &LogConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| Error::Logging(format!("Invalid log filter '{}': {e}", config.level))),
    }
}

/// Initialize the global tracing subscriber.
///
/// Fails instead of panicking when a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_line_number(config.source_location)
        .with_file(config.source_location)
        .with_thread_names(true);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| Error::Logging(format!("Failed to set global tracing subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_config_level() {
        let config = LogConfig {
            level: "debug".to_string(),
            ..LogConfig::default()
        };
        assert!(build_filter(&config).is_ok());
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        let config = LogConfig {
            level: "not a level!".to_string(),
            ..LogConfig::default()
        };
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(matches!(build_filter(&config), Err(Error::Logging(_))));
        }
    }
}
