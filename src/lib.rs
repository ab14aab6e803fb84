//! Hashtrie Ring Library
//!
//! Two independent in-memory data structures:
//!
//! - [`HashTrieMap`](data_structures::HashTrieMap), a trie keyed by symbol
//!   sequences where every node maps the next symbol to its child through a
//!   hash map.
//! - [`CircularArrayFifoQueue`](data_structures::CircularArrayFifoQueue), a
//!   fixed-capacity FIFO over a wrap-around buffer.
//!
//! The surrounding modules provide configuration loading, logging setup and a
//! crate-wide error type.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod logging;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

use std::path::Path;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Outcome of [`init`] for the two pieces of process-wide state it touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitReport {
    /// The loaded configuration became the global configuration. `false` if
    /// an earlier call had already set it.
    pub config_installed: bool,

    /// The crate's tracing subscriber was installed. `false` if the
    /// application already set its own.
    pub logging_installed: bool,
}

/// Library initialization function.
///
/// Loads the configuration (defaults, optional file, `HASHTRIE_RING__*`
/// environment overrides), installs it as the global configuration and then
/// sets up logging from its `log` section.
///
/// Only a configuration that fails to load or validate is an error. An
/// already-installed global configuration or tracing subscriber is kept and
/// reported through [`InitReport`].
pub fn init(config_path: Option<&Path>) -> error::Result<InitReport> {
    let loader = config::ConfigLoader::new(config_path, config::ENV_PREFIX);
    let loaded = loader.load()?;
    let log = loaded.log.clone();

    let config_installed = config::init_global_config(loaded);
    let logging_installed = match logging::init_logging(&log) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Keeping the existing tracing subscriber");
            false
        }
    };

    tracing::info!(
        version = VERSION,
        config_installed,
        logging_installed,
        "hashtrie-ring initialized"
    );
    Ok(InitReport {
        config_installed,
        logging_installed,
    })
}
