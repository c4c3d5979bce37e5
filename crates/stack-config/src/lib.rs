//! Shared configuration for the `stackd` supervisor.
//!
//! The supervisor binary and any embedding platform need to agree on the
//! well-known locations (artifact directories, the external environment
//! file) and on the shape of the daemon registry. This crate owns those
//! definitions so the supervisor itself stays free of policy:
//!
//! - [`StartupConfig`] carries the ordered auxiliary-daemon registry and the
//!   environment-file path consumed by the startup sequencer.
//! - [`ArtifactPaths`] locates the socket-file and pid-file namespaces the
//!   resource reclaimer clears.
//! - [`LogFormat`] and the `STACKD_LOG*` variables configure telemetry.

use std::env;

mod defaults;
mod logging;
mod paths;
mod registry;

pub use defaults::{
    CONFIG_DAEMON, CONFIG_OVERRIDE_VAR, DEFAULT_LOG_FILTER, ENV_FILE, LOG_FILTER_VAR,
    LOG_FORMAT_VAR, RUN_DIR, STORE_DAEMON, STORE_OVERRIDE_VAR,
};
pub use logging::{LogFormat, LogFormatParseError};
pub use paths::ArtifactPaths;
pub use registry::{DaemonSpec, StartupConfig};

/// Process-wide settings consumed by the supervisor binary.
///
/// The stock binary builds this with [`Config::from_env`], which leaves the
/// daemon registry empty; embedding platforms construct the value directly
/// and populate [`Config::startup`] with their service stack.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telemetry filter expression, e.g. `info` or `stackd=debug`.
    pub log_filter: String,
    /// Telemetry output format.
    pub log_format: LogFormat,
    /// Locations of the shared artifact namespaces.
    pub paths: ArtifactPaths,
    /// Startup sequencing inputs.
    pub startup: StartupConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            log_format: LogFormat::default(),
            paths: ArtifactPaths::default(),
            startup: StartupConfig::default(),
        }
    }
}

impl Config {
    /// Builds the default configuration, honouring the `STACKD_LOG` and
    /// `STACKD_LOG_FORMAT` environment variables when set.
    ///
    /// Unparseable format values fall back to the default rather than
    /// failing: telemetry preferences must never block a privileged start.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(filter) = env::var(LOG_FILTER_VAR)
            && !filter.trim().is_empty()
        {
            config.log_filter = filter;
        }
        if let Ok(format) = env::var(LOG_FORMAT_VAR)
            && let Ok(format) = format.parse()
        {
            config.log_format = format;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_info_filter() {
        let config = Config::default();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.log_format, LogFormat::Compact);
        assert!(config.startup.daemons().is_empty());
    }
}
