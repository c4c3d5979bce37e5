//! Well-known names and locations shared by the supervisor components.

/// External environment file sourced before any daemon launches.
pub const ENV_FILE: &str = "/etc/stackd";

/// Name of the key-value store daemon started first.
pub const STORE_DAEMON: &str = "redisd";

/// Name of the machine-configuration daemon started second.
pub const CONFIG_DAEMON: &str = "machined";

/// Environment variable carrying extra arguments for the store daemon.
pub const STORE_OVERRIDE_VAR: &str = "REDISD";

/// Environment variable carrying extra arguments for the configuration daemon.
pub const CONFIG_OVERRIDE_VAR: &str = "MACHINED";

/// Base directory for the shared runtime artifact namespaces.
pub const RUN_DIR: &str = "/run/stackd";

/// Default log filter expression used by the binary.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Environment variable overriding the log filter expression.
pub const LOG_FILTER_VAR: &str = "STACKD_LOG";

/// Environment variable overriding the log output format.
pub const LOG_FORMAT_VAR: &str = "STACKD_LOG_FORMAT";
