//! Defines the unified error surface for supervisor runs.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::hook::HookError;

/// Errors surfaced while starting or stopping the service stack.
///
/// The supervisor never retries: the first error aborts the remaining
/// sequence and is reported unchanged, so a misconfigured host fails loudly
/// instead of limping along with part of the stack missing.
#[derive(Debug, Error)]
pub enum SupervisorError {
    /// The caller's effective user is not the superuser.
    #[error("superuser privilege required")]
    NotPrivileged,
    /// The command line did not match a supported invocation.
    #[error("unexpected arguments: {arguments}")]
    UnexpectedArgument {
        /// The unrecognised tokens, verbatim.
        arguments: String,
    },
    /// The platform pre-flight hook reported a failure.
    #[error("pre-flight hook failed: {source}")]
    Hook {
        /// Error surfaced verbatim from the hook.
        #[source]
        source: HookError,
    },
    /// Reading the external environment file failed.
    #[error("failed to read environment file '{path}': {source}")]
    EnvRead {
        /// Environment file path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// The external environment file held a line that is not `KEY=VALUE`.
    #[error("malformed entry in '{path}' at line {line}: '{entry}'")]
    EnvParse {
        /// Environment file path.
        path: PathBuf,
        /// One-based line number of the offending entry.
        line: usize,
        /// The offending line, trimmed.
        entry: String,
    },
    /// Handing a daemon off to the operating system failed.
    #[error("failed to launch daemon '{name}': {source}")]
    DaemonLaunch {
        /// Daemon binary name.
        name: String,
        /// Underlying spawn error.
        #[source]
        source: io::Error,
    },
    /// Enumerating the process table failed.
    #[error("failed to enumerate processes under '{path}': {source}")]
    ProcessDiscovery {
        /// Process-table path that could not be read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// Removing a runtime artifact failed.
    #[error("failed to reclaim artifact '{path}': {source}")]
    Reclaim {
        /// Artifact or directory that could not be cleared.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
}
