//! Process supervision for the host service stack.
//!
//! This module is split into focused submodules so each concern remains
//! small and testable:
//! - [`entry`] gates on privilege and dispatches start/stop invocations.
//! - [`startup`] sequences the hook, environment sourcing, and launches.
//! - [`env_file`] sources the external environment file and resolves the
//!   per-daemon argument overrides.
//! - [`launch`] hands daemons off to the operating system.
//! - [`siblings`] discovers other running supervisor instances.
//! - [`escalate`] drives the graceful-then-forceful termination protocol.
//! - [`reclaim`] clears the shared socket-file and pid-file namespaces.

use std::time::Duration;

mod entry;
mod env_file;
mod errors;
mod escalate;
mod hook;
mod launch;
mod reclaim;
mod siblings;
#[cfg(test)]
mod siblings_tests;
mod startup;
#[cfg(test)]
mod test_support;

pub use entry::{Privilege, SystemPrivilege, run, run_with_hook};
pub use errors::SupervisorError;
pub use escalate::{ProcessSignals, SystemSignals};
pub use hook::{HookError, NoopHook, PreflightHook};
pub use launch::{DaemonLauncher, SystemLauncher};
pub use siblings::ProcessTable;

pub(crate) const SUPERVISOR_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::supervisor");

/// Pause between the graceful and forceful termination phases.
pub const GRACE_PERIOD: Duration = Duration::from_secs(2);

pub(crate) const STOP_COMMAND: &str = "stop";
