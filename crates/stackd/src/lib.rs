//! Privileged supervisor for the host service stack.
//!
//! `stackd` brings up a fixed-order set of system services on a single host
//! and tears them all down on request. A start run sequences the pre-flight
//! hook, sources `/etc/stackd` when present, launches the store daemon
//! (`redisd`) and the machine-configuration daemon (`machined`) with optional
//! argument overrides from the `REDISD` and `MACHINED` variables, then
//! launches every enabled auxiliary daemon in registration order, aborting on
//! the first failure. A stop run discovers sibling supervisor instances by
//! executable identity, escalates from SIGTERM to SIGKILL across a fixed
//! grace period, and clears the shared socket-file and pid-file namespaces.
//!
//! The crate is also usable as a library by embedding platforms: supply a
//! populated [`stack_config::StartupConfig`] registry and, if the platform
//! needs hardware bring-up before any daemon starts, a custom
//! [`PreflightHook`] via [`run_with_hook`]. The stock binary wires a no-op
//! hook and an empty registry.

mod supervisor;
pub mod telemetry;

pub use supervisor::{
    DaemonLauncher, GRACE_PERIOD, HookError, NoopHook, PreflightHook, Privilege, ProcessSignals,
    ProcessTable, SupervisorError, SystemLauncher, SystemPrivilege, SystemSignals, run,
    run_with_hook,
};
