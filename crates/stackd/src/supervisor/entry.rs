//! Gates on privilege and dispatches start and stop invocations.

use std::time::Duration;

use nix::unistd::Uid;
use tracing::info;

use stack_config::{ArtifactPaths, Config};

use super::{GRACE_PERIOD, STOP_COMMAND, SUPERVISOR_TARGET};
use super::errors::SupervisorError;
use super::escalate::{self, ProcessSignals, SystemSignals};
use super::hook::{NoopHook, PreflightHook};
use super::launch::{DaemonLauncher, SystemLauncher};
use super::reclaim;
use super::siblings::ProcessTable;
use super::startup;

/// Abstraction over the caller's effective privilege level.
pub trait Privilege {
    /// Whether the caller holds superuser privilege.
    fn is_superuser(&self) -> bool;
}

/// Privilege probe backed by the effective UID.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemPrivilege;

impl Privilege for SystemPrivilege {
    fn is_superuser(&self) -> bool {
        Uid::effective().is_root()
    }
}

/// Collaborators required to run a supervisor invocation.
pub(super) struct SupervisorPlan<P, H, L, S> {
    pub(super) privilege: P,
    pub(super) hook: H,
    pub(super) launcher: L,
    pub(super) signals: S,
    pub(super) table: ProcessTable,
    pub(super) grace: Duration,
}

/// Runs the supervisor using the production collaborators.
///
/// # Errors
///
/// Returns the first [`SupervisorError`] encountered; see the error type for
/// the full surface.
pub fn run(arguments: &[String], config: &Config) -> Result<(), SupervisorError> {
    run_with_hook(arguments, config, NoopHook)
}

/// Runs the supervisor with a platform-supplied pre-flight hook.
///
/// This is the embedding entry point: platforms that must bring up hardware
/// before any daemon starts inject their hook here and populate the daemon
/// registry in `config`.
///
/// # Errors
///
/// Returns the first [`SupervisorError`] encountered.
pub fn run_with_hook<H: PreflightHook>(
    arguments: &[String],
    config: &Config,
    hook: H,
) -> Result<(), SupervisorError> {
    let plan = SupervisorPlan {
        privilege: SystemPrivilege,
        hook,
        launcher: SystemLauncher::new(),
        signals: SystemSignals,
        table: ProcessTable::system(),
        grace: GRACE_PERIOD,
    };
    run_with(&plan, arguments, config)
}

/// Runs the supervisor with injected collaborators.
pub(super) fn run_with<P, H, L, S>(
    plan: &SupervisorPlan<P, H, L, S>,
    arguments: &[String],
    config: &Config,
) -> Result<(), SupervisorError>
where
    P: Privilege,
    H: PreflightHook,
    L: DaemonLauncher,
    S: ProcessSignals,
{
    if !plan.privilege.is_superuser() {
        return Err(SupervisorError::NotPrivileged);
    }
    match arguments.first().map(String::as_str) {
        None => startup::start(&config.startup, &plan.hook, &plan.launcher),
        // Any tokens after `stop` are deliberately ignored.
        Some(STOP_COMMAND) => stop(plan, &config.paths),
        Some(_) => Err(SupervisorError::UnexpectedArgument {
            arguments: arguments.join(" "),
        }),
    }
}

fn stop<P, H, L, S>(
    plan: &SupervisorPlan<P, H, L, S>,
    paths: &ArtifactPaths,
) -> Result<(), SupervisorError>
where
    S: ProcessSignals,
{
    let siblings = plan.table.find_siblings()?;
    info!(
        target: SUPERVISOR_TARGET,
        count = siblings.len(),
        "terminating sibling supervisors"
    );
    escalate::terminate_all(&plan.signals, &siblings, plan.grace);
    reclaim::reclaim(paths)
}
