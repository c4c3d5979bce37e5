//! Sequences the stack bring-up: hook, environment, store, config,
//! auxiliaries.
//!
//! The order is total and deterministic, and the first failure aborts the
//! remainder. Daemons launched before a failure keep running; each is
//! expected to be independently stoppable via the stop pipeline, so there is
//! no rollback.

use tracing::{debug, info};

use stack_config::{
    CONFIG_DAEMON, CONFIG_OVERRIDE_VAR, STORE_DAEMON, STORE_OVERRIDE_VAR, StartupConfig,
};

use super::SUPERVISOR_TARGET;
use super::env_file::{override_arguments, source_env_file};
use super::errors::SupervisorError;
use super::hook::PreflightHook;
use super::launch::DaemonLauncher;

/// Brings up the whole stack in the fixed order.
pub(super) fn start<H, L>(
    config: &StartupConfig,
    hook: &H,
    launcher: &L,
) -> Result<(), SupervisorError>
where
    H: PreflightHook,
    L: DaemonLauncher,
{
    hook.run()
        .map_err(|source| SupervisorError::Hook { source })?;
    let environment = source_env_file(config.env_file())?;
    if !environment.is_empty() {
        info!(
            target: SUPERVISOR_TARGET,
            file = %config.env_file().display(),
            entries = environment.len(),
            "sourced environment file"
        );
    }
    let store_arguments = override_arguments(STORE_OVERRIDE_VAR, &environment);
    launch_daemon(launcher, STORE_DAEMON, &store_arguments, &environment)?;
    let config_arguments = override_arguments(CONFIG_OVERRIDE_VAR, &environment);
    launch_daemon(launcher, CONFIG_DAEMON, &config_arguments, &environment)?;
    for spec in config.daemons() {
        if !spec.is_enabled() {
            debug!(
                target: SUPERVISOR_TARGET,
                name = spec.name(),
                priority = spec.priority(),
                "daemon registered but disabled"
            );
            continue;
        }
        launch_daemon(launcher, spec.name(), &[], &environment)?;
    }
    Ok(())
}

fn launch_daemon<L: DaemonLauncher>(
    launcher: &L,
    name: &str,
    arguments: &[String],
    environment: &[(String, String)],
) -> Result<(), SupervisorError> {
    info!(
        target: SUPERVISOR_TARGET,
        name,
        ?arguments,
        "launching daemon"
    );
    launcher
        .launch(name, arguments, environment)
        .map_err(|source| SupervisorError::DaemonLaunch {
            name: name.to_owned(),
            source,
        })
}
