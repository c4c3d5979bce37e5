//! Hands daemons off to the operating system.

use std::io;
use std::process::{Command, Stdio};

use tracing::info;

use super::SUPERVISOR_TARGET;

/// Abstraction over the daemon launch mechanism.
pub trait DaemonLauncher {
    /// Launches one daemon and returns once the handoff completes.
    ///
    /// Launch is synchronous only up to the spawn: the launcher never waits
    /// for the daemon to become ready.
    ///
    /// # Errors
    ///
    /// Returns the underlying spawn error when the handoff fails.
    fn launch(
        &self,
        name: &str,
        arguments: &[String],
        environment: &[(String, String)],
    ) -> io::Result<()>;
}

/// Launcher that spawns daemons as detached child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl SystemLauncher {
    /// Builds a new system launcher.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DaemonLauncher for SystemLauncher {
    fn launch(
        &self,
        name: &str,
        arguments: &[String],
        environment: &[(String, String)],
    ) -> io::Result<()> {
        let mut command = Command::new(name);
        command
            .args(arguments)
            .envs(environment.iter().map(|(key, value)| (key, value)))
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        // The child is not reaped here: daemons outlive the supervisor and
        // are reparented once this process exits.
        let child = command.spawn()?;
        info!(
            target: SUPERVISOR_TARGET,
            name,
            pid = child.id(),
            "daemon launched"
        );
        Ok(())
    }
}
