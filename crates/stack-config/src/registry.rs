//! The auxiliary-daemon registry consumed by the startup sequencer.
//!
//! The registry is an explicit, ordered value handed to the supervisor at
//! call time. Launch order among auxiliaries is registration order, never a
//! sort of the priority values; a negative priority marks a daemon that is
//! registered but must never be launched.

use std::path::{Path, PathBuf};

use crate::defaults::ENV_FILE;

/// One auxiliary daemon the supervisor may launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaemonSpec {
    name: String,
    priority: i32,
}

impl DaemonSpec {
    /// Builds a registry entry.
    #[must_use]
    pub fn new(name: impl Into<String>, priority: i32) -> Self {
        Self {
            name: name.into(),
            priority,
        }
    }

    /// Daemon binary name, resolved via `PATH` at launch time.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registration priority; negative means disabled.
    #[must_use]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Whether the startup sequencer should launch this entry.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.priority >= 0
    }
}

/// Inputs to one startup-sequencer invocation.
#[derive(Debug, Clone)]
pub struct StartupConfig {
    env_file: PathBuf,
    daemons: Vec<DaemonSpec>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(ENV_FILE),
            daemons: Vec::new(),
        }
    }
}

impl StartupConfig {
    /// Builds an empty registry reading the default environment file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the external environment-file path.
    #[must_use]
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = path.into();
        self
    }

    /// Appends a daemon to the registry, preserving registration order.
    #[must_use]
    pub fn with_daemon(mut self, name: impl Into<String>, priority: i32) -> Self {
        self.daemons.push(DaemonSpec::new(name, priority));
        self
    }

    /// Path of the environment file sourced before any launch.
    #[must_use]
    pub fn env_file(&self) -> &Path {
        self.env_file.as_path()
    }

    /// Registered auxiliary daemons in registration order.
    #[must_use]
    pub fn daemons(&self) -> &[DaemonSpec] {
        &self.daemons
    }
}
