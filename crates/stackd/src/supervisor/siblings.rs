//! Discovers other running supervisor instances by executable identity.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use super::errors::SupervisorError;

/// View over the kernel's process table, normally rooted at `/proc`.
#[derive(Debug, Clone)]
pub struct ProcessTable {
    root: PathBuf,
}

impl ProcessTable {
    /// Builds a view over the system process table.
    #[must_use]
    pub fn system() -> Self {
        Self {
            root: PathBuf::from("/proc"),
        }
    }

    pub(super) fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Finds every live process launched from this supervisor's own
    /// executable image, excluding the calling process itself.
    ///
    /// The result is a best-effort snapshot: entries that vanish or cannot
    /// be resolved mid-scan are silently skipped, and ordering carries no
    /// meaning.
    ///
    /// # Errors
    ///
    /// Returns [`SupervisorError::ProcessDiscovery`] when the supervisor's
    /// own image path cannot be resolved or the table itself cannot be
    /// enumerated.
    pub fn find_siblings(&self) -> Result<Vec<u32>, SupervisorError> {
        let self_exe = self.root.join("self/exe");
        let own_exe = fs::read_link(&self_exe).map_err(|source| {
            SupervisorError::ProcessDiscovery {
                path: self_exe,
                source,
            }
        })?;
        self.matching_processes(&own_exe, process::id())
    }

    pub(super) fn matching_processes(
        &self,
        own_exe: &Path,
        own_pid: u32,
    ) -> Result<Vec<u32>, SupervisorError> {
        let entries =
            fs::read_dir(&self.root).map_err(|source| SupervisorError::ProcessDiscovery {
                path: self.root.clone(),
                source,
            })?;
        let mut pids = Vec::new();
        for entry in entries {
            let Ok(entry) = entry else { continue };
            let Some(pid) = entry
                .file_name()
                .to_str()
                .and_then(|name| name.parse::<u32>().ok())
            else {
                continue;
            };
            if pid == own_pid {
                continue;
            }
            // A process that exited mid-scan leaves an unreadable link;
            // that is a skip, not an error.
            let Ok(exe) = fs::read_link(entry.path().join("exe")) else {
                continue;
            };
            if exe == own_exe {
                pids.push(pid);
            }
        }
        Ok(pids)
    }
}
