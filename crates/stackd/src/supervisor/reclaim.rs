//! Clears the shared socket-file and pid-file namespaces.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use stack_config::ArtifactPaths;

use super::SUPERVISOR_TARGET;
use super::errors::SupervisorError;

/// Removes every artifact left behind by any daemon instance.
///
/// Unconditional and idempotent: artifacts are removed whether or not a
/// living process still references them, and a missing directory counts as
/// already clean. A filesystem error is surfaced without rolling back
/// artifacts already removed.
pub(super) fn reclaim(paths: &ArtifactPaths) -> Result<(), SupervisorError> {
    clear_directory(paths.socks_dir())?;
    clear_directory(paths.pids_dir())
}

fn clear_directory(dir: &Path) -> Result<(), SupervisorError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(source) => {
            return Err(SupervisorError::Reclaim {
                path: dir.to_path_buf(),
                source,
            });
        }
    };
    for entry in entries {
        let entry = entry.map_err(|source| SupervisorError::Reclaim {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let is_dir = entry.file_type().is_ok_and(|kind| kind.is_dir());
        let removal = if is_dir {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        match removal {
            Ok(()) => debug!(
                target: SUPERVISOR_TARGET,
                file = %path.display(),
                "artifact removed"
            ),
            Err(error) if error.kind() == io::ErrorKind::NotFound => {}
            Err(source) => return Err(SupervisorError::Reclaim { path, source }),
        }
    }
    Ok(())
}
