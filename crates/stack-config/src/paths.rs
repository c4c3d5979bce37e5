//! Locates the shared runtime artifact namespaces.
//!
//! Every daemon in the stack writes its listening socket and pid file into a
//! well-known directory under [`RUN_DIR`](crate::RUN_DIR). The supervisor and
//! the daemons need to agree on the layout so a `stop` invocation can clear
//! artifacts left behind by any of them, alive or dead.

use std::path::{Path, PathBuf};

use crate::defaults::RUN_DIR;

/// Directories holding the socket files and pid files written by daemons.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    socks_dir: PathBuf,
    pids_dir: PathBuf,
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self::under(RUN_DIR)
    }
}

impl ArtifactPaths {
    /// Derives the artifact directories beneath an alternative root.
    ///
    /// Production uses the [`Default`] layout under `/run/stackd`; tests
    /// relocate the namespaces into a scratch directory.
    #[must_use]
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            socks_dir: root.join("socks"),
            pids_dir: root.join("pids"),
        }
    }

    /// Directory holding daemon socket files.
    #[must_use]
    pub fn socks_dir(&self) -> &Path {
        self.socks_dir.as_path()
    }

    /// Directory holding daemon pid files.
    #[must_use]
    pub fn pids_dir(&self) -> &Path {
        self.pids_dir.as_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_live_under_run_dir() {
        let paths = ArtifactPaths::default();
        assert_eq!(paths.socks_dir(), Path::new("/run/stackd/socks"));
        assert_eq!(paths.pids_dir(), Path::new("/run/stackd/pids"));
    }

    #[test]
    fn relocated_paths_share_the_given_root() {
        let paths = ArtifactPaths::under("/tmp/scratch");
        assert_eq!(paths.socks_dir(), Path::new("/tmp/scratch/socks"));
        assert_eq!(paths.pids_dir(), Path::new("/tmp/scratch/pids"));
    }
}
