//! Drives the graceful-then-forceful termination protocol.

use std::thread;
use std::time::Duration;

use nix::errno::Errno;
use nix::sys::signal::{Signal, kill};
use nix::unistd::Pid;
use tracing::{debug, info, warn};

use super::SUPERVISOR_TARGET;

/// Abstraction over liveness probes and signal delivery.
pub trait ProcessSignals {
    /// Whether the process is observably alive right now.
    fn is_alive(&self, pid: u32) -> bool;
    /// Requests a graceful exit.
    fn terminate(&self, pid: u32);
    /// Kills the process unconditionally.
    fn kill(&self, pid: u32);
}

/// Signal delivery backed by `kill(2)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSignals;

impl ProcessSignals for SystemSignals {
    fn is_alive(&self, pid: u32) -> bool {
        // EPERM still proves the pid exists; only ESRCH means gone.
        matches!(kill(Pid::from_raw(pid as i32), None), Ok(()) | Err(Errno::EPERM))
    }

    fn terminate(&self, pid: u32) {
        send(pid, Signal::SIGTERM);
    }

    fn kill(&self, pid: u32) {
        send(pid, Signal::SIGKILL);
    }
}

fn send(pid: u32, signal: Signal) {
    match kill(Pid::from_raw(pid as i32), signal) {
        // A target that died between the liveness check and the send is a
        // non-error; every liveness view is a snapshot.
        Ok(()) | Err(Errno::ESRCH) => {}
        Err(errno) => warn!(
            target: SUPERVISOR_TARGET,
            pid,
            signal = %signal,
            %errno,
            "signal delivery failed"
        ),
    }
}

/// Terminates the whole batch with one shared grace window.
///
/// Phase one sends a graceful signal to every target still alive; phase two
/// sleeps for `grace`; phase three forcefully kills any original target that
/// survived. The kill phase is fire-and-forget: the function never waits for
/// processes to exit afterwards. An empty batch returns immediately.
pub(super) fn terminate_all<S: ProcessSignals>(signals: &S, pids: &[u32], grace: Duration) {
    if pids.is_empty() {
        return;
    }
    for &pid in pids {
        if signals.is_alive(pid) {
            debug!(target: SUPERVISOR_TARGET, pid, "sending graceful termination");
            signals.terminate(pid);
        }
    }
    thread::sleep(grace);
    for &pid in pids {
        if signals.is_alive(pid) {
            info!(
                target: SUPERVISOR_TARGET,
                pid,
                ?grace,
                "survived the grace period; escalating to kill"
            );
            signals.kill(pid);
        }
    }
}
