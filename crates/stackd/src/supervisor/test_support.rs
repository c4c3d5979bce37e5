//! Shared test doubles for the supervisor test modules.

use std::cell::RefCell;
use std::collections::HashSet;
use std::io;
use std::time::{Duration, Instant};

use super::entry::Privilege;
use super::escalate::ProcessSignals;
use super::hook::{HookError, PreflightHook};
use super::launch::DaemonLauncher;

/// Privilege probe with a fixed answer.
pub(super) struct StaticPrivilege(pub(super) bool);

impl Privilege for StaticPrivilege {
    fn is_superuser(&self) -> bool {
        self.0
    }
}

/// Hook that always fails with a fixed message.
pub(super) struct FailingHook;

impl PreflightHook for FailingHook {
    fn run(&self) -> Result<(), HookError> {
        Err("switch reset failed".into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct LaunchRecord {
    pub(super) name: String,
    pub(super) arguments: Vec<String>,
    pub(super) environment: Vec<(String, String)>,
}

/// Launcher that records successful handoffs and can fail on one name.
#[derive(Debug, Default)]
pub(super) struct RecordingLauncher {
    pub(super) launches: RefCell<Vec<LaunchRecord>>,
    fail_on: Option<String>,
}

impl RecordingLauncher {
    pub(super) fn failing_on(name: &str) -> Self {
        Self {
            launches: RefCell::default(),
            fail_on: Some(name.to_owned()),
        }
    }

    pub(super) fn names(&self) -> Vec<String> {
        self.launches
            .borrow()
            .iter()
            .map(|record| record.name.clone())
            .collect()
    }

    pub(super) fn arguments_for(&self, name: &str) -> Option<Vec<String>> {
        self.launches
            .borrow()
            .iter()
            .find(|record| record.name == name)
            .map(|record| record.arguments.clone())
    }
}

impl DaemonLauncher for RecordingLauncher {
    fn launch(
        &self,
        name: &str,
        arguments: &[String],
        environment: &[(String, String)],
    ) -> io::Result<()> {
        if self.fail_on.as_deref() == Some(name) {
            return Err(io::Error::other("launch refused by test double"));
        }
        self.launches.borrow_mut().push(LaunchRecord {
            name: name.to_owned(),
            arguments: arguments.to_vec(),
            environment: environment.to_vec(),
        });
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum SignalKind {
    Terminate,
    Kill,
}

#[derive(Debug, Clone)]
pub(super) struct SignalEvent {
    pub(super) pid: u32,
    pub(super) kind: SignalKind,
    /// Elapsed time since the double was built.
    pub(super) at: Duration,
}

/// Signal backend with scripted liveness.
///
/// Pids listed in `dies_on_terminate` leave the alive set as soon as they
/// receive the graceful signal, simulating a process that exits during the
/// grace window.
pub(super) struct ScriptedSignals {
    alive: RefCell<HashSet<u32>>,
    dies_on_terminate: HashSet<u32>,
    pub(super) events: RefCell<Vec<SignalEvent>>,
    started: Instant,
}

impl ScriptedSignals {
    pub(super) fn new(alive: &[u32], dies_on_terminate: &[u32]) -> Self {
        Self {
            alive: RefCell::new(alive.iter().copied().collect()),
            dies_on_terminate: dies_on_terminate.iter().copied().collect(),
            events: RefCell::default(),
            started: Instant::now(),
        }
    }

    pub(super) fn events_of(&self, kind: SignalKind) -> Vec<SignalEvent> {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.kind == kind)
            .cloned()
            .collect()
    }

    fn record(&self, pid: u32, kind: SignalKind) {
        self.events.borrow_mut().push(SignalEvent {
            pid,
            kind,
            at: self.started.elapsed(),
        });
    }
}

impl ProcessSignals for ScriptedSignals {
    fn is_alive(&self, pid: u32) -> bool {
        self.alive.borrow().contains(&pid)
    }

    fn terminate(&self, pid: u32) {
        self.record(pid, SignalKind::Terminate);
        if self.dies_on_terminate.contains(&pid) {
            self.alive.borrow_mut().remove(&pid);
        }
    }

    fn kill(&self, pid: u32) {
        self.record(pid, SignalKind::Kill);
        self.alive.borrow_mut().remove(&pid);
    }
}
