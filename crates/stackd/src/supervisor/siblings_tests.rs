//! Tests for sibling discovery over a fabricated process table.

use std::fs;
use std::os::unix::fs::symlink;
use std::path::Path;

use tempfile::TempDir;

use super::errors::SupervisorError;
use super::siblings::ProcessTable;

const OWN_IMAGE: &str = "/usr/sbin/stackd";

/// Lays out a `/proc`-shaped tree: numeric directories with `exe` links.
fn fake_proc(dir: &TempDir, entries: &[(&str, Option<&str>)]) -> ProcessTable {
    for (name, image) in entries {
        let entry = dir.path().join(name);
        fs::create_dir(&entry).expect("create proc entry");
        if let Some(image) = image {
            symlink(image, entry.join("exe")).expect("link exe");
        }
    }
    ProcessTable::with_root(dir.path())
}

fn siblings_of(table: &ProcessTable, own_pid: u32) -> Vec<u32> {
    let mut pids = table
        .matching_processes(Path::new(OWN_IMAGE), own_pid)
        .expect("scan succeeds");
    pids.sort_unstable();
    pids
}

#[test]
fn keeps_only_processes_sharing_the_image() {
    let dir = TempDir::new().expect("temp dir");
    let table = fake_proc(
        &dir,
        &[
            ("100", Some(OWN_IMAGE)),
            ("101", Some(OWN_IMAGE)),
            ("102", Some("/usr/bin/redisd")),
        ],
    );
    assert_eq!(siblings_of(&table, 100), [101]);
}

#[test]
fn never_includes_the_calling_process() {
    let dir = TempDir::new().expect("temp dir");
    let table = fake_proc(&dir, &[("100", Some(OWN_IMAGE))]);
    assert!(siblings_of(&table, 100).is_empty());
}

#[test]
fn skips_entries_without_a_resolvable_image() {
    // An entry with no exe link models a process that exited mid-scan.
    let dir = TempDir::new().expect("temp dir");
    let table = fake_proc(&dir, &[("100", None), ("101", Some(OWN_IMAGE))]);
    assert_eq!(siblings_of(&table, 1), [101]);
}

#[test]
fn skips_non_numeric_entries() {
    let dir = TempDir::new().expect("temp dir");
    let table = fake_proc(&dir, &[("self", Some(OWN_IMAGE)), ("thermal", None)]);
    assert!(siblings_of(&table, 1).is_empty());
}

#[test]
fn unreadable_table_is_a_discovery_failure() {
    let table = ProcessTable::with_root("/nonexistent/proc");
    let error = table
        .matching_processes(Path::new(OWN_IMAGE), 1)
        .expect_err("enumeration fails");
    assert!(matches!(error, SupervisorError::ProcessDiscovery { .. }));
}
