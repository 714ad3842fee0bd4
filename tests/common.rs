#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtrainwatch::{EventStore, NewEvent};
use tempfile::TempDir;

/// Binary under test, with HOME pointed at `home` so no real config is read.
pub fn rti(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("rtrainwatch");
    cmd.env("HOME", home.path()).env("APPDATA", home.path());
    cmd
}

/// Fresh temp dir plus the path of a database file inside it.
pub fn setup_test_db(name: &str) -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db_path = dir
        .path()
        .join(format!("{}_rtrainwatch.sqlite", name))
        .to_string_lossy()
        .to_string();
    (dir, db_path)
}

/// Initialize the DB through the CLI.
pub fn init_db(home: &TempDir, db_path: &str) {
    rti(home)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn new_event(location: &str, end: &str) -> NewEvent {
    NewEvent::new(location, "Ana", "09:00", end)
}

/// Store with a small dataset created through the library API.
pub fn store_with(events: &[(&str, &str)]) -> EventStore {
    let store = EventStore::open_in_memory().expect("open store");
    for (loc, end) in events {
        store.create(&new_event(loc, end)).expect("create event");
    }
    store
}
