#![allow(dead_code)]

use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use atm_ledger::{LedgerSession, TextFileStore};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Returns a fresh directory that outlives the calling test.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn store_path(base: &Path) -> PathBuf {
    base.join("users.txt")
}

/// Opens a session over a freshly seeded store in its own directory.
pub fn seeded_session() -> (LedgerSession, PathBuf) {
    let path = store_path(&temp_base());
    let session =
        LedgerSession::open(Box::new(TextFileStore::new(&path))).expect("open seeded session");
    (session, path)
}

pub fn store_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("read store")
        .lines()
        .map(str::to_string)
        .collect()
}
