mod common;

use std::fs;

use atm_ledger::{Account, AccountStore, TextFileStore};
use common::{store_lines, store_path, temp_base};

#[test]
fn empty_store_is_seeded_with_fifty_accounts() {
    let path = store_path(&temp_base());
    fs::write(&path, "").unwrap();
    let store = TextFileStore::new(&path);

    assert!(store.ensure_initialized().expect("seed"));

    let lines = store_lines(&path);
    assert_eq!(lines.len(), 50);
    assert_eq!(lines[0], "User1,1001,5073");
    assert_eq!(lines[49], "User50,1050,8650");
    assert!(fs::read_to_string(&path).unwrap().ends_with("8650\n"));
}

#[test]
fn missing_store_is_created_with_parent_dirs() {
    let path = temp_base().join("data").join("users.txt");
    let store = TextFileStore::new(&path);
    assert!(store.ensure_initialized().expect("seed"));
    assert_eq!(store.load_all().expect("load").len(), 50);
}

#[test]
fn existing_store_is_left_untouched() {
    let path = store_path(&temp_base());
    fs::write(&path, "Solo,4321,12\n").unwrap();
    let store = TextFileStore::new(&path);

    assert!(!store.ensure_initialized().expect("init"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "Solo,4321,12\n");
}

#[test]
fn malformed_lines_are_skipped_silently() {
    let path = store_path(&temp_base());
    fs::write(
        &path,
        "Alice,1111,100\n\
         \n\
         broken line\n\
         Bob,2222\n\
         Carol,3333,30,extra\n\
         Dave,4444,lots\n\
         \x20 Erin,5555,55  \n",
    )
    .unwrap();

    let accounts = TextFileStore::new(&path).load_all().expect("load");
    let names: Vec<&str> = accounts.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Erin"]);
    assert_eq!(accounts[1].balance, 55);
}

#[test]
fn non_utf8_lines_are_skipped_like_other_malformed_lines() {
    let path = store_path(&temp_base());
    fs::write(&path, b"Alice,1111,100\nBo\xffb,2222,50\nCarol,3333,30\n").unwrap();

    let accounts = TextFileStore::new(&path).load_all().expect("load");
    let names: Vec<&str> = accounts.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Carol"]);
}

#[test]
fn padded_or_signed_balances_survive_a_save() {
    let path = store_path(&temp_base());
    fs::write(&path, "Alice,1111, 100 \nBob,2222,+50\n").unwrap();
    let store = TextFileStore::new(&path);

    let accounts = store.load_all().expect("load");
    store.save_all(&accounts).expect("save");
    assert_eq!(store_lines(&path), vec!["Alice,1111,100", "Bob,2222,50"]);
}

#[test]
fn unreadable_store_is_an_io_error() {
    let path = store_path(&temp_base());
    let err = TextFileStore::new(&path).load_all().expect_err("no file");
    assert!(err.is_fatal());
}

#[test]
fn save_then_load_preserves_records_and_drops_history() {
    let path = store_path(&temp_base());
    let store = TextFileStore::new(&path);
    let mut accounts = vec![
        Account::new("Zed", "9999", 1),
        Account::new("Amy", "0001", 0),
        Account::new("Max", "5050", 123456),
    ];
    accounts[0].record("Deposit +1");

    store.save_all(&accounts).expect("save");
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Zed,9999,1\nAmy,0001,0\nMax,5050,123456\n"
    );

    let reloaded = store.load_all().expect("load");
    assert_eq!(reloaded.len(), 3);
    for (before, after) in accounts.iter().zip(&reloaded) {
        assert_eq!(before.to_record(), after.to_record());
        assert!(after.history.is_empty());
    }
}

#[test]
fn save_replaces_rather_than_appends() {
    let path = store_path(&temp_base());
    let store = TextFileStore::new(&path);
    store.ensure_initialized().expect("seed");
    store
        .save_all(&[Account::new("Only", "1234", 7)])
        .expect("save");
    assert_eq!(store_lines(&path), vec!["Only,1234,7"]);
}
