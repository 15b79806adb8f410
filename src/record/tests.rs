//! Tests for the record store.

use super::*;
use crate::error::SupervisorError;
use std::fs;
use tempfile::TempDir;

fn file_store() -> (TempDir, FileRecordStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = FileRecordStore::new(temp_dir.path().join("trade.pid"));
    (temp_dir, store)
}

#[test]
fn test_parse_pid_accepts_positive_integers() {
    assert_eq!(parse_pid("1234"), Some(1234));
    assert_eq!(parse_pid("  987\n"), Some(987));
    assert_eq!(parse_pid("1\r\n"), Some(1));
}

#[test]
fn test_parse_pid_rejects_invalid_content() {
    assert_eq!(parse_pid(""), None);
    assert_eq!(parse_pid("0"), None);
    assert_eq!(parse_pid("-5"), None);
    assert_eq!(parse_pid("12abc"), None);
    assert_eq!(parse_pid("12 34"), None);
    assert_eq!(parse_pid("4294967295"), None);
}

#[test]
fn test_format_pid_is_single_line() {
    assert_eq!(format_pid(4242), "4242\n");
}

#[test]
fn test_read_missing_record_is_none() {
    let (_temp_dir, store) = file_store();
    assert_eq!(store.read().unwrap(), None);
}

#[test]
fn test_write_then_read() {
    let (_temp_dir, store) = file_store();

    store.write(31337).unwrap();

    assert_eq!(store.read().unwrap(), Some(31337));
    assert_eq!(fs::read_to_string(store.location()).unwrap(), "31337\n");
}

#[test]
fn test_write_overwrites_prior_value() {
    let (_temp_dir, store) = file_store();

    store.write(100).unwrap();
    store.write(200).unwrap();

    assert_eq!(store.read().unwrap(), Some(200));
}

#[test]
fn test_read_tolerates_hand_written_record() {
    let (_temp_dir, store) = file_store();
    fs::write(store.location(), "  555  ").unwrap();

    assert_eq!(store.read().unwrap(), Some(555));
}

#[test]
fn test_read_corrupt_record_is_error() {
    let (_temp_dir, store) = file_store();
    fs::write(store.location(), "not-a-pid\n").unwrap();

    match store.read() {
        Err(SupervisorError::CorruptRecord { content, .. }) => {
            assert_eq!(content, "not-a-pid");
        }
        other => panic!("expected CorruptRecord, got {:?}", other),
    }

    // The record is left for the user to inspect.
    assert!(store.location().exists());
}

#[test]
fn test_delete_removes_record() {
    let (_temp_dir, store) = file_store();
    store.write(9).unwrap();

    store.delete().unwrap();

    assert!(!store.location().exists());
    assert_eq!(store.read().unwrap(), None);
}

#[test]
fn test_delete_missing_record_is_noop() {
    let (_temp_dir, store) = file_store();
    store.delete().unwrap();
    store.delete().unwrap();
}

#[test]
fn test_two_stores_last_writer_wins() {
    let (_temp_dir, first) = file_store();
    let second = FileRecordStore::new(first.location());

    first.write(1000).unwrap();
    second.write(2000).unwrap();

    assert_eq!(first.read().unwrap(), Some(2000));
    assert_eq!(second.read().unwrap(), Some(2000));
}

#[test]
fn test_memory_store_tracks_mutations() {
    let store = MemoryRecordStore::new();
    assert_eq!(store.read().unwrap(), None);

    store.write(10).unwrap();
    store.write(11).unwrap();
    store.delete().unwrap();

    assert_eq!(store.current(), None);
    assert_eq!(store.writes(), vec![10, 11]);
    assert_eq!(store.deletes(), 1);
}
