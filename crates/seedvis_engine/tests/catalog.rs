use std::fs;

use pretty_assertions::assert_eq;
use seedvis_engine::{CatalogError, OutputFileStore};
use tempfile::TempDir;

fn fixture() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("b_0002.txt"), "b").unwrap();
    fs::write(temp.path().join("a_0001.txt"), "a").unwrap();
    fs::create_dir(temp.path().join("nested")).unwrap();
    fs::write(temp.path().join("nested").join("c_0003.txt"), "c").unwrap();
    temp
}

#[test]
fn directory_ingest_is_sorted_and_recursive() {
    let temp = fixture();
    let store = OutputFileStore::from_dir(temp.path()).unwrap();
    assert_eq!(store.names(), vec!["a_0001.txt", "b_0002.txt", "c_0003.txt"]);
}

#[test]
fn path_order_does_not_matter() {
    let temp = fixture();
    let a = temp.path().join("a_0001.txt");
    let b = temp.path().join("b_0002.txt");
    let forward = OutputFileStore::from_paths(vec![a.clone(), b.clone()]);
    let backward = OutputFileStore::from_paths(vec![b, a]);
    assert_eq!(forward.files(), backward.files());
}

#[test]
fn load_reads_only_requested_file() {
    let temp = fixture();
    let store = OutputFileStore::from_dir(temp.path()).unwrap();
    assert_eq!(store.load(2, "c_0003.txt").unwrap(), "c");
}

#[test]
fn load_rejects_stale_name_and_missing_index() {
    let temp = fixture();
    let store = OutputFileStore::from_dir(temp.path()).unwrap();
    assert!(matches!(
        store.load(0, "b_0002.txt"),
        Err(CatalogError::NameMismatch { index: 0, .. })
    ));
    assert!(matches!(
        store.load(9, "x.txt"),
        Err(CatalogError::NotFound { index: 9 })
    ));
}

#[test]
fn load_reports_deleted_file() {
    let temp = fixture();
    let store = OutputFileStore::from_dir(temp.path()).unwrap();
    fs::remove_file(temp.path().join("a_0001.txt")).unwrap();
    assert!(matches!(
        store.load(0, "a_0001.txt"),
        Err(CatalogError::Io { .. })
    ));
}

#[test]
fn empty_directory_gives_empty_store() {
    let temp = TempDir::new().unwrap();
    let store = OutputFileStore::from_dir(temp.path()).unwrap();
    assert!(store.is_empty());
}

#[test]
fn missing_directory_is_reported() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("gone");
    match OutputFileStore::from_dir(&missing) {
        Err(CatalogError::Walk { path, .. }) => assert_eq!(path, missing),
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn deeply_nested_files_are_found() {
    let temp = TempDir::new().unwrap();
    let deep = temp.path().join("x").join("y").join("z");
    fs::create_dir_all(&deep).unwrap();
    fs::write(deep.join("7.txt"), "deep").unwrap();
    fs::write(temp.path().join("top.txt"), "top").unwrap();

    let store = OutputFileStore::from_dir(temp.path()).unwrap();
    assert_eq!(store.names(), vec!["7.txt", "top.txt"]);
    assert_eq!(store.files()[0].path, deep.join("7.txt"));
}
