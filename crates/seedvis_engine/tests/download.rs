use std::fs;

use seedvis_engine::{ensure_download_dir, DirectoryDownloadSink, DownloadSink};
use tempfile::TempDir;

#[test]
fn creates_missing_download_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("downloads");
    assert!(!new_dir.exists());
    ensure_download_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn delivery_writes_file_and_leaves_no_temp_behind() {
    let temp = TempDir::new().unwrap();
    let sink = DirectoryDownloadSink::new(temp.path().to_path_buf());

    let path = sink.deliver("input_3.zip", b"PK-bytes").unwrap();
    assert_eq!(path.file_name().unwrap(), "input_3.zip");
    assert_eq!(fs::read(&path).unwrap(), b"PK-bytes");

    let names: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec!["input_3.zip"]);
}

#[test]
fn delivery_replaces_previous_download() {
    let temp = TempDir::new().unwrap();
    let sink = DirectoryDownloadSink::new(temp.path().to_path_buf());

    let first = sink.deliver("input_0.zip", b"old").unwrap();
    let second = sink.deliver("input_0.zip", b"new").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read(&second).unwrap(), b"new");
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
}

#[test]
fn no_download_when_target_is_not_a_directory() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let sink = DirectoryDownloadSink::new(file_path.clone());
    assert!(sink.deliver("input_0.zip", b"data").is_err());
    assert!(!file_path.with_file_name("input_0.zip").exists());
}
