use cv_store::*;

#[test]
fn missing_file_opens_empty() {
    let path = std::env::temp_dir().join("cv_store_missing.json");
    let _ = std::fs::remove_file(&path);

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get("calc_vars").unwrap(), None);
    assert!(!path.exists());
}

#[test]
fn commit_persists_across_reopen() {
    let temp_dir = std::env::temp_dir().join("cv_store_reopen");
    let _ = std::fs::remove_dir_all(&temp_dir);
    let path = temp_dir.join("prefs.json");

    let mut store = FileStore::open(&path).unwrap();
    store.put("calc_vars", "{}".to_string()).unwrap();
    store.put("other", "1".to_string()).unwrap();
    assert_eq!(store.get("calc_vars").unwrap(), None);
    store.commit().unwrap();

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get("calc_vars").unwrap().as_deref(), Some("{}"));
    assert_eq!(reopened.get("other").unwrap().as_deref(), Some("1"));
    assert!(!temp_dir.join("prefs.json.tmp").exists());
}

#[test]
fn uncommitted_puts_are_not_persisted() {
    let path = std::env::temp_dir().join("cv_store_uncommitted.json");
    let _ = std::fs::remove_file(&path);

    let mut store = FileStore::open(&path).unwrap();
    store.put("k", "v".to_string()).unwrap();
    drop(store);

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get("k").unwrap(), None);
}

#[test]
fn corrupt_file_is_rejected() {
    let path = std::env::temp_dir().join("cv_store_corrupt.json");
    std::fs::write(&path, "not json").unwrap();

    let err = FileStore::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::Json(_)));
}

#[test]
fn path_without_file_name_is_rejected() {
    let err = FileStore::open("").unwrap_err();
    assert!(matches!(err, StoreError::InvalidPath { .. }));

    let err = FileStore::open(std::env::temp_dir().join("..")).unwrap_err();
    assert!(matches!(err, StoreError::InvalidPath { .. }));
}

#[test]
fn failed_commit_removes_temp_file() {
    let temp_dir = std::env::temp_dir().join("cv_store_failed_rename");
    let _ = std::fs::remove_dir_all(&temp_dir);
    let path = temp_dir.join("prefs.json");
    let mut store = FileStore::open(&path).unwrap();

    // A non-empty directory at the target path makes the rename fail.
    std::fs::create_dir_all(path.join("blocker")).unwrap();
    assert_eq!(store.path(), path.as_path());
    store.put("k", "v".to_string()).unwrap();
    assert!(store.commit().is_err());

    assert!(!temp_dir.join("prefs.json.tmp").exists());
    assert_eq!(store.get("k").unwrap(), None);
}
