use ringbook_store::error::StoreErrorKind;
use ringbook_store::kv::ByteStore;
use ringbook_store::Store;
use tempfile::TempDir;

fn store() -> Store {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");
    store
}

#[test]
fn get_missing_key_is_none() {
    let store = store();
    assert!(store.get("nothing").expect("get").is_none());
}

#[test]
fn set_overwrites_previous_value() {
    let store = store();
    store.set("k", b"first").expect("set");
    store.set("k", b"second").expect("overwrite");
    assert_eq!(store.get("k").expect("get").as_deref(), Some(&b"second"[..]));
}

#[test]
fn over_quota_write_fails_and_keeps_old_value() {
    let store = store().with_quota(Some(8));
    store.set("k", b"small").expect("set");
    let err = store.set("k", b"much too large").unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::QuotaExceeded);
    assert_eq!(store.get("k").expect("get").as_deref(), Some(&b"small"[..]));
}

#[test]
fn remove_reports_whether_key_existed() {
    let store = store();
    store.set("k", b"v").expect("set");
    assert!(store.remove("k").expect("remove"));
    assert!(!store.remove("k").expect("remove again"));
}

#[test]
fn values_survive_reopen() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("nested").join("ringbook.sqlite3");
    {
        let store = Store::open(&path).expect("open");
        store.migrate().expect("migrate");
        store.set("k", b"persisted").expect("set");
    }
    let store = Store::open(&path).expect("reopen");
    store.migrate().expect("migrate");
    assert_eq!(
        store.get("k").expect("get").as_deref(),
        Some(&b"persisted"[..])
    );
}
