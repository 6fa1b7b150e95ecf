use super::*;

/// Backend whose every operation fails, to exercise error paths.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("denied".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Operation("quota".into()))
    }

    fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Operation("denied".into()))
    }
}

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_get_absent_is_none() {
    assert_eq!(MemoryStore::new().get("missing").unwrap(), None);
}

#[test]
fn memory_store_clones_share_entries() {
    let a = MemoryStore::new();
    let b = a.clone();
    a.set("k", "v").unwrap();
    assert_eq!(b.get("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn memory_store_remove_absent_is_ok() {
    assert!(MemoryStore::new().remove("missing").is_ok());
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn save_then_load_returns_same_session() {
    let store = SessionStore::new(MemoryStore::new());
    let session = Session::new("alice", "tok");
    store.save(&session).unwrap();
    assert_eq!(store.load(), Some(session));
}

#[test]
fn save_overwrites_previous_record() {
    let store = SessionStore::new(MemoryStore::new());
    store.save(&Session::new("alice", "t1")).unwrap();
    store.save(&Session::new("bob", "t2")).unwrap();
    assert_eq!(store.load(), Some(Session::new("bob", "t2")));
}

#[test]
fn save_writes_json_under_session_key() {
    let backend = MemoryStore::new();
    let store = SessionStore::new(backend.clone());
    store.save(&Session::new("alice", "tok")).unwrap();
    let raw = backend.get(SESSION_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["username"], "alice");
    assert_eq!(json["token"], "tok");
}

#[test]
fn load_absent_is_none() {
    assert_eq!(SessionStore::new(MemoryStore::new()).load(), None);
}

#[test]
fn load_corrupt_record_is_none() {
    let backend = MemoryStore::new();
    backend.set(SESSION_KEY, "{not json").unwrap();
    assert_eq!(SessionStore::new(backend).load(), None);
}

#[test]
fn load_record_of_wrong_shape_is_none() {
    let backend = MemoryStore::new();
    backend.set(SESSION_KEY, r#"{"user":"alice"}"#).unwrap();
    assert_eq!(SessionStore::new(backend).load(), None);
}

#[test]
fn load_unreadable_store_is_none() {
    assert_eq!(SessionStore::new(BrokenStore).load(), None);
}

#[test]
fn clear_removes_session_and_legacy_key() {
    let backend = MemoryStore::new();
    backend.set(LEGACY_TOKEN_KEY, "old").unwrap();
    let store = SessionStore::new(backend.clone());
    store.save(&Session::new("alice", "tok")).unwrap();

    store.clear().unwrap();

    assert_eq!(backend.get(SESSION_KEY).unwrap(), None);
    assert_eq!(backend.get(LEGACY_TOKEN_KEY).unwrap(), None);
    assert_eq!(store.load(), None);
}

#[test]
fn clear_is_idempotent() {
    let store = SessionStore::new(MemoryStore::new());
    assert!(store.clear().is_ok());
    assert!(store.clear().is_ok());
}

#[test]
fn save_and_clear_surface_backend_errors() {
    let store = SessionStore::new(BrokenStore);
    assert!(matches!(store.save(&Session::new("a", "t")), Err(StoreError::Operation(_))));
    assert!(store.clear().is_err());
}
