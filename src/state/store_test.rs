use super::*;
use crate::net::types::ProfileUpdate;
use crate::util::storage::{MemoryStorage, StorageError};

fn bob() -> User {
    User { id: 5, name: "Bob".into(), email: "bob@example.com".into(), phone: None }
}

fn memory() -> Arc<dyn KeyValueStore> {
    Arc::new(MemoryStorage::new())
}

struct ReadOnlyStorage;

impl KeyValueStore for ReadOnlyStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[test]
fn open_empty_storage_starts_signed_out() {
    let store = SessionStore::open(memory(), "user");
    assert!(store.user().is_none());
    assert!(!store.is_authenticated());
}

#[test]
fn dispatch_persists_every_transition() {
    let storage = memory();
    let mut store = SessionStore::open(Arc::clone(&storage), "user");

    store.dispatch(SessionAction::LoginSuccess(bob()));
    let raw = storage.get("user").unwrap();
    let persisted: SessionState = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted.user, Some(bob()));

    store.dispatch(SessionAction::Logout);
    assert_eq!(storage.get("user").as_deref(), Some(r#"{"user":null}"#));
}

#[test]
fn open_rehydrates_persisted_user() {
    let storage = memory();
    {
        let mut store = SessionStore::open(Arc::clone(&storage), "user");
        store.dispatch(SessionAction::LoginSuccess(bob()));
    }
    let store = SessionStore::open(storage, "user");
    assert_eq!(store.user(), Some(&bob()));
}

#[test]
fn open_discards_corrupt_value() {
    let storage = memory();
    storage.set("user", "{not json").unwrap();
    let store = SessionStore::open(storage, "user");
    assert_eq!(store.state(), &SessionState::default());
}

#[test]
fn update_user_without_session_stays_signed_out() {
    let mut store = SessionStore::open(memory(), "user");
    store.dispatch(SessionAction::UpdateUser(ProfileUpdate {
        name: "X".into(),
        email: "x@example.com".into(),
        phone: "1".into(),
    }));
    assert!(store.user().is_none());
}

#[test]
fn failed_write_still_advances_state() {
    let mut store = SessionStore::open(Arc::new(ReadOnlyStorage), "user");
    store.dispatch(SessionAction::LoginSuccess(bob()));
    assert_eq!(store.user(), Some(&bob()));
}
