use std::sync::{Arc, Mutex};

use crate::net::api::AuthApi;
use crate::net::types::{ApiError, ProfileUpdate, SignupRequest, User};
use crate::state::store::SessionStore;
use crate::util::storage::{KeyValueStore, MemoryStorage};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Login { email: String, password: String },
    Signup(SignupRequest),
    UpdateProfile(ProfileUpdate),
    Logout,
}

/// Records calls and answers with a fixed user, or a status error when `fail_status` is set.
pub struct MockApi {
    pub calls: Mutex<Vec<Call>>,
    pub user: User,
    pub fail_status: Option<u16>,
}

impl MockApi {
    pub fn ok(user: User) -> Self {
        Self { calls: Mutex::new(Vec::new()), user, fail_status: None }
    }

    pub fn failing(status: u16) -> Self {
        Self { calls: Mutex::new(Vec::new()), user: dummy_user(), fail_status: Some(status) }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, call: Call) -> Result<User, ApiError> {
        self.calls.lock().unwrap().push(call);
        match self.fail_status {
            Some(status) => Err(ApiError::Status { status, body: String::new() }),
            None => Ok(self.user.clone()),
        }
    }
}

#[async_trait::async_trait]
impl AuthApi for MockApi {
    async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        self.answer(Call::Login { email: email.to_owned(), password: password.to_owned() })
    }

    async fn signup(&self, payload: &SignupRequest) -> Result<User, ApiError> {
        self.answer(Call::Signup(payload.clone()))
    }

    async fn update_profile(&self, details: &ProfileUpdate) -> Result<User, ApiError> {
        self.answer(Call::UpdateProfile(details.clone()))
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.answer(Call::Logout).map(|_| ())
    }
}

pub fn dummy_user() -> User {
    User { id: 1, name: "Test User".into(), email: "test@example.com".into(), phone: None }
}

pub fn empty_store() -> SessionStore {
    let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStorage::new());
    SessionStore::open(storage, "user")
}

pub fn signed_in_store(user: User) -> SessionStore {
    let mut store = empty_store();
    store.dispatch(crate::state::session::SessionAction::LoginSuccess(user));
    store
}
