//! Session Store
//!
//! Holds the authenticated user and mirrors it to durable storage under the
//! `user` key so the session survives a reload.

use log::{error, info, warn};

use crate::api::{ApiClient, ApiError, ApiResult};
use crate::models::{NewUser, User};
use crate::storage::{load_json, save_json, SharedStorage, StorageResult, USER_KEY};
use crate::store::{store_session_user, store_set_session_user, AppStore};

#[derive(Clone)]
pub struct SessionStore {
    state: AppStore,
    api: ApiClient,
    storage: SharedStorage,
}

impl SessionStore {
    pub fn new(state: AppStore, api: ApiClient, storage: SharedStorage) -> Self {
        Self {
            state,
            api,
            storage,
        }
    }

    /// Log in; failures are logged and reported as `false`
    pub async fn login(&self, nickname: &str, password: &str) -> bool {
        match self.api.login(nickname, password).await {
            Ok(user) => {
                info!("[SESSION] Logged in as {} (#{})", user.nickname, user.id);
                self.establish(user);
                true
            }
            Err(e) => {
                error!("[SESSION] Login error: {}", e);
                false
            }
        }
    }

    /// Register and log in as the new user; failures are logged and reported as `false`
    pub async fn register(&self, new_user: &NewUser) -> bool {
        match self.api.create_user(new_user).await {
            Ok(user) => {
                info!("[SESSION] Registered {} (#{})", user.nickname, user.id);
                self.establish(user);
                true
            }
            Err(e) => {
                error!("[SESSION] Registration error: {}", e);
                false
            }
        }
    }

    pub fn logout(&self) {
        store_set_session_user(&self.state, None);
        if let Err(e) = self.storage.remove_item(USER_KEY) {
            warn!("[SESSION] Failed to clear stored session: {}", e);
        }
    }

    /// Re-hydrate from durable storage. Empty storage leaves memory as is.
    pub fn load_from_storage(&self) -> StorageResult<()> {
        if let Some(user) = load_json::<User>(self.storage.as_ref(), USER_KEY)? {
            if store_session_user(&self.state).as_ref() != Some(&user) {
                store_set_session_user(&self.state, Some(user));
            }
        }
        Ok(())
    }

    /// Replace the session user's profile locally; the id must not change
    pub fn update_profile(&self, user: User) -> ApiResult<()> {
        match self.user_id() {
            Some(id) if id == user.id => {
                self.establish(user);
                Ok(())
            }
            _ => Err(ApiError::NotAuthenticated),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        store_session_user(&self.state).is_some()
    }

    pub fn user_id(&self) -> Option<u32> {
        store_session_user(&self.state).map(|user| user.id)
    }

    pub fn current_user(&self) -> Option<User> {
        store_session_user(&self.state)
    }

    fn establish(&self, user: User) {
        if let Err(e) = save_json(self.storage.as_ref(), USER_KEY, &user) {
            warn!("[SESSION] Failed to persist session: {}", e);
        }
        store_set_session_user(&self.state, Some(user));
    }
}
