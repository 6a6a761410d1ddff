//! Application Context
//!
//! Store handles shared with every view via the Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;
use log::info;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::storage::SharedStorage;
use crate::store::AppStore;
use crate::stores::{BrowserRoot, ProjectsStore, SessionStore, ThemeStore, UsersStore};

/// App-wide store handles provided via context
#[derive(Clone)]
pub struct AppContext {
    pub session: SessionStore,
    pub projects: ProjectsStore,
    pub users: UsersStore,
    pub theme: ThemeStore,
}

impl AppContext {
    pub fn new(config: &AppConfig, state: AppStore, storage: SharedStorage) -> Self {
        let api = ApiClient::new(config.api_base_url.clone());
        info!("[API] Using backend at {}", api.base_url());
        let session = SessionStore::new(state, api.clone(), storage.clone());
        let projects = ProjectsStore::new(state, api.clone(), session.clone());
        let users = UsersStore::new(state, api);
        let theme = ThemeStore::init(
            state,
            storage,
            Arc::new(BrowserRoot),
            BrowserRoot::prefers_dark(),
        );
        Self {
            session,
            projects,
            users,
            theme,
        }
    }
}

/// Get the app context (panics outside `App`)
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
