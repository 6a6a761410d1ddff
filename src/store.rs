//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Store handles in
//! `crate::stores` read and write these fields through the helpers below.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{Project, User};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Authenticated user, mirrored to durable storage
    pub session_user: Option<User>,
    /// Last fetched user list (all users or search results)
    pub users: Vec<User>,
    /// User shown on the details page
    pub current_user: Option<User>,
    /// Last fetched project list
    pub projects: Vec<Project>,
    /// Project shown on the details/edit/task pages
    pub current_project: Option<Project>,
    /// Dark theme enabled
    pub is_dark: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

pub fn new_app_store() -> AppStore {
    Store::new(AppState::default())
}

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Session
// ========================

pub fn store_session_user(store: &AppStore) -> Option<User> {
    store.session_user().get_untracked()
}

pub fn store_set_session_user(store: &AppStore, user: Option<User>) {
    *store.session_user().write() = user;
}

/// Reactive read, for views and memos
pub fn track_session_user(store: &AppStore) -> Option<User> {
    store.session_user().get()
}

// ========================
// Users
// ========================

pub fn store_set_users(store: &AppStore, users: Vec<User>) {
    *store.users().write() = users;
}

#[cfg(test)]
pub fn store_users(store: &AppStore) -> Vec<User> {
    store.users().get_untracked()
}

pub fn track_users(store: &AppStore) -> Vec<User> {
    store.users().get()
}

/// Remove a user from the list by ID
pub fn store_remove_user(store: &AppStore, user_id: u32) {
    store.users().write().retain(|user| user.id != user_id);
}

pub fn store_set_current_user(store: &AppStore, user: Option<User>) {
    *store.current_user().write() = user;
}

#[cfg(test)]
pub fn store_current_user(store: &AppStore) -> Option<User> {
    store.current_user().get_untracked()
}

pub fn track_current_user(store: &AppStore) -> Option<User> {
    store.current_user().get()
}

// ========================
// Projects
// ========================

pub fn store_set_projects(store: &AppStore, projects: Vec<Project>) {
    *store.projects().write() = projects;
}

#[cfg(test)]
pub fn store_projects(store: &AppStore) -> Vec<Project> {
    store.projects().get_untracked()
}

pub fn track_projects(store: &AppStore) -> Vec<Project> {
    store.projects().get()
}

/// Remove a project from the list by ID
pub fn store_remove_project(store: &AppStore, project_id: u32) {
    store.projects().write().retain(|project| project.id != project_id);
}

pub fn store_set_current_project(store: &AppStore, project: Option<Project>) {
    *store.current_project().write() = project;
}

pub fn store_current_project(store: &AppStore) -> Option<Project> {
    store.current_project().get_untracked()
}

pub fn track_current_project(store: &AppStore) -> Option<Project> {
    store.current_project().get()
}

// ========================
// Theme
// ========================

pub fn store_is_dark(store: &AppStore) -> bool {
    store.is_dark().get_untracked()
}

pub fn store_set_dark(store: &AppStore, dark: bool) {
    *store.is_dark().write() = dark;
}

pub fn track_is_dark(store: &AppStore) -> bool {
    store.is_dark().get()
}
