//! Store Handles
//!
//! Each handle wraps the shared `AppStore` plus whatever it needs to talk to
//! the outside world (API client, durable storage, document root).

mod projects;
mod session;
mod theme;
mod users;

pub use projects::ProjectsStore;
pub use session::SessionStore;
pub use theme::{BrowserRoot, ThemeStore};
pub use users::UsersStore;
