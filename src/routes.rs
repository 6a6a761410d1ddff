//! Route Table and Navigation Guard
//!
//! Paths are parsed into `AppRoute` values; `guard` decides whether a
//! navigation may proceed or must be redirected to the login page.

use log::{debug, error};

use crate::stores::SessionStore;

pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Root,
    Login,
    Register,
    Main,
    Users,
    UserDetails { id: u32 },
    Profile,
    ProfileEdit,
    MyProjects,
    Projects,
    ProjectNew,
    ProjectEdit { id: u32 },
    ProjectDetails { id: u32 },
    TaskDetails { project_id: u32, task_index: usize },
    TaskEdit { project_id: u32, task_index: usize },
}

impl AppRoute {
    /// Match a location pathname; unknown paths and bad params yield `None`
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => AppRoute::Root,
            ["login"] => AppRoute::Login,
            ["register"] => AppRoute::Register,
            ["main"] => AppRoute::Main,
            ["users"] => AppRoute::Users,
            ["user", id] => AppRoute::UserDetails { id: id.parse().ok()? },
            ["profile"] => AppRoute::Profile,
            ["profile", "edit"] => AppRoute::ProfileEdit,
            ["my-projects"] => AppRoute::MyProjects,
            ["projects"] => AppRoute::Projects,
            ["project", "new"] => AppRoute::ProjectNew,
            ["project", "edit", id] => AppRoute::ProjectEdit { id: id.parse().ok()? },
            ["project", id] => AppRoute::ProjectDetails { id: id.parse().ok()? },
            ["project", project_id, "task", task_index] => AppRoute::TaskDetails {
                project_id: project_id.parse().ok()?,
                task_index: task_index.parse().ok()?,
            },
            ["project", project_id, "task", task_index, "edit"] => AppRoute::TaskEdit {
                project_id: project_id.parse().ok()?,
                task_index: task_index.parse().ok()?,
            },
            _ => return None,
        };
        Some(route)
    }

    pub fn path(&self) -> String {
        match self {
            AppRoute::Root => "/".to_string(),
            AppRoute::Login => LOGIN_PATH.to_string(),
            AppRoute::Register => "/register".to_string(),
            AppRoute::Main => "/main".to_string(),
            AppRoute::Users => "/users".to_string(),
            AppRoute::UserDetails { id } => format!("/user/{}", id),
            AppRoute::Profile => "/profile".to_string(),
            AppRoute::ProfileEdit => "/profile/edit".to_string(),
            AppRoute::MyProjects => "/my-projects".to_string(),
            AppRoute::Projects => "/projects".to_string(),
            AppRoute::ProjectNew => "/project/new".to_string(),
            AppRoute::ProjectEdit { id } => format!("/project/edit/{}", id),
            AppRoute::ProjectDetails { id } => format!("/project/{}", id),
            AppRoute::TaskDetails { project_id, task_index } => {
                format!("/project/{}/task/{}", project_id, task_index)
            }
            AppRoute::TaskEdit { project_id, task_index } => {
                format!("/project/{}/task/{}/edit", project_id, task_index)
            }
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, AppRoute::Root | AppRoute::Login | AppRoute::Register)
    }

    /// Routes that only forward elsewhere
    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            AppRoute::Root => Some(LOGIN_PATH),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Allowed,
    Redirected(String),
}

/// Decide a navigation given whether a session is present
pub fn decide(target: Option<&AppRoute>, authenticated: bool) -> Navigation {
    match target {
        Some(route) => {
            if let Some(to) = route.redirect() {
                Navigation::Redirected(to.to_string())
            } else if route.requires_auth() && !authenticated {
                Navigation::Redirected(LOGIN_PATH.to_string())
            } else {
                Navigation::Allowed
            }
        }
        // Unknown paths render the not-found view
        None => Navigation::Allowed,
    }
}

/// Runs before every navigation: hydrate the session, then decide
pub fn guard(target: Option<&AppRoute>, session: &SessionStore) -> Navigation {
    if let Err(e) = session.load_from_storage() {
        error!("[ROUTER] Session hydration failed: {}", e);
    }
    let decision = decide(target, session.is_authenticated());
    debug!("[ROUTER] {:?} -> {:?}", target, decision);
    decision
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{save_json, KeyValueStorage, USER_KEY};
    use crate::stores::test_support::{fixture, user};

    const PROTECTED: &[&str] = &[
        "/main",
        "/users",
        "/user/3",
        "/profile",
        "/profile/edit",
        "/my-projects",
        "/projects",
        "/project/new",
        "/project/edit/4",
        "/project/4",
        "/project/4/task/0",
        "/project/4/task/0/edit",
    ];

    #[test]
    fn test_parse_and_path_agree() {
        for path in PROTECTED.iter().chain(["/login", "/register", "/"].iter()) {
            let route = AppRoute::parse(path).unwrap_or_else(|| panic!("no route for {path}"));
            assert_eq!(route.path(), *path);
        }
    }

    #[test]
    fn test_parse_specific_routes() {
        assert_eq!(AppRoute::parse("/project/new"), Some(AppRoute::ProjectNew));
        assert_eq!(AppRoute::parse("/project/7/"), Some(AppRoute::ProjectDetails { id: 7 }));
        assert_eq!(
            AppRoute::parse("/project/7/task/2/edit?from=list"),
            Some(AppRoute::TaskEdit { project_id: 7, task_index: 2 })
        );
        assert_eq!(AppRoute::parse("/project/abc"), None);
        assert_eq!(AppRoute::parse("/nowhere"), None);
    }

    #[test]
    fn test_unauthenticated_protected_routes_redirect() {
        for path in PROTECTED {
            let route = AppRoute::parse(path);
            assert_eq!(
                decide(route.as_ref(), false),
                Navigation::Redirected(LOGIN_PATH.to_string()),
                "{path}"
            );
        }
    }

    #[test]
    fn test_authenticated_routes_allowed() {
        for path in PROTECTED.iter().chain(["/login", "/register"].iter()) {
            let route = AppRoute::parse(path);
            assert_eq!(decide(route.as_ref(), true), Navigation::Allowed, "{path}");
        }
    }

    #[test]
    fn test_root_always_redirects_to_login() {
        assert_eq!(
            decide(Some(&AppRoute::Root), true),
            Navigation::Redirected(LOGIN_PATH.to_string())
        );
    }

    #[test]
    fn test_guard_hydrates_from_storage() {
        let (state, api, memory, storage) = fixture("http://localhost:1");
        let session = SessionStore::new(state, api, storage);
        let target = AppRoute::parse("/my-projects");

        assert_eq!(
            guard(target.as_ref(), &session),
            Navigation::Redirected(LOGIN_PATH.to_string())
        );

        save_json(&memory, USER_KEY, &user(1, "ann")).unwrap();
        assert_eq!(guard(target.as_ref(), &session), Navigation::Allowed);
    }

    #[test]
    fn test_guard_with_corrupt_storage_redirects() {
        let (state, api, memory, storage) = fixture("http://localhost:1");
        memory.set_item(USER_KEY, "garbage").unwrap();
        let session = SessionStore::new(state, api, storage);

        assert_eq!(
            guard(AppRoute::parse("/main").as_ref(), &session),
            Navigation::Redirected(LOGIN_PATH.to_string())
        );
        assert_eq!(guard(AppRoute::parse("/login").as_ref(), &session), Navigation::Allowed);
    }
}
