//! Project Board App
//!
//! Router shell. Every location goes through one catch-all route whose view
//! runs the navigation guard before rendering the page.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::components::*;
use crate::config::AppConfig;
use crate::context::{use_app_context, AppContext};
use crate::routes::{guard, AppRoute, Navigation};
use crate::storage::default_storage;
use crate::store::new_app_store;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let state = new_app_store();
    provide_context(state);
    provide_context(AppContext::new(&config, state, default_storage()));

    view! {
        <Router>
            <NavBar />
            <main class="main-content">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=GuardedOutlet />
                    <Route path=path!("/*any") view=GuardedOutlet />
                </Routes>
            </main>
        </Router>
    }
}

/// Parse the location, run the guard, then render the page or redirect
#[component]
fn GuardedOutlet() -> impl IntoView {
    let ctx = use_app_context();
    let location = use_location();

    move || {
        let pathname = location.pathname.get();
        let target = AppRoute::parse(&pathname);
        match guard(target.as_ref(), &ctx.session) {
            Navigation::Redirected(to) => view! { <Redirect path=to /> }.into_any(),
            Navigation::Allowed => render_page(target),
        }
    }
}

fn render_page(target: Option<AppRoute>) -> AnyView {
    match target {
        Some(AppRoute::Login) => view! { <LoginPage /> }.into_any(),
        Some(AppRoute::Register) => view! { <RegisterPage /> }.into_any(),
        Some(AppRoute::Main) => view! { <MainMenu /> }.into_any(),
        Some(AppRoute::Users) => view! { <AllUsers /> }.into_any(),
        Some(AppRoute::UserDetails { id }) => view! { <UserDetails id=id /> }.into_any(),
        Some(AppRoute::Profile) => view! { <Profile /> }.into_any(),
        Some(AppRoute::ProfileEdit) => view! { <ProfileEdit /> }.into_any(),
        Some(AppRoute::MyProjects) => view! { <UserProjects /> }.into_any(),
        Some(AppRoute::Projects) => view! { <AllProjects /> }.into_any(),
        Some(AppRoute::ProjectNew) => view! { <ProjectEdit id=None /> }.into_any(),
        Some(AppRoute::ProjectEdit { id }) => view! { <ProjectEdit id=Some(id) /> }.into_any(),
        Some(AppRoute::ProjectDetails { id }) => view! { <ProjectDetails id=id /> }.into_any(),
        Some(AppRoute::TaskDetails { project_id, task_index }) => {
            view! { <TaskDetails project_id=project_id task_index=task_index /> }.into_any()
        }
        Some(AppRoute::TaskEdit { project_id, task_index }) => {
            view! { <TaskEdit project_id=project_id task_index=task_index /> }.into_any()
        }
        // Root only ever redirects
        Some(AppRoute::Root) | None => view! { <NotFound /> }.into_any(),
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Page not found"</h1>
            <a href="/main">"Back to menu"</a>
        </section>
    }
}
