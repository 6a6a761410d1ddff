//! Navigation Bar Component
//!
//! Top links, theme toggle and logout.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::context::use_app_context;
use crate::routes::LOGIN_PATH;
use crate::store::{track_is_dark, track_session_user, use_app_store};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let navigate = use_navigate();

    let theme = ctx.theme.clone();
    let toggle_theme = move |_| theme.toggle_theme();

    let session = ctx.session.clone();
    let logout = move |_| {
        session.logout();
        navigate(LOGIN_PATH, Default::default());
    };

    view! {
        <nav class="nav-bar">
            <Show when=move || track_session_user(&store).is_some()>
                <A href="/main">"Menu"</A>
                <A href="/projects">"Projects"</A>
                <A href="/my-projects">"My projects"</A>
                <A href="/users">"Users"</A>
                <A href="/profile">"Profile"</A>
            </Show>
            <span class="nav-spacer"></span>
            <button
                class="theme-toggle"
                title=move || if track_is_dark(&store) { "Light theme" } else { "Dark theme" }
                on:click=toggle_theme
            >
                {move || if track_is_dark(&store) { "☀" } else { "☾" }}
            </button>
            {move || track_session_user(&store).map(|user| view! {
                <span class="nav-user">{user.nickname}</span>
            })}
            <button
                class="logout-btn"
                class:hidden=move || track_session_user(&store).is_none()
                on:click=logout
            >
                "Log out"
            </button>
        </nav>
    }
}
