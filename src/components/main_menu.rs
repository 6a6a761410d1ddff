use leptos::prelude::*;
use leptos_router::components::A;

use crate::store::{track_session_user, use_app_store};

/// Landing page after login
#[component]
pub fn MainMenu() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="main-menu">
            <h1>
                "Welcome, "
                {move || track_session_user(&store).map(|u| u.fullname).unwrap_or_default()}
            </h1>
            <ul class="menu-list">
                <li><A href="/my-projects">"My projects"</A></li>
                <li><A href="/project/new">"New project"</A></li>
                <li><A href="/projects">"All projects"</A></li>
                <li><A href="/users">"Users"</A></li>
                <li><A href="/profile">"Profile"</A></li>
            </ul>
        </section>
    }
}
