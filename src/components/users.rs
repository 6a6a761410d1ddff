//! User Pages
//!
//! User list with search, and a single user's details.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::User;
use crate::routes::{AppRoute, LOGIN_PATH};
use crate::store::{track_current_user, track_users, use_app_store};

#[component]
pub fn AllUsers() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (query, set_query) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    // Load all users on mount
    let users = ctx.users.clone();
    Effect::new(move |_| {
        let users = users.clone();
        spawn_local(async move {
            if let Err(e) = users.fetch_all_users().await {
                set_error.set(Some(e.to_string()));
            }
        });
    });

    let users = ctx.users.clone();
    let search = move |ev: SubmitEvent| {
        ev.prevent_default();
        let q = query.get();
        let users = users.clone();
        spawn_local(async move {
            let result = if q.trim().is_empty() {
                users.fetch_all_users().await
            } else {
                users.search_users(q.trim()).await
            };
            set_error.set(result.err().map(|e| e.to_string()));
        });
    };

    view! {
        <section class="users-page">
            <h1>"Users"</h1>
            <form class="search-form" on:submit=search>
                <input
                    type="search"
                    placeholder="Nickname, name, email or id"
                    prop:value=query
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <button type="submit">"Search"</button>
            </form>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <ul class="user-list">
                <For
                    each=move || track_users(&store)
                    key=|user| user.id
                    children=move |user| view! {
                        <li class="user-row">
                            <A href=AppRoute::UserDetails { id: user.id }.path()>{user.nickname.clone()}</A>
                            <span class="user-fullname">{user.fullname.clone()}</span>
                        </li>
                    }
                />
            </ul>
        </section>
    }
}

#[component]
pub fn UserDetails(id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (error, set_error) = signal::<Option<String>>(None);

    let users = ctx.users.clone();
    Effect::new(move |_| {
        let users = users.clone();
        spawn_local(async move {
            if let Err(e) = users.fetch_user_by_id(id).await {
                set_error.set(Some(e.to_string()));
            }
        });
    });

    let is_self = ctx.session.user_id() == Some(id);
    let users = ctx.users.clone();
    let session = ctx.session.clone();
    let navigate = use_navigate();
    let delete_account = Callback::new(move |_: ()| {
        let users = users.clone();
        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match users.delete_user(id).await {
                Ok(()) => {
                    session.logout();
                    navigate(LOGIN_PATH, Default::default());
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    });

    view! {
        <section class="user-details">
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            {move || {
                track_current_user(&store)
                    .filter(|user| user.id == id)
                    .map(|user| view! { <UserCard user=user /> })
            }}
            <Show when=move || is_self>
                <DeleteConfirmButton
                    label="Delete account"
                    prompt="Delete your account for good?"
                    on_confirm=delete_account
                />
            </Show>
        </section>
    }
}

#[component]
pub fn UserCard(user: User) -> impl IntoView {
    view! {
        <dl class="user-card">
            <dt>"Nickname"</dt><dd>{user.nickname}</dd>
            <dt>"Full name"</dt><dd>{user.fullname}</dd>
            <dt>"Class"</dt><dd>{user.class.to_string()}</dd>
            <dt>"Speciality"</dt><dd>{user.speciality.unwrap_or_else(|| "-".to_string())}</dd>
            <dt>"Email"</dt><dd>{user.email}</dd>
        </dl>
    }
}
