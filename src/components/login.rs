//! Login Page

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::context::use_app_context;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let (nickname, set_nickname) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (failed, set_failed) = signal(false);
    let (pending, set_pending) = signal(false);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let name = nickname.get();
        let pass = password.get();
        if name.is_empty() || pass.is_empty() {
            return;
        }
        let session = ctx.session.clone();
        let navigate = navigate.clone();
        set_pending.set(true);
        spawn_local(async move {
            let ok = session.login(&name, &pass).await;
            set_pending.set(false);
            set_failed.set(!ok);
            if ok {
                navigate("/main", Default::default());
            }
        });
    };

    view! {
        <section class="auth-page">
            <h1>"Log in"</h1>
            <form class="auth-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Nickname"
                    prop:value=nickname
                    on:input=move |ev| set_nickname.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=pending>"Log in"</button>
            </form>
            <Show when=move || failed.get()>
                <p class="form-error">"Wrong nickname or password"</p>
            </Show>
            <p>"No account? " <A href="/register">"Register"</A></p>
        </section>
    }
}
