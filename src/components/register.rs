//! Registration Page

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::context::use_app_context;
use crate::models::NewUser;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let (nickname, set_nickname) = signal(String::new());
    let (fullname, set_fullname) = signal(String::new());
    let (class, set_class) = signal(String::from("0"));
    let (speciality, set_speciality) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<&'static str>>(None);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Ok(class_value) = class.get().trim().parse::<f64>() else {
            set_error.set(Some("Class must be a number"));
            return;
        };
        let speciality = speciality.get();
        let new_user = NewUser {
            nickname: nickname.get().trim().to_string(),
            fullname: fullname.get().trim().to_string(),
            class: class_value,
            speciality: (!speciality.trim().is_empty()).then(|| speciality.trim().to_string()),
            email: email.get().trim().to_string(),
            password: password.get(),
        };
        if new_user.nickname.is_empty() || new_user.email.is_empty() || new_user.password.is_empty() {
            set_error.set(Some("Nickname, email and password are required"));
            return;
        }

        let session = ctx.session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            if session.register(&new_user).await {
                set_error.set(None);
                navigate("/main", Default::default());
            } else {
                set_error.set(Some("Registration failed"));
            }
        });
    };

    view! {
        <section class="auth-page">
            <h1>"Register"</h1>
            <form class="auth-form" on:submit=submit>
                <input type="text" placeholder="Nickname" prop:value=nickname
                    on:input=move |ev| set_nickname.set(event_target_value(&ev)) />
                <input type="text" placeholder="Full name" prop:value=fullname
                    on:input=move |ev| set_fullname.set(event_target_value(&ev)) />
                <input type="number" step="any" placeholder="Class" prop:value=class
                    on:input=move |ev| set_class.set(event_target_value(&ev)) />
                <input type="text" placeholder="Speciality" prop:value=speciality
                    on:input=move |ev| set_speciality.set(event_target_value(&ev)) />
                <input type="email" placeholder="Email" prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev)) />
                <input type="password" placeholder="Password" prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev)) />
                <button type="submit">"Create account"</button>
            </form>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <p>"Already registered? " <A href="/login">"Log in"</A></p>
        </section>
    }
}
