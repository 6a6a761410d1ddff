//! Profile Pages

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::users::UserCard;
use crate::context::use_app_context;
use crate::models::User;
use crate::store::{track_session_user, use_app_store};

#[component]
pub fn Profile() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="profile-page">
            <h1>"Profile"</h1>
            {move || track_session_user(&store).map(|user| view! { <UserCard user=user /> })}
            <A href="/profile/edit">"Edit profile"</A>
        </section>
    }
}

#[component]
pub fn ProfileEdit() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    // The guard only admits this page with a session present
    let Some(current) = ctx.session.current_user() else {
        return view! { <p>"Not logged in"</p> }.into_any();
    };

    let (fullname, set_fullname) = signal(current.fullname.clone());
    let (class, set_class) = signal(current.class.to_string());
    let (speciality, set_speciality) = signal(current.speciality.clone().unwrap_or_default());
    let (email, set_email) = signal(current.email.clone());
    let (error, set_error) = signal::<Option<String>>(None);

    let session = ctx.session.clone();
    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Ok(class_value) = class.get().trim().parse::<f64>() else {
            set_error.set(Some("Class must be a number".to_string()));
            return;
        };
        let speciality = speciality.get();
        let edited = User {
            fullname: fullname.get().trim().to_string(),
            class: class_value,
            speciality: (!speciality.trim().is_empty()).then(|| speciality.trim().to_string()),
            email: email.get().trim().to_string(),
            ..current.clone()
        };
        match session.update_profile(edited) {
            Ok(()) => navigate("/profile", Default::default()),
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <section class="profile-edit">
            <h1>"Edit profile"</h1>
            <form class="profile-form" on:submit=submit>
                <label>"Full name"
                    <input type="text" prop:value=fullname
                        on:input=move |ev| set_fullname.set(event_target_value(&ev)) />
                </label>
                <label>"Class"
                    <input type="number" step="any" prop:value=class
                        on:input=move |ev| set_class.set(event_target_value(&ev)) />
                </label>
                <label>"Speciality"
                    <input type="text" prop:value=speciality
                        on:input=move |ev| set_speciality.set(event_target_value(&ev)) />
                </label>
                <label>"Email"
                    <input type="email" prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev)) />
                </label>
                <button type="submit">"Save"</button>
                <A href="/profile">"Cancel"</A>
            </form>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
        </section>
    }
    .into_any()
}
