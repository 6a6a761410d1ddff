//! Project Form
//!
//! Creates a project (`id = None`) or edits title and descriptions of an
//! existing one.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::context::use_app_context;
use crate::models::{ProjectCreate, ProjectUpdate};
use crate::routes::AppRoute;

#[component]
pub fn ProjectEdit(id: Option<u32>) -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let (title, set_title) = signal(String::new());
    let (body, set_body) = signal(String::new());
    let (underbody, set_underbody) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (can_edit, set_can_edit) = signal(id.is_none());

    // Prefill when editing
    if let Some(project_id) = id {
        let projects = ctx.projects.clone();
        let user_id = ctx.session.user_id();
        Effect::new(move |_| {
            let projects = projects.clone();
            spawn_local(async move {
                match projects.fetch_project_by_id(project_id).await {
                    Ok(project) => {
                        set_can_edit.set(user_id.is_some_and(|uid| project.is_authored_by(uid)));
                        set_title.set(project.title);
                        set_body.set(project.body);
                        set_underbody.set(project.underbody);
                    }
                    Err(e) => set_error.set(Some(e.to_string())),
                }
            });
        });
    }

    let projects = ctx.projects.clone();
    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if title.get().trim().is_empty() || body.get().trim().is_empty() {
            set_error.set(Some("Title and description are required".to_string()));
            return;
        }
        let projects = projects.clone();
        let navigate = navigate.clone();
        let (t, b, u) = (title.get(), body.get(), underbody.get());
        spawn_local(async move {
            let saved = match id {
                None => {
                    let create = ProjectCreate {
                        title: t,
                        body: b,
                        underbody: u,
                        ..Default::default()
                    };
                    projects.create_project(create).await
                }
                Some(project_id) => {
                    let update = ProjectUpdate {
                        title: Some(t),
                        body: Some(b),
                        underbody: Some(u),
                        ..Default::default()
                    };
                    projects.update_project(project_id, &update).await
                }
            };
            match saved {
                Ok(project) => {
                    navigate(&AppRoute::ProjectDetails { id: project.id }.path(), Default::default())
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <section class="project-edit">
            <h1>{if id.is_some() { "Edit project" } else { "New project" }}</h1>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <Show when=move || !can_edit.get()>
                <p class="form-error">"Only authors can edit this project"</p>
            </Show>
            <form class="project-form" on:submit=submit>
                <fieldset disabled=move || !can_edit.get()>
                    <input
                        type="text"
                        placeholder="Title"
                        prop:value=title
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Description (Markdown)"
                        prop:value=body
                        on:input=move |ev| set_body.set(event_target_value(&ev))
                    ></textarea>
                    <textarea
                        placeholder="Additional materials (Markdown)"
                        prop:value=underbody
                        on:input=move |ev| set_underbody.set(event_target_value(&ev))
                    ></textarea>
                    <button type="submit">"Save"</button>
                </fieldset>
            </form>
        </section>
    }
}
