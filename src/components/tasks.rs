//! Task Pages
//!
//! A task is addressed by its index in the parent project's task list.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::MarkdownView;
use crate::context::use_app_context;
use crate::models::Task;
use crate::routes::AppRoute;
use crate::store::{track_current_project, use_app_store};

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[component]
pub fn TaskDetails(project_id: u32, task_index: usize) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let user_id = ctx.session.user_id();
    let (error, set_error) = signal::<Option<String>>(None);

    let projects = ctx.projects.clone();
    Effect::new(move |_| {
        let projects = projects.clone();
        spawn_local(async move {
            if let Err(e) = projects.fetch_project_by_id(project_id).await {
                set_error.set(Some(e.to_string()));
            }
        });
    });

    view! {
        <section class="task-details">
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            {move || {
                let project = track_current_project(&store).filter(|p| p.id == project_id)?;
                let is_author = user_id.is_some_and(|uid| project.is_authored_by(uid));
                let Some(task) = project.task(task_index).cloned() else {
                    return Some(view! { <p class="form-error">"Task not found"</p> }.into_any());
                };
                Some(view! {
                    <A href=AppRoute::ProjectDetails { id: project_id }.path()>{format!("← {}", project.title)}</A>
                    <h1>{task.title}</h1>
                    <p class="task-status">"Status: " {task.status}</p>
                    {task.timeline.map(|t| view! { <p>"Start: " {t}</p> })}
                    {task.timelinend.map(|t| view! { <p>"Deadline: " {t}</p> })}
                    <MarkdownView text=task.body />
                    {is_author.then(|| view! {
                        <A href=AppRoute::TaskEdit { project_id, task_index }.path()>"Edit task"</A>
                    })}
                }.into_any())
            }}
        </section>
    }
}

#[component]
pub fn TaskEdit(project_id: u32, task_index: usize) -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let (title, set_title) = signal(String::new());
    let (status, set_status) = signal(String::new());
    let (body, set_body) = signal(String::new());
    let (timeline, set_timeline) = signal(String::new());
    let (timelinend, set_timelinend) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    // Prefill from the server copy
    let projects = ctx.projects.clone();
    Effect::new(move |_| {
        let projects = projects.clone();
        spawn_local(async move {
            match projects.fetch_project_by_id(project_id).await {
                Ok(project) => match project.task(task_index).cloned() {
                    Some(task) => {
                        set_title.set(task.title);
                        set_status.set(task.status);
                        set_body.set(task.body);
                        set_timeline.set(task.timeline.unwrap_or_default());
                        set_timelinend.set(task.timelinend.unwrap_or_default());
                    }
                    None => set_error.set(Some("Task not found".to_string())),
                },
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    });

    let projects = ctx.projects.clone();
    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if title.get().trim().is_empty() {
            set_error.set(Some("Title is required".to_string()));
            return;
        }
        let task = Task {
            title: title.get().trim().to_string(),
            status: status.get().trim().to_string(),
            body: body.get(),
            timeline: optional(timeline.get()),
            timelinend: optional(timelinend.get()),
        };
        let projects = projects.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match projects.save_task(project_id, task_index, task).await {
                Ok(_) => navigate(
                    &AppRoute::TaskDetails { project_id, task_index }.path(),
                    Default::default(),
                ),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <section class="task-edit">
            <h1>"Edit task"</h1>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <form class="task-form" on:submit=submit>
                <input type="text" placeholder="Title" prop:value=title
                    on:input=move |ev| set_title.set(event_target_value(&ev)) />
                <input type="text" placeholder="Status" prop:value=status
                    on:input=move |ev| set_status.set(event_target_value(&ev)) />
                <textarea placeholder="Description (Markdown)" prop:value=body
                    on:input=move |ev| set_body.set(event_target_value(&ev))></textarea>
                <input type="text" placeholder="Start (dd.mm.yyyy)" prop:value=timeline
                    on:input=move |ev| set_timeline.set(event_target_value(&ev)) />
                <input type="text" placeholder="Deadline (dd.mm.yyyy)" prop:value=timelinend
                    on:input=move |ev| set_timelinend.set(event_target_value(&ev)) />
                <button type="submit">"Save"</button>
                <A href=AppRoute::TaskDetails { project_id, task_index }.path()>"Cancel"</A>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::optional;

    #[test]
    fn test_optional_trims_and_drops_blank() {
        assert_eq!(optional("  ".to_string()), None);
        assert_eq!(optional(" 01.12.2026 ".to_string()), Some("01.12.2026".to_string()));
    }
}
