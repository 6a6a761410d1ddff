//! Project Details Page
//!
//! Descriptions, authors and the task list. Authors can add and delete
//! tasks and delete the project.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::{DeleteConfirmButton, MarkdownView};
use crate::context::use_app_context;
use crate::models::{Project, Task};
use crate::routes::AppRoute;
use crate::store::{track_current_project, use_app_store};

#[component]
pub fn ProjectDetails(id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let navigate = use_navigate();
    let user_id = ctx.session.user_id();
    let (error, set_error) = signal::<Option<String>>(None);

    let projects = ctx.projects.clone();
    Effect::new(move |_| {
        let projects = projects.clone();
        spawn_local(async move {
            if let Err(e) = projects.fetch_project_by_id(id).await {
                set_error.set(Some(e.to_string()));
            }
        });
    });

    let projects = ctx.projects.clone();
    let delete_project = Callback::new(move |_: ()| {
        let projects = projects.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match projects.delete_project(id).await {
                Ok(()) => navigate("/my-projects", Default::default()),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    });

    let projects = ctx.projects.clone();
    let delete_task = Callback::new(move |index: usize| {
        let projects = projects.clone();
        spawn_local(async move {
            if let Err(e) = projects.delete_task(id, index).await {
                set_error.set(Some(e.to_string()));
            }
        });
    });

    let projects = ctx.projects.clone();
    let add_task = Callback::new(move |task: Task| {
        let projects = projects.clone();
        spawn_local(async move {
            if let Err(e) = projects.add_task(id, task).await {
                set_error.set(Some(e.to_string()));
            }
        });
    });

    view! {
        <section class="project-details">
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            {move || {
                track_current_project(&store)
                    .filter(|project| project.id == id)
                    .map(|project| {
                        let is_author = user_id.is_some_and(|uid| project.is_authored_by(uid));
                        view! {
                            <ProjectBody
                                project=project
                                is_author=is_author
                                delete_project=delete_project
                                delete_task=delete_task
                            />
                            <Show when=move || is_author>
                                <NewTaskForm on_add=add_task />
                            </Show>
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn ProjectBody(
    project: Project,
    is_author: bool,
    delete_project: Callback<()>,
    delete_task: Callback<usize>,
) -> impl IntoView {
    let project_id = project.id;
    let authors = project
        .authors_ids
        .iter()
        .map(|author| view! { <A href=AppRoute::UserDetails { id: *author }.path()>{format!("#{}", author)}</A> " " })
        .collect_view();
    let tasks = project
        .tasks
        .iter()
        .enumerate()
        .map(|(index, task)| {
            let title = task.title.clone();
            view! {
                <li class="task-row">
                    <A href=AppRoute::TaskDetails { project_id, task_index: index }.path()>{title}</A>
                    <span class="task-status">{task.status.clone()}</span>
                    {task.timeline.clone().map(|t| view! { <span class="task-timeline">{t}</span> })}
                    {is_author.then(|| view! {
                        <DeleteConfirmButton
                            label="×"
                            button_class="task-delete-btn"
                            on_confirm=Callback::new(move |_: ()| delete_task.run(index))
                        />
                    })}
                </li>
            }
        })
        .collect_view();

    view! {
        <header class="project-header">
            <h1>{project.title.clone()}</h1>
            {is_author.then(|| view! {
                <A href=AppRoute::ProjectEdit { id: project_id }.path()>"Edit"</A>
                <DeleteConfirmButton label="Delete project" on_confirm=delete_project />
            })}
        </header>
        <MarkdownView text=project.body.clone() />
        {(!project.underbody.is_empty()).then(|| view! {
            <h2>"Additional materials"</h2>
            <MarkdownView text=project.underbody.clone() />
        })}
        <p class="project-authors">"Authors: " {authors}</p>
        <h2>"Tasks"</h2>
        <ol class="task-list" start="0">{tasks}</ol>
    }
}

#[component]
fn NewTaskForm(on_add: Callback<Task>) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (status, set_status) = signal(String::new());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let task_title = title.get();
        if task_title.trim().is_empty() {
            return;
        }
        on_add.run(Task {
            title: task_title.trim().to_string(),
            status: status.get().trim().to_string(),
            ..Default::default()
        });
        set_title.set(String::new());
        set_status.set(String::new());
    };

    view! {
        <form class="new-task-form" on:submit=submit>
            <input
                type="text"
                placeholder="New task..."
                prop:value=title
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Status"
                prop:value=status
                on:input=move |ev| set_status.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
