//! Project List Pages
//!
//! All projects (with title search) and the session user's own projects.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::context::use_app_context;
use crate::markdown::{parse_markdown_inline, summary_line};
use crate::models::Project;
use crate::routes::AppRoute;
use crate::store::{track_projects, use_app_store};

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let preview = parse_markdown_inline(summary_line(&project.body));
    view! {
        <li class="project-card">
            <A href=AppRoute::ProjectDetails { id: project.id }.path()>
                <h3>{project.title.clone()}</h3>
            </A>
            <p class="project-preview" inner_html=preview></p>
            <span class="task-count">{format!("{} tasks", project.tasks.len())}</span>
        </li>
    }
}

#[component]
fn ProjectList() -> impl IntoView {
    let store = use_app_store();
    view! {
        <ul class="project-list">
            <For
                each=move || track_projects(&store)
                key=|project| project.id
                children=move |project| view! { <ProjectCard project=project /> }
            />
        </ul>
        <Show when=move || track_projects(&store).is_empty()>
            <p class="empty">"No projects"</p>
        </Show>
    }
}

#[component]
pub fn AllProjects() -> impl IntoView {
    let ctx = use_app_context();
    let (query, set_query) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let projects = ctx.projects.clone();
    Effect::new(move |_| {
        let projects = projects.clone();
        spawn_local(async move {
            if let Err(e) = projects.fetch_all_projects().await {
                set_error.set(Some(e.to_string()));
            }
        });
    });

    let projects = ctx.projects.clone();
    let search = move |ev: SubmitEvent| {
        ev.prevent_default();
        let q = query.get();
        let projects = projects.clone();
        spawn_local(async move {
            let result = if q.trim().is_empty() {
                projects.fetch_all_projects().await
            } else {
                projects.search_projects(&q).await
            };
            set_error.set(result.err().map(|e| e.to_string()));
        });
    };

    view! {
        <section class="projects-page">
            <h1>"All projects"</h1>
            <form class="search-form" on:submit=search>
                <input
                    type="search"
                    placeholder="Search by title"
                    prop:value=query
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <button type="submit">"Search"</button>
            </form>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <ProjectList />
        </section>
    }
}

#[component]
pub fn UserProjects() -> impl IntoView {
    let ctx = use_app_context();
    let (error, set_error) = signal::<Option<String>>(None);

    let projects = ctx.projects.clone();
    Effect::new(move |_| {
        let projects = projects.clone();
        spawn_local(async move {
            if let Err(e) = projects.fetch_user_projects().await {
                set_error.set(Some(e.to_string()));
            }
        });
    });

    view! {
        <section class="projects-page">
            <h1>"My projects"</h1>
            <A href="/project/new">"New project"</A>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <ProjectList />
        </section>
    }
}
