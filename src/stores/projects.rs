//! Projects Store
//!
//! Fetch results replace the in-memory list or current project wholesale.
//! Errors propagate to the caller and leave state as it was.

use log::{debug, info};

use super::SessionStore;
use crate::api::{ApiClient, ApiError, ApiResult};
use crate::models::{Project, ProjectCreate, ProjectUpdate, Task};
use crate::store::{
    store_current_project, store_remove_project, store_set_current_project, store_set_projects,
    AppStore,
};

#[derive(Clone)]
pub struct ProjectsStore {
    state: AppStore,
    api: ApiClient,
    session: SessionStore,
}

impl ProjectsStore {
    pub fn new(state: AppStore, api: ApiClient, session: SessionStore) -> Self {
        Self {
            state,
            api,
            session,
        }
    }

    pub async fn fetch_all_projects(&self) -> ApiResult<()> {
        let projects = self.api.list_projects().await?;
        debug!("[PROJECTS] Loaded {} projects", projects.len());
        store_set_projects(&self.state, projects);
        Ok(())
    }

    /// Projects authored by the session user; empty without a session
    pub async fn fetch_user_projects(&self) -> ApiResult<Vec<Project>> {
        let Some(user_id) = self.session.user_id() else {
            return Ok(Vec::new());
        };
        let projects = self.api.list_projects_by_author(user_id).await?;
        store_set_projects(&self.state, projects.clone());
        Ok(projects)
    }

    pub async fn fetch_project_by_id(&self, id: u32) -> ApiResult<Project> {
        let project = self.api.get_project(id).await?;
        store_set_current_project(&self.state, Some(project.clone()));
        Ok(project)
    }

    /// Title search; an empty query clears the list without a request
    pub async fn search_projects(&self, query: &str) -> ApiResult<()> {
        let query = query.trim();
        if query.is_empty() {
            store_set_projects(&self.state, Vec::new());
            return Ok(());
        }
        let projects = self.api.search_projects(query).await?;
        store_set_projects(&self.state, projects);
        Ok(())
    }

    /// Create a project authored by the session user
    pub async fn create_project(&self, project: ProjectCreate) -> ApiResult<Project> {
        let user_id = self.session.user_id().ok_or(ApiError::NotAuthenticated)?;
        let payload = project.with_author(user_id);
        let created = self.api.create_project(&payload).await?;
        info!("[PROJECTS] Created project #{}", created.id);
        Ok(created)
    }

    pub async fn update_project(&self, id: u32, update: &ProjectUpdate) -> ApiResult<Project> {
        let updated = self.api.update_project(id, update).await?;
        if store_current_project(&self.state).is_some_and(|p| p.id == id) {
            store_set_current_project(&self.state, Some(updated.clone()));
        }
        Ok(updated)
    }

    pub async fn delete_project(&self, id: u32) -> ApiResult<()> {
        self.api.delete_project(id).await?;
        info!("[PROJECTS] Deleted project #{}", id);
        store_remove_project(&self.state, id);
        if store_current_project(&self.state).is_some_and(|p| p.id == id) {
            store_set_current_project(&self.state, None);
        }
        Ok(())
    }

    // ========================
    // Tasks (addressed by index)
    // ========================

    pub async fn add_task(&self, project_id: u32, task: Task) -> ApiResult<Project> {
        let mut project = self.project_for_edit(project_id).await?;
        project.tasks.push(task);
        self.update_project(project_id, &ProjectUpdate::tasks(project.tasks))
            .await
    }

    pub async fn save_task(&self, project_id: u32, index: usize, task: Task) -> ApiResult<Project> {
        let mut project = self.project_for_edit(project_id).await?;
        let slot = project
            .tasks
            .get_mut(index)
            .ok_or(ApiError::TaskNotFound { project_id, index })?;
        *slot = task;
        self.update_project(project_id, &ProjectUpdate::tasks(project.tasks))
            .await
    }

    /// Remove a task; later tasks shift down one index
    pub async fn delete_task(&self, project_id: u32, index: usize) -> ApiResult<Project> {
        let mut project = self.project_for_edit(project_id).await?;
        if index >= project.tasks.len() {
            return Err(ApiError::TaskNotFound { project_id, index });
        }
        project.tasks.remove(index);
        self.update_project(project_id, &ProjectUpdate::tasks(project.tasks))
            .await
    }

    async fn project_for_edit(&self, project_id: u32) -> ApiResult<Project> {
        match store_current_project(&self.state) {
            Some(project) if project.id == project_id => Ok(project),
            _ => self.fetch_project_by_id(project_id).await,
        }
    }
}
