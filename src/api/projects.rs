//! Project Endpoints

use super::{ApiClient, ApiResult};
use crate::models::{Project, ProjectCreate, ProjectUpdate};

impl ApiClient {
    /// `GET /projects/`
    pub async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        Self::send_json(self.get("/projects/")).await
    }

    /// `GET /projects/?author_id=`
    pub async fn list_projects_by_author(&self, author_id: u32) -> ApiResult<Vec<Project>> {
        Self::send_json(self.get("/projects/").query(&[("author_id", author_id)])).await
    }

    /// `GET /projects/{id}`
    pub async fn get_project(&self, id: u32) -> ApiResult<Project> {
        Self::send_json(self.get(&format!("/projects/{}", id))).await
    }

    /// `GET /search?q=`, title substring match
    pub async fn search_projects(&self, query: &str) -> ApiResult<Vec<Project>> {
        Self::send_json(self.get("/search").query(&[("q", query)])).await
    }

    /// `POST /projects/`
    pub async fn create_project(&self, project: &ProjectCreate) -> ApiResult<Project> {
        Self::send_json(self.post("/projects/").json(project)).await
    }

    /// `PUT /projects/{id}`
    pub async fn update_project(&self, id: u32, update: &ProjectUpdate) -> ApiResult<Project> {
        Self::send_json(self.put(&format!("/projects/{}", id)).json(update)).await
    }

    /// `DELETE /projects/?project_id=`
    pub async fn delete_project(&self, id: u32) -> ApiResult<()> {
        Self::send_unit(self.delete("/projects/").query(&[("project_id", id)])).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_by_author_uses_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/projects/")
            .match_query(Matcher::UrlEncoded("author_id".into(), "7".into()))
            .with_status(200)
            .with_body(
                json!([{ "id": 1, "title": "A", "body": "B", "authors_ids": [7], "tasks": [] }])
                    .to_string(),
            )
            .create_async()
            .await;

        let projects = ApiClient::new(server.url())
            .list_projects_by_author(7)
            .await
            .unwrap();
        assert_eq!(projects[0].authors_ids, vec![7]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_sends_partial_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/projects/3")
            .match_body(Matcher::Json(json!({ "title": "Renamed" })))
            .with_status(200)
            .with_body(json!({ "id": 3, "title": "Renamed", "body": "B" }).to_string())
            .create_async()
            .await;

        let update = ProjectUpdate {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        let project = ApiClient::new(server.url())
            .update_project(3, &update)
            .await
            .unwrap();
        assert_eq!(project.title, "Renamed");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_passes_project_id_as_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/projects/")
            .match_query(Matcher::UrlEncoded("project_id".into(), "12".into()))
            .with_status(200)
            .with_body(r#"{"message":"Project 12 deleted successfully"}"#)
            .create_async()
            .await;

        ApiClient::new(server.url()).delete_project(12).await.unwrap();
        mock.assert_async().await;
    }
}
