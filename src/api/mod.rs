//! Remote API Client
//!
//! Typed bindings to the HTTP backend, organized by resource.

mod projects;
mod users;

use log::debug;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("no user is logged in")]
    NotAuthenticated,

    #[error("project {project_id} has no task #{index}")]
    TaskNotFound { project_id: u32, index: usize },

    #[error("user {0} not found")]
    UserNotFound(u32),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP client bound to one API base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.url(path))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.url(path))
    }

    fn put(&self, path: &str) -> RequestBuilder {
        self.http.put(self.url(path))
    }

    fn delete(&self, path: &str) -> RequestBuilder {
        self.http.delete(self.url(path))
    }

    /// Send and decode a JSON body, mapping non-2xx to `ApiError::Status`
    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> ApiResult<T> {
        let text = Self::send_text(request).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send and discard the body
    async fn send_unit(request: RequestBuilder) -> ApiResult<()> {
        Self::send_text(request).await.map(|_| ())
    }

    async fn send_text(request: RequestBuilder) -> ApiResult<String> {
        let response = request.send().await?;
        let status = response.status();
        debug!("[API] {} {}", status.as_u16(), response.url());
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_removed() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/login"), "http://localhost:8000/login");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/projects/9")
            .with_status(404)
            .with_body(r#"{"detail":"Post not found"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let err = client.get_project(9).await.unwrap_err();
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 404);
                assert!(body.contains("Post not found"));
            }
            other => panic!("unexpected error: {other}"),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/userslist/")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let err = client.list_users().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
