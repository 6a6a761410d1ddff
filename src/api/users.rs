//! User Endpoints
//!
//! Login, registration, listing, search and deletion.

use super::{ApiClient, ApiResult};
use crate::models::{Credentials, NewUser, User};

impl ApiClient {
    /// `POST /login`
    pub async fn login(&self, nickname: &str, password: &str) -> ApiResult<User> {
        let request = self.post("/login").json(&Credentials { nickname, password });
        Self::send_json(request).await
    }

    /// `POST /users/`
    pub async fn create_user(&self, user: &NewUser) -> ApiResult<User> {
        Self::send_json(self.post("/users/").json(user)).await
    }

    /// `GET /userslist/`
    pub async fn list_users(&self) -> ApiResult<Vec<User>> {
        Self::send_json(self.get("/userslist/")).await
    }

    /// `GET /users/?q=` matches nickname, full name, email, or exact id
    pub async fn search_users(&self, query: &str) -> ApiResult<Vec<User>> {
        Self::send_json(self.get("/users/").query(&[("q", query)])).await
    }

    /// `DELETE /users/{id}`
    pub async fn delete_user(&self, id: u32) -> ApiResult<()> {
        Self::send_unit(self.delete(&format!("/users/{}", id))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn user_json(id: u32, nickname: &str) -> serde_json::Value {
        json!({
            "id": id,
            "nickname": nickname,
            "fullname": "Test User",
            "class": 10.0,
            "speciality": "physics",
            "email": format!("{nickname}@example.com")
        })
    }

    #[tokio::test]
    async fn test_login_posts_credentials() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/login")
            .match_body(Matcher::Json(json!({ "nickname": "ann", "password": "pw" })))
            .with_status(200)
            .with_body(user_json(1, "ann").to_string())
            .create_async()
            .await;

        let user = ApiClient::new(server.url()).login("ann", "pw").await.unwrap();
        assert_eq!(user.nickname, "ann");
        assert_eq!(user.speciality.as_deref(), Some("physics"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_sends_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/users/")
            .match_query(Matcher::UrlEncoded("q".into(), "an n".into()))
            .with_status(200)
            .with_body(json!([user_json(1, "ann"), user_json(2, "anna")]).to_string())
            .create_async()
            .await;

        let users = ApiClient::new(server.url()).search_users("an n").await.unwrap();
        assert_eq!(users.len(), 2);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_user_ignores_message_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/users/4")
            .with_status(200)
            .with_body(r#"{"message":"User 4 deleted successfully"}"#)
            .create_async()
            .await;

        ApiClient::new(server.url()).delete_user(4).await.unwrap();
        mock.assert_async().await;
    }
}
