//! Users Store

use log::info;

use crate::api::{ApiClient, ApiError, ApiResult};
use crate::models::User;
use crate::store::{store_remove_user, store_set_current_user, store_set_users, AppStore};

#[derive(Clone)]
pub struct UsersStore {
    state: AppStore,
    api: ApiClient,
}

impl UsersStore {
    pub fn new(state: AppStore, api: ApiClient) -> Self {
        Self { state, api }
    }

    pub async fn fetch_all_users(&self) -> ApiResult<()> {
        let users = self.api.list_users().await?;
        store_set_users(&self.state, users);
        Ok(())
    }

    pub async fn search_users(&self, query: &str) -> ApiResult<()> {
        let users = self.api.search_users(query).await?;
        store_set_users(&self.state, users);
        Ok(())
    }

    /// Look a user up by id through the search endpoint's exact-id match
    pub async fn fetch_user_by_id(&self, id: u32) -> ApiResult<User> {
        let user = self
            .api
            .search_users(&id.to_string())
            .await?
            .into_iter()
            .find(|user| user.id == id)
            .ok_or(ApiError::UserNotFound(id))?;
        store_set_current_user(&self.state, Some(user.clone()));
        Ok(user)
    }

    pub async fn delete_user(&self, id: u32) -> ApiResult<()> {
        self.api.delete_user(id).await?;
        info!("[USERS] Deleted user #{}", id);
        store_remove_user(&self.state, id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{store_current_user, store_users};
    use crate::stores::test_support::{fixture, user_json};
    use mockito::Matcher;

    #[tokio::test]
    async fn test_fetch_all_replaces_list() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/userslist/")
            .with_status(200)
            .with_body(format!("[{},{}]", user_json(1, "ann"), user_json(2, "bob")))
            .create_async()
            .await;
        let (state, api, _, _) = fixture(&server.url());
        let users = UsersStore::new(state, api);

        users.fetch_all_users().await.unwrap();
        assert_eq!(store_users(&state).len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_by_id_picks_exact_match() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/users/")
            .match_query(Matcher::UrlEncoded("q".into(), "2".into()))
            .with_status(200)
            .with_body(format!("[{},{}]", user_json(12, "a2"), user_json(2, "bob")))
            .create_async()
            .await;
        let (state, api, _, _) = fixture(&server.url());
        let users = UsersStore::new(state, api);

        let found = users.fetch_user_by_id(2).await.unwrap();
        assert_eq!(found.nickname, "bob");
        assert_eq!(store_current_user(&state).map(|u| u.id), Some(2));
    }

    #[tokio::test]
    async fn test_fetch_by_id_missing() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/users/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;
        let (state, api, _, _) = fixture(&server.url());
        let users = UsersStore::new(state, api);

        let err = users.fetch_user_by_id(3).await.unwrap_err();
        assert!(matches!(err, ApiError::UserNotFound(3)));
        assert!(store_current_user(&state).is_none());
    }

    #[tokio::test]
    async fn test_delete_removes_from_list() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/userslist/")
            .with_status(200)
            .with_body(format!("[{},{}]", user_json(1, "ann"), user_json(2, "bob")))
            .create_async()
            .await;
        server
            .mock("DELETE", "/users/1")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;
        let (state, api, _, _) = fixture(&server.url());
        let users = UsersStore::new(state, api);

        users.fetch_all_users().await.unwrap();
        users.delete_user(1).await.unwrap();
        let remaining = store_users(&state);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);
    }
}
