use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::{
    api::AuthApi,
    http::HttpClient,
    types::{
        ActionResponse, ArticleRef, AuthSession, ChangePasswordRequest, NewUser, PersonalizedFeed,
        ProfileUpdate, User,
    },
    ApiResult,
};

/// HTTP implementation of the authentication endpoints.
pub struct AuthClient {
    http: Arc<HttpClient>,
}

impl AuthClient {
    #[must_use]
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[async_trait]
impl AuthApi for AuthClient {
    async fn login(&self, username: &str, password: &str) -> ApiResult<AuthSession> {
        self.http
            .post("/auth/login", &LoginRequest { username, password })
            .await
    }

    async fn register(&self, new_user: &NewUser) -> ApiResult<AuthSession> {
        self.http.post("/auth/register", new_user).await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<User> {
        self.http.put("/auth/profile", update).await
    }

    async fn change_password(&self, request: &ChangePasswordRequest) -> ApiResult<()> {
        let _ack: Value = self.http.put("/auth/change-password", request).await?;
        Ok(())
    }

    async fn view_news(&self, user_id: &str, article: &ArticleRef) -> ApiResult<ActionResponse> {
        self.http
            .post(&format!("/auth/view-news/{user_id}"), article)
            .await
    }

    async fn save_post(&self, user_id: &str, article: &ArticleRef) -> ApiResult<ActionResponse> {
        self.http
            .post(&format!("/auth/save-post/{user_id}"), article)
            .await
    }

    async fn personalized_feed(&self) -> ApiResult<PersonalizedFeed> {
        self.http.get("/auth/world-news", &[]).await
    }
}
