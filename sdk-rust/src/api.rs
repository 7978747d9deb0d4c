use async_trait::async_trait;
use serde_json::Value;

use crate::{
    types::{
        ActionResponse, AnalysisParams, Article, ArticleRef, AuthSession, Category,
        ChangePasswordRequest, NewUser, NewsParams, PersonalizedFeed, ProfileUpdate, Source, User,
    },
    ApiResult,
};

/// Authentication and user-scoped action endpoints.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a session.
    async fn login(&self, username: &str, password: &str) -> ApiResult<AuthSession>;
    /// Create an account; the backend logs the new user in immediately.
    async fn register(&self, new_user: &NewUser) -> ApiResult<AuthSession>;
    /// Update profile fields; returns the replacement user.
    async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<User>;
    /// Rotate the credential.
    async fn change_password(&self, request: &ChangePasswordRequest) -> ApiResult<()>;
    /// Record a view for the given user.
    async fn view_news(&self, user_id: &str, article: &ArticleRef) -> ApiResult<ActionResponse>;
    /// Persist a saved post for the given user.
    async fn save_post(&self, user_id: &str, article: &ArticleRef) -> ApiResult<ActionResponse>;
    /// The personalized feed for the authenticated user.
    async fn personalized_feed(&self) -> ApiResult<PersonalizedFeed>;
}

/// Read-only news and reference-data endpoints.
#[async_trait]
pub trait NewsApi: Send + Sync {
    async fn latest_news(&self, params: &NewsParams) -> ApiResult<Vec<Article>>;
    async fn search_news(&self, query: &str, params: &NewsParams) -> ApiResult<Vec<Article>>;
    async fn sources(&self) -> ApiResult<Vec<Source>>;
    async fn categories(&self) -> ApiResult<Vec<Category>>;
    async fn news_by_category(&self, category: &str, limit: Option<u32>)
        -> ApiResult<Vec<Article>>;
}

/// Aggregated analysis endpoints. Payloads are server-shaped and opaque;
/// callers store them verbatim.
#[async_trait]
pub trait AnalysisApi: Send + Sync {
    async fn sentiment_trends(&self, params: &AnalysisParams) -> ApiResult<Value>;
    async fn top_entities(&self, params: &AnalysisParams) -> ApiResult<Value>;
    async fn category_distribution(&self, params: &AnalysisParams) -> ApiResult<Value>;
    async fn source_analysis(&self, params: &AnalysisParams) -> ApiResult<Value>;
}
