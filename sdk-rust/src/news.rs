use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    api::NewsApi,
    http::HttpClient,
    types::{Article, Category, NewsParams, Source},
    ApiResult,
};

/// HTTP implementation of the news endpoints.
pub struct NewsClient {
    http: Arc<HttpClient>,
}

impl NewsClient {
    #[must_use]
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl NewsApi for NewsClient {
    async fn latest_news(&self, params: &NewsParams) -> ApiResult<Vec<Article>> {
        self.http.get("/news/latest", &params.query_pairs()).await
    }

    async fn search_news(&self, query: &str, params: &NewsParams) -> ApiResult<Vec<Article>> {
        let mut pairs: Vec<(&str, String)> = vec![("q", query.to_string())];
        pairs.extend(params.query_pairs());
        self.http.get("/news/search", &pairs).await
    }

    async fn sources(&self) -> ApiResult<Vec<Source>> {
        self.http.get("/news/sources", &[]).await
    }

    async fn categories(&self) -> ApiResult<Vec<Category>> {
        self.http.get("/news/categories", &[]).await
    }

    async fn news_by_category(
        &self,
        category: &str,
        limit: Option<u32>,
    ) -> ApiResult<Vec<Article>> {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(limit) = limit {
            pairs.push(("limit", limit.to_string()));
        }
        self.http
            .get(&format!("/news/category/{category}"), &pairs)
            .await
    }
}
