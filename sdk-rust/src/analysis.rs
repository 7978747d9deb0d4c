use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::{api::AnalysisApi, http::HttpClient, types::AnalysisParams, ApiResult};

/// HTTP implementation of the analysis endpoints.
pub struct AnalysisClient {
    http: Arc<HttpClient>,
}

impl AnalysisClient {
    #[must_use]
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl AnalysisApi for AnalysisClient {
    async fn sentiment_trends(&self, params: &AnalysisParams) -> ApiResult<Value> {
        self.http
            .get("/analysis/sentiment-trends", &params.query_pairs())
            .await
    }

    async fn top_entities(&self, params: &AnalysisParams) -> ApiResult<Value> {
        self.http
            .get("/analysis/top-entities", &params.query_pairs())
            .await
    }

    async fn category_distribution(&self, params: &AnalysisParams) -> ApiResult<Value> {
        self.http
            .get("/analysis/category-distribution", &params.query_pairs())
            .await
    }

    async fn source_analysis(&self, params: &AnalysisParams) -> ApiResult<Value> {
        self.http
            .get("/analysis/source-analysis", &params.query_pairs())
            .await
    }
}
