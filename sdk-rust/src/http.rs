use std::sync::Arc;

use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client, RequestBuilder,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    storage::{ClientStorage, TOKEN_KEY},
    ApiError, ApiResult,
};

/// Options for constructing an [`HttpClient`].
#[derive(Clone)]
pub struct HttpClientOptions {
    pub base_url: String,
    pub storage: Arc<dyn ClientStorage>,
    pub client: Option<Client>,
}

/// The HTTP adapter every endpoint client dispatches through.
///
/// Attaches the persisted session token as a bearer authorization header
/// when one is present in durable storage. Performs a single request per
/// call: no retries, no timeout handling.
pub struct HttpClient {
    base_url: String,
    client: Client,
    storage: Arc<dyn ClientStorage>,
}

impl HttpClient {
    #[must_use]
    pub fn new(mut options: HttpClientOptions) -> Self {
        let base_url = options.base_url.trim_end_matches('/').to_string();
        let client = options.client.take().unwrap_or_default();
        Self {
            base_url,
            client,
            storage: options.storage,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Bearer authorization from durable storage, when a token is persisted.
    fn auth_headers(&self) -> ApiResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some(token) = self.storage.get(TOKEN_KEY) {
            let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|error| {
                ApiError::InvalidInput(format!("Invalid bearer token header value: {error}"))
            })?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    pub async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<R> {
        let request = self
            .client
            .get(self.url(path))
            .headers(self.auth_headers()?)
            .query(query);
        Self::dispatch(path, request).await
    }

    pub async fn post<T: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> ApiResult<R> {
        let request = self
            .client
            .post(self.url(path))
            .headers(self.auth_headers()?)
            .json(body);
        Self::dispatch(path, request).await
    }

    pub async fn put<T: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> ApiResult<R> {
        let request = self
            .client
            .put(self.url(path))
            .headers(self.auth_headers()?)
            .json(body);
        Self::dispatch(path, request).await
    }

    async fn dispatch<R: DeserializeOwned>(path: &str, request: RequestBuilder) -> ApiResult<R> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<R>().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%status, path, "request failed");
            Err(ApiError::Status {
                status,
                detail: extract_detail(&body),
            })
        }
    }
}

/// Pull the server's error message out of a non-2xx body. The backend uses
/// `{"detail": ...}` for auth and validation errors and `{"message": ...}`
/// for the user-action routes.
fn extract_detail(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        detail: Option<String>,
        message: Option<String>,
    }

    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.detail.or(parsed.message)
}
