mod analysis;
mod api;
mod auth;
mod errors;
mod http;
mod news;
pub mod newsphere_sdk_test;
mod storage;
mod types;

pub use analysis::AnalysisClient;
pub use api::{AnalysisApi, AuthApi, NewsApi};
pub use auth::AuthClient;
pub use errors::*;
pub use http::{HttpClient, HttpClientOptions};
pub use news::NewsClient;
pub use reqwest::StatusCode;
pub use storage::{ClientStorage, FileStorage, MemoryStorage, StorageError, TOKEN_KEY, USER_KEY};
pub use types::*;
