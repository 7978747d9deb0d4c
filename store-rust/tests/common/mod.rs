#![allow(dead_code)]

use std::sync::Arc;

use newsphere_sdk::{
    newsphere_sdk_test::MockApiClient, AnalysisApi, ApiError, Article, ArticleSource, AuthApi,
    AuthSession, ClientStorage, MemoryStorage, NewsApi, StatusCode, User,
};
use newsphere_store::{
    LinkOpener, NewsStore, Notifier, RecordingNotifier, RecordingOpener, SessionStore,
};

pub struct SessionHarness {
    pub api: Arc<MockApiClient>,
    pub storage: Arc<MemoryStorage>,
    pub notifier: Arc<RecordingNotifier>,
    pub opener: Arc<RecordingOpener>,
    pub store: SessionStore,
}

pub fn session_harness() -> SessionHarness {
    session_harness_with_storage(Arc::new(MemoryStorage::new()))
}

pub fn session_harness_with_storage(storage: Arc<MemoryStorage>) -> SessionHarness {
    let api = Arc::new(MockApiClient::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let opener = Arc::new(RecordingOpener::new());
    let store = SessionStore::new(
        Arc::clone(&api) as Arc<dyn AuthApi>,
        Arc::clone(&storage) as Arc<dyn ClientStorage>,
        Arc::clone(&notifier) as Arc<dyn Notifier>,
        Arc::clone(&opener) as Arc<dyn LinkOpener>,
    );
    SessionHarness {
        api,
        storage,
        notifier,
        opener,
        store,
    }
}

pub struct NewsHarness {
    pub api: Arc<MockApiClient>,
    pub notifier: Arc<RecordingNotifier>,
    pub store: NewsStore,
}

pub fn news_harness() -> NewsHarness {
    let api = Arc::new(MockApiClient::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let store = NewsStore::new(
        Arc::clone(&api) as Arc<dyn NewsApi>,
        Arc::clone(&api) as Arc<dyn AnalysisApi>,
        Arc::clone(&notifier) as Arc<dyn Notifier>,
    );
    NewsHarness {
        api,
        notifier,
        store,
    }
}

pub fn sample_user(id: &str) -> User {
    User {
        id: id.to_string(),
        username: Some("reader".to_string()),
        email: "reader@example.com".to_string(),
        name: "Reader".to_string(),
        country: "NZ".to_string(),
        saved_articles: Vec::new(),
        recent_activity: Vec::new(),
        created_at: None,
        updated_at: None,
    }
}

pub fn auth_session(user: User, token: &str) -> AuthSession {
    AuthSession {
        user,
        token: token.to_string(),
        token_type: Some("bearer".to_string()),
    }
}

pub fn sample_article(title: &str) -> Article {
    Article {
        id: None,
        title: title.to_string(),
        description: Some(format!("{title} description")),
        url_to_image: None,
        published_at: Some("2026-01-02T03:04:05Z".to_string()),
        source: ArticleSource {
            name: "Wire".to_string(),
        },
        url: format!("https://example.com/{title}"),
    }
}

pub fn status_error(status: StatusCode, detail: Option<&str>) -> ApiError {
    ApiError::Status {
        status,
        detail: detail.map(ToString::to_string),
    }
}
