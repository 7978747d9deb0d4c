use std::sync::Arc;

use newsphere_sdk::{
    AnalysisClient, AuthClient, ClientStorage, FileStorage, HttpClient, HttpClientOptions,
    NewsClient,
};

use crate::{
    errors::StoreError,
    news::NewsStore,
    notify::{Notifier, TracingNotifier},
    opener::{LinkOpener, TracingOpener},
    session::SessionStore,
};

/// Options for wiring an [`AppContext`].
#[derive(Default)]
pub struct AppContextOptions {
    pub base_url: String,
    /// Durable client storage; defaults to the file-backed storage under
    /// the platform data directory.
    pub storage: Option<Arc<dyn ClientStorage>>,
    pub notifier: Option<Arc<dyn Notifier>>,
    pub opener: Option<Arc<dyn LinkOpener>>,
}

/// Explicitly injected application context: the two stores plus the wiring
/// between them. Created once at startup and handed to the view layer in
/// place of process-wide store singletons.
pub struct AppContext {
    session: Arc<SessionStore>,
    news: Arc<NewsStore>,
}

impl AppContext {
    pub fn new(mut options: AppContextOptions) -> Result<Self, StoreError> {
        let storage: Arc<dyn ClientStorage> = match options.storage.take() {
            Some(storage) => storage,
            None => Arc::new(FileStorage::open_default()?),
        };
        let notifier: Arc<dyn Notifier> = options
            .notifier
            .take()
            .unwrap_or_else(|| Arc::new(TracingNotifier));
        let opener: Arc<dyn LinkOpener> = options
            .opener
            .take()
            .unwrap_or_else(|| Arc::new(TracingOpener));

        let http = Arc::new(HttpClient::new(HttpClientOptions {
            base_url: options.base_url,
            storage: Arc::clone(&storage),
            client: None,
        }));

        let session = Arc::new(SessionStore::new(
            Arc::new(AuthClient::new(Arc::clone(&http))),
            storage,
            Arc::clone(&notifier),
            opener,
        ));
        let news = Arc::new(NewsStore::new(
            Arc::new(NewsClient::new(Arc::clone(&http))),
            Arc::new(AnalysisClient::new(http)),
            notifier,
        ));

        Ok(Self { session, news })
    }

    #[must_use]
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    #[must_use]
    pub fn news(&self) -> &Arc<NewsStore> {
        &self.news
    }

    /// Tear both stores down to their initial state. Test isolation hook.
    pub fn reset(&self) {
        self.session.reset();
        self.news.reset();
    }
}
