use std::{collections::VecDeque, sync::Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    api::{AnalysisApi, AuthApi, NewsApi},
    types::{
        ActionResponse, AnalysisParams, Article, ArticleRef, AuthSession, Category,
        ChangePasswordRequest, NewUser, NewsParams, PersonalizedFeed, ProfileUpdate, Source, User,
    },
    ApiError, ApiResult,
};

/// A queue of mocked results for one endpoint.
struct MockQueue<T> {
    endpoint: &'static str,
    results: Mutex<VecDeque<ApiResult<T>>>,
}

impl<T> MockQueue<T> {
    fn new(endpoint: &'static str) -> Self {
        Self {
            endpoint,
            results: Mutex::new(VecDeque::new()),
        }
    }

    fn enqueue(&self, result: ApiResult<T>) {
        self.results
            .lock()
            .expect("mock state poisoned")
            .push_back(result);
    }

    fn pop(&self) -> ApiResult<T> {
        self.results
            .lock()
            .expect("mock state poisoned")
            .pop_front()
            .unwrap_or_else(|| {
                Err(ApiError::InvalidInput(format!(
                    "no mocked {} results available",
                    self.endpoint
                )))
            })
    }
}

/// Recorded inputs per endpoint, so tests can assert which calls happened
/// (and, for the refusal paths, that none did).
#[derive(Default)]
struct TrackedCalls {
    login: Mutex<Vec<(String, String)>>,
    register: Mutex<Vec<NewUser>>,
    update_profile: Mutex<Vec<ProfileUpdate>>,
    change_password: Mutex<Vec<ChangePasswordRequest>>,
    view_news: Mutex<Vec<(String, ArticleRef)>>,
    save_post: Mutex<Vec<(String, ArticleRef)>>,
    personalized_feed: Mutex<usize>,
    latest_news: Mutex<Vec<NewsParams>>,
    search_news: Mutex<Vec<(String, NewsParams)>>,
    sources: Mutex<usize>,
    categories: Mutex<usize>,
    news_by_category: Mutex<Vec<(String, Option<u32>)>>,
    sentiment_trends: Mutex<Vec<AnalysisParams>>,
    top_entities: Mutex<Vec<AnalysisParams>>,
    category_distribution: Mutex<Vec<AnalysisParams>>,
    source_analysis: Mutex<Vec<AnalysisParams>>,
}

fn record<T>(calls: &Mutex<Vec<T>>, value: T) {
    calls.lock().expect("mock state poisoned").push(value);
}

fn count(calls: &Mutex<usize>) {
    *calls.lock().expect("mock state poisoned") += 1;
}

fn cloned<T: Clone>(calls: &Mutex<Vec<T>>) -> Vec<T> {
    calls.lock().expect("mock state poisoned").clone()
}

/// Mock implementation of all three endpoint traits: yields queued results
/// in order and records inputs. An empty queue yields an error, so a test
/// that forgets to enqueue fails loudly instead of hanging on a default.
pub struct MockApiClient {
    login_results: MockQueue<AuthSession>,
    register_results: MockQueue<AuthSession>,
    update_profile_results: MockQueue<User>,
    change_password_results: MockQueue<()>,
    view_news_results: MockQueue<ActionResponse>,
    save_post_results: MockQueue<ActionResponse>,
    personalized_feed_results: MockQueue<PersonalizedFeed>,
    latest_news_results: MockQueue<Vec<Article>>,
    search_news_results: MockQueue<Vec<Article>>,
    sources_results: MockQueue<Vec<Source>>,
    categories_results: MockQueue<Vec<Category>>,
    news_by_category_results: MockQueue<Vec<Article>>,
    sentiment_trends_results: MockQueue<Value>,
    top_entities_results: MockQueue<Value>,
    category_distribution_results: MockQueue<Value>,
    source_analysis_results: MockQueue<Value>,
    calls: TrackedCalls,
}

impl Default for MockApiClient {
    fn default() -> Self {
        Self {
            login_results: MockQueue::new("login"),
            register_results: MockQueue::new("register"),
            update_profile_results: MockQueue::new("update_profile"),
            change_password_results: MockQueue::new("change_password"),
            view_news_results: MockQueue::new("view_news"),
            save_post_results: MockQueue::new("save_post"),
            personalized_feed_results: MockQueue::new("personalized_feed"),
            latest_news_results: MockQueue::new("latest_news"),
            search_news_results: MockQueue::new("search_news"),
            sources_results: MockQueue::new("sources"),
            categories_results: MockQueue::new("categories"),
            news_by_category_results: MockQueue::new("news_by_category"),
            sentiment_trends_results: MockQueue::new("sentiment_trends"),
            top_entities_results: MockQueue::new("top_entities"),
            category_distribution_results: MockQueue::new("category_distribution"),
            source_analysis_results: MockQueue::new("source_analysis"),
            calls: TrackedCalls::default(),
        }
    }
}

impl MockApiClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue_login(&self, result: ApiResult<AuthSession>) -> &Self {
        self.login_results.enqueue(result);
        self
    }

    pub fn enqueue_register(&self, result: ApiResult<AuthSession>) -> &Self {
        self.register_results.enqueue(result);
        self
    }

    pub fn enqueue_update_profile(&self, result: ApiResult<User>) -> &Self {
        self.update_profile_results.enqueue(result);
        self
    }

    pub fn enqueue_change_password(&self, result: ApiResult<()>) -> &Self {
        self.change_password_results.enqueue(result);
        self
    }

    pub fn enqueue_view_news(&self, result: ApiResult<ActionResponse>) -> &Self {
        self.view_news_results.enqueue(result);
        self
    }

    pub fn enqueue_save_post(&self, result: ApiResult<ActionResponse>) -> &Self {
        self.save_post_results.enqueue(result);
        self
    }

    pub fn enqueue_personalized_feed(&self, result: ApiResult<PersonalizedFeed>) -> &Self {
        self.personalized_feed_results.enqueue(result);
        self
    }

    pub fn enqueue_latest_news(&self, result: ApiResult<Vec<Article>>) -> &Self {
        self.latest_news_results.enqueue(result);
        self
    }

    pub fn enqueue_search_news(&self, result: ApiResult<Vec<Article>>) -> &Self {
        self.search_news_results.enqueue(result);
        self
    }

    pub fn enqueue_sources(&self, result: ApiResult<Vec<Source>>) -> &Self {
        self.sources_results.enqueue(result);
        self
    }

    pub fn enqueue_categories(&self, result: ApiResult<Vec<Category>>) -> &Self {
        self.categories_results.enqueue(result);
        self
    }

    pub fn enqueue_news_by_category(&self, result: ApiResult<Vec<Article>>) -> &Self {
        self.news_by_category_results.enqueue(result);
        self
    }

    pub fn enqueue_sentiment_trends(&self, result: ApiResult<Value>) -> &Self {
        self.sentiment_trends_results.enqueue(result);
        self
    }

    pub fn enqueue_top_entities(&self, result: ApiResult<Value>) -> &Self {
        self.top_entities_results.enqueue(result);
        self
    }

    pub fn enqueue_category_distribution(&self, result: ApiResult<Value>) -> &Self {
        self.category_distribution_results.enqueue(result);
        self
    }

    pub fn enqueue_source_analysis(&self, result: ApiResult<Value>) -> &Self {
        self.source_analysis_results.enqueue(result);
        self
    }

    #[must_use]
    pub fn login_calls(&self) -> Vec<(String, String)> {
        cloned(&self.calls.login)
    }

    #[must_use]
    pub fn register_calls(&self) -> Vec<NewUser> {
        cloned(&self.calls.register)
    }

    #[must_use]
    pub fn update_profile_calls(&self) -> Vec<ProfileUpdate> {
        cloned(&self.calls.update_profile)
    }

    #[must_use]
    pub fn change_password_calls(&self) -> Vec<ChangePasswordRequest> {
        cloned(&self.calls.change_password)
    }

    #[must_use]
    pub fn view_news_calls(&self) -> Vec<(String, ArticleRef)> {
        cloned(&self.calls.view_news)
    }

    #[must_use]
    pub fn save_post_calls(&self) -> Vec<(String, ArticleRef)> {
        cloned(&self.calls.save_post)
    }

    #[must_use]
    pub fn personalized_feed_calls(&self) -> usize {
        *self.calls.personalized_feed.lock().expect("mock state poisoned")
    }

    #[must_use]
    pub fn latest_news_calls(&self) -> Vec<NewsParams> {
        cloned(&self.calls.latest_news)
    }

    #[must_use]
    pub fn search_news_calls(&self) -> Vec<(String, NewsParams)> {
        cloned(&self.calls.search_news)
    }

    #[must_use]
    pub fn sources_calls(&self) -> usize {
        *self.calls.sources.lock().expect("mock state poisoned")
    }

    #[must_use]
    pub fn categories_calls(&self) -> usize {
        *self.calls.categories.lock().expect("mock state poisoned")
    }

    #[must_use]
    pub fn news_by_category_calls(&self) -> Vec<(String, Option<u32>)> {
        cloned(&self.calls.news_by_category)
    }

    #[must_use]
    pub fn sentiment_trends_calls(&self) -> Vec<AnalysisParams> {
        cloned(&self.calls.sentiment_trends)
    }

    #[must_use]
    pub fn top_entities_calls(&self) -> Vec<AnalysisParams> {
        cloned(&self.calls.top_entities)
    }

    #[must_use]
    pub fn category_distribution_calls(&self) -> Vec<AnalysisParams> {
        cloned(&self.calls.category_distribution)
    }

    #[must_use]
    pub fn source_analysis_calls(&self) -> Vec<AnalysisParams> {
        cloned(&self.calls.source_analysis)
    }
}

#[async_trait]
impl AuthApi for MockApiClient {
    async fn login(&self, username: &str, password: &str) -> ApiResult<AuthSession> {
        record(
            &self.calls.login,
            (username.to_string(), password.to_string()),
        );
        self.login_results.pop()
    }

    async fn register(&self, new_user: &NewUser) -> ApiResult<AuthSession> {
        record(&self.calls.register, new_user.clone());
        self.register_results.pop()
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<User> {
        record(&self.calls.update_profile, update.clone());
        self.update_profile_results.pop()
    }

    async fn change_password(&self, request: &ChangePasswordRequest) -> ApiResult<()> {
        record(&self.calls.change_password, request.clone());
        self.change_password_results.pop()
    }

    async fn view_news(&self, user_id: &str, article: &ArticleRef) -> ApiResult<ActionResponse> {
        record(
            &self.calls.view_news,
            (user_id.to_string(), article.clone()),
        );
        self.view_news_results.pop()
    }

    async fn save_post(&self, user_id: &str, article: &ArticleRef) -> ApiResult<ActionResponse> {
        record(
            &self.calls.save_post,
            (user_id.to_string(), article.clone()),
        );
        self.save_post_results.pop()
    }

    async fn personalized_feed(&self) -> ApiResult<PersonalizedFeed> {
        count(&self.calls.personalized_feed);
        self.personalized_feed_results.pop()
    }
}

#[async_trait]
impl NewsApi for MockApiClient {
    async fn latest_news(&self, params: &NewsParams) -> ApiResult<Vec<Article>> {
        record(&self.calls.latest_news, params.clone());
        self.latest_news_results.pop()
    }

    async fn search_news(&self, query: &str, params: &NewsParams) -> ApiResult<Vec<Article>> {
        record(
            &self.calls.search_news,
            (query.to_string(), params.clone()),
        );
        self.search_news_results.pop()
    }

    async fn sources(&self) -> ApiResult<Vec<Source>> {
        count(&self.calls.sources);
        self.sources_results.pop()
    }

    async fn categories(&self) -> ApiResult<Vec<Category>> {
        count(&self.calls.categories);
        self.categories_results.pop()
    }

    async fn news_by_category(
        &self,
        category: &str,
        limit: Option<u32>,
    ) -> ApiResult<Vec<Article>> {
        record(
            &self.calls.news_by_category,
            (category.to_string(), limit),
        );
        self.news_by_category_results.pop()
    }
}

#[async_trait]
impl AnalysisApi for MockApiClient {
    async fn sentiment_trends(&self, params: &AnalysisParams) -> ApiResult<Value> {
        record(&self.calls.sentiment_trends, params.clone());
        self.sentiment_trends_results.pop()
    }

    async fn top_entities(&self, params: &AnalysisParams) -> ApiResult<Value> {
        record(&self.calls.top_entities, params.clone());
        self.top_entities_results.pop()
    }

    async fn category_distribution(&self, params: &AnalysisParams) -> ApiResult<Value> {
        record(&self.calls.category_distribution, params.clone());
        self.category_distribution_results.pop()
    }

    async fn source_analysis(&self, params: &AnalysisParams) -> ApiResult<Value> {
        record(&self.calls.source_analysis, params.clone());
        self.source_analysis_results.pop()
    }
}
