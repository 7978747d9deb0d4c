use std::sync::{Arc, RwLock};

use newsphere_sdk::{
    AnalysisApi, AnalysisParams, Article, CategoryInfo, NewsApi, NewsParams, Source,
};
use serde_json::Value;

use crate::notify::{error_text, Notifier};

/// Default look-back window for the analysis endpoints, in days.
pub const DEFAULT_DAYS: u32 = 7;

/// Active filter selection, composed into fetch parameters.
///
/// Mutated only through [`NewsStore::set_filter`] and
/// [`NewsStore::clear_filters`]; mutations never trigger a fetch. The view
/// layer re-fetches after changing a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub category: Option<String>,
    pub source: Option<String>,
    pub days: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: None,
            source: None,
            days: DEFAULT_DAYS,
        }
    }
}

/// A single-field filter mutation; the other fields keep their values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    Category(Option<String>),
    Source(Option<String>),
    Days(u32),
}

/// Which owned slices are currently loading. One flag per slice, so
/// unrelated fetches never observe each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingFlags {
    pub articles: bool,
    pub sources: bool,
    pub categories: bool,
    pub sentiment_trends: bool,
    pub top_entities: bool,
    pub category_distribution: bool,
    pub source_analysis: bool,
}

#[derive(Default)]
struct NewsState {
    articles: Vec<Article>,
    sources: Vec<Source>,
    categories: Vec<CategoryInfo>,
    sentiment_trends: Option<Value>,
    top_entities: Option<Value>,
    category_distribution: Option<Value>,
    source_analysis: Option<Value>,
    filters: FilterState,
    loading: LoadingFlags,
}

/// Owns fetched article lists, reference data, analysis aggregates, and
/// the active filter selection.
///
/// Every fetch replaces its slice wholesale. Overlapping fetches for the
/// same slice are not sequenced: the last response to complete wins, even
/// when it belongs to an older request.
pub struct NewsStore {
    news: Arc<dyn NewsApi>,
    analysis: Arc<dyn AnalysisApi>,
    notifier: Arc<dyn Notifier>,
    state: RwLock<NewsState>,
}

impl NewsStore {
    pub fn new(
        news: Arc<dyn NewsApi>,
        analysis: Arc<dyn AnalysisApi>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            news,
            analysis,
            notifier,
            state: RwLock::new(NewsState::default()),
        }
    }

    fn with_state<R>(&self, apply: impl FnOnce(&mut NewsState) -> R) -> R {
        apply(&mut self.state.write().expect("news state poisoned"))
    }

    fn read_state<R>(&self, read: impl FnOnce(&NewsState) -> R) -> R {
        read(&self.state.read().expect("news state poisoned"))
    }

    fn set_loading(&self, flag: fn(&mut LoadingFlags) -> &mut bool, value: bool) {
        self.with_state(|state| *flag(&mut state.loading) = value);
    }

    #[must_use]
    pub fn articles(&self) -> Vec<Article> {
        self.read_state(|state| state.articles.clone())
    }

    #[must_use]
    pub fn sources(&self) -> Vec<Source> {
        self.read_state(|state| state.sources.clone())
    }

    /// Categories normalized to the object form; never the raw union.
    #[must_use]
    pub fn categories(&self) -> Vec<CategoryInfo> {
        self.read_state(|state| state.categories.clone())
    }

    #[must_use]
    pub fn sentiment_trends(&self) -> Option<Value> {
        self.read_state(|state| state.sentiment_trends.clone())
    }

    #[must_use]
    pub fn top_entities(&self) -> Option<Value> {
        self.read_state(|state| state.top_entities.clone())
    }

    #[must_use]
    pub fn category_distribution(&self) -> Option<Value> {
        self.read_state(|state| state.category_distribution.clone())
    }

    #[must_use]
    pub fn source_analysis(&self) -> Option<Value> {
        self.read_state(|state| state.source_analysis.clone())
    }

    #[must_use]
    pub fn filters(&self) -> FilterState {
        self.read_state(|state| state.filters.clone())
    }

    #[must_use]
    pub fn loading(&self) -> LoadingFlags {
        self.read_state(|state| state.loading)
    }

    /// Fetch the latest articles and replace the stored list wholesale.
    /// Explicit params win; unset category/source fall back to the active
    /// filters.
    pub async fn fetch_latest_news(&self, params: &NewsParams) -> bool {
        let params = self.compose_news_params(params);
        self.set_loading(|loading| &mut loading.articles, true);
        let result = self.news.latest_news(&params).await;
        self.set_loading(|loading| &mut loading.articles, false);

        match result {
            Ok(articles) => {
                self.with_state(|state| state.articles = articles);
                true
            }
            Err(error) => {
                tracing::debug!(%error, "latest news fetch failed");
                self.notifier
                    .error(&error_text(&error, "Failed to fetch latest news"));
                false
            }
        }
    }

    /// Keyword search; replaces the stored article list wholesale.
    pub async fn search_news(&self, query: &str, params: &NewsParams) -> bool {
        let params = self.compose_news_params(params);
        self.set_loading(|loading| &mut loading.articles, true);
        let result = self.news.search_news(query, &params).await;
        self.set_loading(|loading| &mut loading.articles, false);

        match result {
            Ok(articles) => {
                self.with_state(|state| state.articles = articles);
                true
            }
            Err(error) => {
                tracing::debug!(%error, query, "news search failed");
                self.notifier
                    .error(&error_text(&error, "Failed to search news"));
                false
            }
        }
    }

    /// Articles for one category; replaces the stored article list.
    pub async fn fetch_by_category(&self, category: &str, limit: Option<u32>) -> bool {
        self.set_loading(|loading| &mut loading.articles, true);
        let result = self.news.news_by_category(category, limit).await;
        self.set_loading(|loading| &mut loading.articles, false);

        match result {
            Ok(articles) => {
                self.with_state(|state| state.articles = articles);
                true
            }
            Err(error) => {
                tracing::debug!(%error, category, "category fetch failed");
                self.notifier
                    .error(&error_text(&error, "Failed to fetch news articles"));
                false
            }
        }
    }

    pub async fn fetch_sources(&self) -> bool {
        self.set_loading(|loading| &mut loading.sources, true);
        let result = self.news.sources().await;
        self.set_loading(|loading| &mut loading.sources, false);

        match result {
            Ok(sources) => {
                self.with_state(|state| state.sources = sources);
                true
            }
            Err(error) => {
                tracing::debug!(%error, "sources fetch failed");
                self.notifier
                    .error(&error_text(&error, "Failed to fetch news sources"));
                false
            }
        }
    }

    /// Fetch categories and normalize them to the object form at this
    /// boundary; downstream consumers never re-check the shape.
    pub async fn fetch_categories(&self) -> bool {
        self.set_loading(|loading| &mut loading.categories, true);
        let result = self.news.categories().await;
        self.set_loading(|loading| &mut loading.categories, false);

        match result {
            Ok(categories) => {
                let normalized: Vec<CategoryInfo> =
                    categories.into_iter().map(CategoryInfo::from).collect();
                self.with_state(|state| state.categories = normalized);
                true
            }
            Err(error) => {
                tracing::debug!(%error, "categories fetch failed");
                self.notifier
                    .error(&error_text(&error, "Failed to fetch news categories"));
                false
            }
        }
    }

    pub async fn fetch_sentiment_trends(&self) -> bool {
        let params = self.analysis_params();
        self.set_loading(|loading| &mut loading.sentiment_trends, true);
        let result = self.analysis.sentiment_trends(&params).await;
        self.set_loading(|loading| &mut loading.sentiment_trends, false);

        match result {
            Ok(trends) => {
                self.with_state(|state| state.sentiment_trends = Some(trends));
                true
            }
            Err(error) => {
                tracing::debug!(%error, "sentiment trends fetch failed");
                self.notifier
                    .error(&error_text(&error, "Failed to fetch sentiment trends"));
                false
            }
        }
    }

    pub async fn fetch_top_entities(&self) -> bool {
        let params = self.analysis_params();
        self.set_loading(|loading| &mut loading.top_entities, true);
        let result = self.analysis.top_entities(&params).await;
        self.set_loading(|loading| &mut loading.top_entities, false);

        match result {
            Ok(entities) => {
                self.with_state(|state| state.top_entities = Some(entities));
                true
            }
            Err(error) => {
                tracing::debug!(%error, "top entities fetch failed");
                self.notifier
                    .error(&error_text(&error, "Failed to fetch top entities"));
                false
            }
        }
    }

    pub async fn fetch_category_distribution(&self) -> bool {
        let params = self.analysis_params();
        self.set_loading(|loading| &mut loading.category_distribution, true);
        let result = self.analysis.category_distribution(&params).await;
        self.set_loading(|loading| &mut loading.category_distribution, false);

        match result {
            Ok(distribution) => {
                self.with_state(|state| state.category_distribution = Some(distribution));
                true
            }
            Err(error) => {
                tracing::debug!(%error, "category distribution fetch failed");
                self.notifier
                    .error(&error_text(&error, "Failed to fetch category distribution"));
                false
            }
        }
    }

    pub async fn fetch_source_analysis(&self) -> bool {
        let params = self.analysis_params();
        self.set_loading(|loading| &mut loading.source_analysis, true);
        let result = self.analysis.source_analysis(&params).await;
        self.set_loading(|loading| &mut loading.source_analysis, false);

        match result {
            Ok(analysis) => {
                self.with_state(|state| state.source_analysis = Some(analysis));
                true
            }
            Err(error) => {
                tracing::debug!(%error, "source analysis fetch failed");
                self.notifier
                    .error(&error_text(&error, "Failed to fetch source analysis"));
                false
            }
        }
    }

    /// Mutate exactly one filter field; the others keep their values.
    /// Never triggers a fetch.
    pub fn set_filter(&self, filter: Filter) {
        self.with_state(|state| match filter {
            Filter::Category(category) => state.filters.category = category,
            Filter::Source(source) => state.filters.source = source,
            Filter::Days(days) => state.filters.days = days,
        });
    }

    /// Reset the filter selection to its defaults.
    pub fn clear_filters(&self) {
        self.with_state(|state| state.filters = FilterState::default());
    }

    /// Case-insensitive substring search over the normalized category
    /// names.
    #[must_use]
    pub fn search_categories(&self, query: &str) -> Vec<CategoryInfo> {
        let query = query.to_lowercase();
        self.read_state(|state| {
            state
                .categories
                .iter()
                .filter(|category| category.name.to_lowercase().contains(&query))
                .cloned()
                .collect()
        })
    }

    /// Drop all owned slices and filters back to their initial state.
    /// Test isolation hook.
    pub fn reset(&self) {
        self.with_state(|state| *state = NewsState::default());
    }

    fn compose_news_params(&self, params: &NewsParams) -> NewsParams {
        self.read_state(|state| NewsParams {
            limit: params.limit,
            category: params
                .category
                .clone()
                .or_else(|| state.filters.category.clone()),
            source: params
                .source
                .clone()
                .or_else(|| state.filters.source.clone()),
        })
    }

    fn analysis_params(&self) -> AnalysisParams {
        self.read_state(|state| AnalysisParams {
            category: state.filters.category.clone(),
            source: state.filters.source.clone(),
            days: Some(state.filters.days),
            limit: None,
        })
    }
}
