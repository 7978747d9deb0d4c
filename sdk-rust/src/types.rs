use serde::{Deserialize, Deserializer, Serialize};

/// A registered Newsphere user. Owned by the session store and replaced
/// wholesale on profile update; the server is the source of truth.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub email: String,
    pub name: String,
    pub country: String,
    /// Articles the user saved from the feed, in save order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub saved_articles: Vec<Article>,
    /// Recent user actions (views, saves), newest last.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recent_activity: Vec<ActivityEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A single entry in a user's activity history. Server-shaped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityEntry {
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// A news article as returned by the backend. Immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image to render with the article, when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_to_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(default)]
    pub source: ArticleSource,
    pub url: String,
}

impl Article {
    /// The key used when rendering lists: the id when the backend provides
    /// one, else the URL. URLs are not guaranteed unique, but the backend
    /// treats them as the de-facto key.
    #[must_use]
    pub fn identity(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.url)
    }
}

/// The `source` object embedded in an article.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ArticleSource {
    #[serde(default)]
    pub name: String,
}

/// A news source from the reference-data endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Source {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A category as the backend returns it: either a bare name or a full
/// object. Resolved to [`CategoryInfo`] once at the store boundary; nothing
/// downstream consumes the raw union.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Category {
    Name(String),
    Info(CategoryInfo),
}

/// The normalized category shape consumed by the view layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryInfo {
    /// Category ids arrive as strings or numbers depending on the backend
    /// collection; both are carried as strings.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl From<Category> for CategoryInfo {
    fn from(category: Category) -> Self {
        match category {
            Category::Name(name) => Self {
                id: name.clone(),
                name,
                description: String::new(),
            },
            Category::Info(info) => info,
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(i64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(value) => value,
        StringOrNumber::Number(value) => value.to_string(),
    })
}

/// Credentials-exchange response, returned by both login and register.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

/// Input for account creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub name: String,
    pub country: String,
    pub password: String,
}

/// Partial profile update; `None` fields are left untouched by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Credential rotation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Article reference submitted when recording a view or saving a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRef {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub news_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_to_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
}

impl From<&Article> for ArticleRef {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            description: article.description.clone(),
            news_url: article.url.clone(),
            url_to_image: article.url_to_image.clone(),
            source_name: Some(article.source.name.clone()),
        }
    }
}

/// Acknowledgement returned by the view-news and save-post endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// URL to open after a recorded view, when the backend echoes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news_url: Option<String>,
}

/// Personalized feed response from the world-news endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PersonalizedFeed {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// Query parameters for the latest-news and search feeds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsParams {
    pub limit: Option<u32>,
    pub category: Option<String>,
    pub source: Option<String>,
}

impl NewsParams {
    /// Query pairs with unset fields omitted.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(source) = &self.source {
            pairs.push(("source", source.clone()));
        }
        pairs
    }
}

/// Query parameters shared by the analysis endpoints. Endpoints ignore the
/// fields they do not use.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisParams {
    pub category: Option<String>,
    pub source: Option<String>,
    pub days: Option<u32>,
    pub limit: Option<u32>,
}

impl AnalysisParams {
    /// Query pairs with unset fields omitted.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(source) = &self.source {
            pairs.push(("source", source.clone()));
        }
        if let Some(days) = self.days {
            pairs.push(("days", days.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}
