use std::sync::{Arc, RwLock};

use newsphere_sdk::{
    Article, ArticleRef, AuthApi, ChangePasswordRequest, ClientStorage, NewUser, ProfileUpdate,
    User, TOKEN_KEY, USER_KEY,
};

use crate::{
    notify::{error_text, Notifier},
    opener::LinkOpener,
};

#[derive(Default)]
struct SessionState {
    user: Option<User>,
    token: Option<String>,
    personalized: Vec<Article>,
    is_authenticating: bool,
    is_viewing_news: bool,
    is_saving_post: bool,
    is_fetching_feed: bool,
}

/// Owns the authenticated session: user identity, token, and the
/// user-scoped article actions.
///
/// The token and user are set and cleared together, in memory and in
/// durable storage. Every operation catches failures at its own boundary
/// and converts them into a boolean result plus a notification; nothing
/// propagates past the store.
pub struct SessionStore {
    api: Arc<dyn AuthApi>,
    storage: Arc<dyn ClientStorage>,
    notifier: Arc<dyn Notifier>,
    opener: Arc<dyn LinkOpener>,
    state: RwLock<SessionState>,
}

impl SessionStore {
    /// Create the store and restore a previously persisted session.
    ///
    /// Restore requires both storage keys; a half-present pair is
    /// discarded and cleared.
    pub fn new(
        api: Arc<dyn AuthApi>,
        storage: Arc<dyn ClientStorage>,
        notifier: Arc<dyn Notifier>,
        opener: Arc<dyn LinkOpener>,
    ) -> Self {
        let store = Self {
            api,
            storage,
            notifier,
            opener,
            state: RwLock::new(SessionState::default()),
        };
        store.restore();
        store
    }

    fn restore(&self) {
        let token = self.storage.get(TOKEN_KEY);
        let user = self
            .storage
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str::<User>(&raw).ok());
        match (token, user) {
            (Some(token), Some(user)) => {
                self.with_state(|state| {
                    state.token = Some(token);
                    state.user = Some(user);
                });
            }
            (None, None) => {}
            _ => {
                tracing::warn!("discarding partially persisted session");
                self.storage.remove(TOKEN_KEY);
                self.storage.remove(USER_KEY);
            }
        }
    }

    fn with_state<R>(&self, apply: impl FnOnce(&mut SessionState) -> R) -> R {
        apply(&mut self.state.write().expect("session state poisoned"))
    }

    fn read_state<R>(&self, read: impl FnOnce(&SessionState) -> R) -> R {
        read(&self.state.read().expect("session state poisoned"))
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.read_state(|state| state.user.clone())
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.read_state(|state| state.token.clone())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read_state(|state| state.token.is_some())
    }

    /// The personalized article list from the last successful feed fetch.
    #[must_use]
    pub fn personalized(&self) -> Vec<Article> {
        self.read_state(|state| state.personalized.clone())
    }

    #[must_use]
    pub fn is_authenticating(&self) -> bool {
        self.read_state(|state| state.is_authenticating)
    }

    #[must_use]
    pub fn is_viewing_news(&self) -> bool {
        self.read_state(|state| state.is_viewing_news)
    }

    #[must_use]
    pub fn is_saving_post(&self) -> bool {
        self.read_state(|state| state.is_saving_post)
    }

    #[must_use]
    pub fn is_fetching_feed(&self) -> bool {
        self.read_state(|state| state.is_fetching_feed)
    }

    /// Exchange credentials for a session. On success the user and token
    /// are set together, in memory and in durable storage.
    pub async fn login(&self, username: &str, password: &str) -> bool {
        self.with_state(|state| state.is_authenticating = true);
        let result = self.api.login(username, password).await;
        self.with_state(|state| state.is_authenticating = false);

        match result {
            Ok(session) => {
                self.install_session(session.user, session.token);
                self.notifier.success("Successfully logged in");
                true
            }
            Err(error) => {
                tracing::debug!(%error, "login failed");
                self.notifier.error(&error_text(&error, "Failed to login"));
                false
            }
        }
    }

    /// Create an account; the backend logs the new user in immediately.
    pub async fn register(&self, new_user: &NewUser) -> bool {
        self.with_state(|state| state.is_authenticating = true);
        let result = self.api.register(new_user).await;
        self.with_state(|state| state.is_authenticating = false);

        match result {
            Ok(session) => {
                self.install_session(session.user, session.token);
                self.notifier.success("Successfully registered");
                true
            }
            Err(error) => {
                tracing::debug!(%error, "registration failed");
                self.notifier.error(&error_text(&error, "Failed to register"));
                false
            }
        }
    }

    /// Clear the session from memory and durable storage. Cannot fail.
    pub fn logout(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        self.with_state(|state| {
            state.user = None;
            state.token = None;
        });
        self.notifier.success("Successfully logged out");
    }

    /// Update profile fields. On success the stored user is replaced
    /// wholesale with the server response; on failure nothing changes.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> bool {
        self.with_state(|state| state.is_authenticating = true);
        let result = self.api.update_profile(update).await;
        self.with_state(|state| state.is_authenticating = false);

        match result {
            Ok(user) => {
                self.persist_user(&user);
                self.with_state(|state| state.user = Some(user));
                self.notifier.success("Profile updated successfully");
                true
            }
            Err(error) => {
                self.notifier
                    .error(&error_text(&error, "Failed to update profile"));
                false
            }
        }
    }

    /// Rotate the credential. Carries no local state change.
    pub async fn change_password(&self, current_password: &str, new_password: &str) -> bool {
        self.with_state(|state| state.is_authenticating = true);
        let request = ChangePasswordRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        let result = self.api.change_password(&request).await;
        self.with_state(|state| state.is_authenticating = false);

        match result {
            Ok(()) => {
                self.notifier.success("Password changed successfully");
                true
            }
            Err(error) => {
                self.notifier
                    .error(&error_text(&error, "Failed to change password"));
                false
            }
        }
    }

    /// Record a view for the current user, then open the article
    /// externally. Refused without a network call when no identity is
    /// present.
    pub async fn view_news(&self, article: &ArticleRef) -> bool {
        self.with_state(|state| state.is_viewing_news = true);
        let Some(user_id) = self.read_state(|state| state.user.as_ref().map(|user| user.id.clone()))
        else {
            self.with_state(|state| state.is_viewing_news = false);
            self.notifier.error("Login to view the news!");
            return false;
        };

        let result = self.api.view_news(&user_id, article).await;
        self.with_state(|state| state.is_viewing_news = false);

        match result {
            Ok(response) if response.success => {
                self.notifier.success("News added to your history!");
                let url = response.news_url.as_deref().unwrap_or(&article.news_url);
                self.opener.open(url);
                true
            }
            Ok(response) => {
                self.notifier.error(
                    response
                        .message
                        .as_deref()
                        .unwrap_or("Login to view the news!"),
                );
                false
            }
            Err(error) => {
                tracing::debug!(%error, "view news failed");
                self.notifier
                    .error(&error_text(&error, "Login to view the news!"));
                false
            }
        }
    }

    /// Persist a saved post for the current user. Refused without a
    /// network call when no identity is present.
    pub async fn save_post(&self, article: &ArticleRef) -> bool {
        self.with_state(|state| state.is_saving_post = true);
        let Some(user_id) = self.read_state(|state| state.user.as_ref().map(|user| user.id.clone()))
        else {
            self.with_state(|state| state.is_saving_post = false);
            self.notifier.error("Login to save the post!");
            return false;
        };

        let result = self.api.save_post(&user_id, article).await;
        self.with_state(|state| state.is_saving_post = false);

        match result {
            Ok(response) if response.success => {
                self.notifier.success(
                    response
                        .message
                        .as_deref()
                        .unwrap_or("Post saved successfully, visit profile to view."),
                );
                true
            }
            Ok(response) => {
                self.notifier.error(
                    response
                        .message
                        .as_deref()
                        .unwrap_or("Failed to save the post, try again!"),
                );
                false
            }
            Err(error) => {
                tracing::debug!(%error, "save post failed");
                self.notifier
                    .error(&error_text(&error, "Failed to save the post, try again!"));
                false
            }
        }
    }

    /// Fetch the personalized feed and replace the stored list wholesale.
    pub async fn fetch_personalized(&self) -> bool {
        self.with_state(|state| state.is_fetching_feed = true);
        let result = self.api.personalized_feed().await;
        self.with_state(|state| state.is_fetching_feed = false);

        match result {
            Ok(feed) if feed.success => {
                let message = feed
                    .message
                    .unwrap_or_else(|| {
                        "Articles based on your preferences fetched successfully!".to_string()
                    });
                self.with_state(|state| state.personalized = feed.articles);
                self.notifier.success(&message);
                true
            }
            Ok(feed) => {
                self.notifier.error(
                    feed.message
                        .as_deref()
                        .unwrap_or("Failed to fetch news, try again!"),
                );
                false
            }
            Err(error) => {
                tracing::debug!(%error, "personalized feed fetch failed");
                self.notifier
                    .error(&error_text(&error, "Failed to fetch news, try again!"));
                false
            }
        }
    }

    /// Drop all session state and the persisted keys without emitting
    /// notifications. Test isolation hook.
    pub fn reset(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        self.with_state(|state| *state = SessionState::default());
    }

    fn install_session(&self, user: User, token: String) {
        if let Err(error) = self.storage.set(TOKEN_KEY, &token) {
            tracing::warn!(%error, "failed to persist session token");
        }
        self.persist_user(&user);
        self.with_state(|state| {
            state.user = Some(user);
            state.token = Some(token);
        });
    }

    fn persist_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(raw) => {
                if let Err(error) = self.storage.set(USER_KEY, &raw) {
                    tracing::warn!(%error, "failed to persist user");
                }
            }
            Err(error) => tracing::warn!(%error, "failed to encode user"),
        }
    }
}
