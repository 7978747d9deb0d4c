use std::sync::Mutex;

use newsphere_sdk::ApiError;

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Sink for transient notifications. The stores emit them; the view layer
/// renders them (as toasts, status lines, or whatever the shell provides).
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default notifier: forwards notifications to the tracing subscriber.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(target: "newsphere::notify", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::warn!(target: "newsphere::notify", "{message}");
    }
}

/// Notifier that records every notification, for tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().expect("notifier poisoned").clone()
    }

    #[must_use]
    pub fn successes(&self) -> Vec<String> {
        self.of_kind(NoticeKind::Success)
    }

    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.of_kind(NoticeKind::Error)
    }

    fn of_kind(&self, kind: NoticeKind) -> Vec<String> {
        self.notices
            .lock()
            .expect("notifier poisoned")
            .iter()
            .filter(|notice| notice.kind == kind)
            .map(|notice| notice.message.clone())
            .collect()
    }

    fn push(&self, kind: NoticeKind, message: &str) {
        self.notices.lock().expect("notifier poisoned").push(Notice {
            kind,
            message: message.to_string(),
        });
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.push(NoticeKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(NoticeKind::Error, message);
    }
}

/// The server's detail message when the failure carried one, else the
/// operation's fixed fallback.
pub(crate) fn error_text(error: &ApiError, fallback: &str) -> String {
    error
        .detail()
        .map_or_else(|| fallback.to_string(), ToString::to_string)
}
