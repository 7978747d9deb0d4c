mod context;
mod errors;
mod news;
mod notify;
mod opener;
mod session;

pub use context::{AppContext, AppContextOptions};
pub use errors::StoreError;
pub use news::{Filter, FilterState, LoadingFlags, NewsStore, DEFAULT_DAYS};
pub use notify::{Notice, NoticeKind, Notifier, RecordingNotifier, TracingNotifier};
pub use opener::{LinkOpener, RecordingOpener, TracingOpener};
pub use session::SessionStore;
