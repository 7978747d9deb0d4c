mod common;

use std::sync::Arc;

use common::sample_user;
use newsphere_sdk::{ClientStorage, MemoryStorage, TOKEN_KEY, USER_KEY};
use newsphere_store::{
    AppContext, AppContextOptions, Filter, FilterState, RecordingNotifier, RecordingOpener,
};

fn seeded_storage() -> Arc<MemoryStorage> {
    let storage = Arc::new(MemoryStorage::new());
    storage.set(TOKEN_KEY, "tok-ctx").expect("seed token");
    storage
        .set(
            USER_KEY,
            &serde_json::to_string(&sample_user("ctx-user")).expect("encode user"),
        )
        .expect("seed user");
    storage
}

#[test]
fn context_restores_persisted_session_through_wiring() {
    let storage = seeded_storage();
    let context = AppContext::new(AppContextOptions {
        base_url: "http://localhost:8000".to_string(),
        storage: Some(storage),
        notifier: Some(Arc::new(RecordingNotifier::new())),
        opener: Some(Arc::new(RecordingOpener::new())),
    })
    .expect("context should build");

    assert!(context.session().is_authenticated());
    assert_eq!(
        context.session().user().map(|user| user.id),
        Some("ctx-user".to_string())
    );
}

#[test]
fn reset_tears_down_both_stores_and_storage() {
    let storage = seeded_storage();
    let context = AppContext::new(AppContextOptions {
        base_url: "http://localhost:8000".to_string(),
        storage: Some(Arc::clone(&storage) as Arc<dyn ClientStorage>),
        notifier: Some(Arc::new(RecordingNotifier::new())),
        opener: Some(Arc::new(RecordingOpener::new())),
    })
    .expect("context should build");

    context.news().set_filter(Filter::Days(30));
    assert!(context.session().is_authenticated());

    context.reset();

    assert!(!context.session().is_authenticated());
    assert_eq!(context.session().user(), None);
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
    assert_eq!(context.news().filters(), FilterState::default());
    assert!(context.news().articles().is_empty());
}

#[test]
fn base_url_trailing_slash_is_accepted() {
    let context = AppContext::new(AppContextOptions {
        base_url: "http://localhost:8000/".to_string(),
        storage: Some(Arc::new(MemoryStorage::new())),
        notifier: Some(Arc::new(RecordingNotifier::new())),
        opener: Some(Arc::new(RecordingOpener::new())),
    })
    .expect("context should build");

    assert!(!context.session().is_authenticated());
}
