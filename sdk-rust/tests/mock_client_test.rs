use newsphere_sdk::{
    newsphere_sdk_test::MockApiClient, ApiError, Article, ArticleRef, ArticleSource, AuthApi,
    AuthSession, NewsApi, NewsParams, StatusCode, User,
};

fn sample_user(id: &str) -> User {
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

fn sample_article(title: &str) -> Article {
    Article {
        id: None,
        title: title.to_string(),
        description: None,
        url_to_image: None,
        published_at: None,
        source: ArticleSource {
            name: "Wire".to_string(),
        },
        url: format!("https://example.com/{title}"),
    }
}

#[tokio::test]
async fn mock_yields_queued_results_in_order_and_tracks_inputs() {
    let mock = MockApiClient::new();
    let session = AuthSession {
        user: sample_user("u1"),
        token: "tok-1".to_string(),
        token_type: Some("bearer".to_string()),
    };

    mock.enqueue_login(Ok(session.clone()))
        .enqueue_login(Err(ApiError::Status {
            status: StatusCode::UNAUTHORIZED,
            detail: Some("Incorrect username or password".to_string()),
        }));

    let first = mock.login("reader", "pw").await.expect("first login queued Ok");
    assert_eq!(first, session);

    let second = mock.login("reader", "bad").await;
    assert!(matches!(second, Err(ApiError::Status { .. })));

    assert_eq!(
        mock.login_calls(),
        vec![
            ("reader".to_string(), "pw".to_string()),
            ("reader".to_string(), "bad".to_string()),
        ]
    );
}

#[tokio::test]
async fn mock_errors_on_empty_queue() {
    let mock = MockApiClient::new();

    let result = mock.latest_news(&NewsParams::default()).await;
    match result {
        Err(ApiError::InvalidInput(message)) => {
            assert!(message.contains("latest_news"), "unexpected message: {message}");
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
    assert_eq!(mock.latest_news_calls().len(), 1);
}

#[tokio::test]
async fn mock_records_article_refs_for_user_actions() {
    let mock = MockApiClient::new();
    mock.enqueue_view_news(Ok(newsphere_sdk::ActionResponse {
        success: true,
        message: None,
        news_url: None,
    }));

    let article = sample_article("story");
    let reference = ArticleRef::from(&article);
    mock.view_news("u1", &reference).await.expect("queued Ok");

    let calls = mock.view_news_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "u1");
    assert_eq!(calls[0].1.news_url, "https://example.com/story");
    assert!(mock.save_post_calls().is_empty());
}
