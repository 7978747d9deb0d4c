//! Fetch and print a small feed from a running Newsphere backend.
//!
//! ```sh
//! NEWSPHERE_API_URL=http://localhost:8000 cargo run --example browse
//! ```

use std::sync::Arc;

use newsphere_sdk::{MemoryStorage, NewsParams};
use newsphere_store::{AppContext, AppContextOptions, Filter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let base_url = std::env::var("NEWSPHERE_API_URL")?;
    let context = AppContext::new(AppContextOptions {
        base_url,
        storage: Some(Arc::new(MemoryStorage::new())),
        ..AppContextOptions::default()
    })?;

    let news = context.news();
    news.set_filter(Filter::Days(3));

    if news
        .fetch_latest_news(&NewsParams {
            limit: Some(5),
            ..NewsParams::default()
        })
        .await
    {
        for article in news.articles() {
            println!("{:>12}  {}", article.source.name, article.title);
        }
    }

    if news.fetch_categories().await {
        let names: Vec<String> = news
            .categories()
            .into_iter()
            .map(|category| category.name)
            .collect();
        println!("categories: {}", names.join(", "));
    }

    Ok(())
}
