//! News repository: the read-only collaborator feeding the listing.

use std::future::Future;

use super::{DataLoadError, DataSource};
use crate::state::types::{NewsDocument, NewsItem};

/// Document name of the news feed.
pub const NEWS_DOCUMENT: &str = "news.json";

/// Read-only supplier of news items.
pub trait NewsRepository {
    /// Load every news item in publication-file order.
    fn load(&self) -> impl Future<Output = Result<Vec<NewsItem>, DataLoadError>> + Send;
}

/// Repository backed by `news.json` in a [`DataSource`].
#[derive(Clone, Debug)]
pub struct JsonNewsRepository {
    /// Where `news.json` lives.
    source: DataSource,
}

impl JsonNewsRepository {
    /// Create a repository over `source`.
    #[must_use]
    pub const fn new(source: DataSource) -> Self {
        Self { source }
    }
}

impl NewsRepository for JsonNewsRepository {
    /// What: Fetch and decode `news.json`.
    ///
    /// Details:
    /// - A `null` document, a missing `news` key or `"news": null` yields an empty list.
    /// - One malformed entry fails the whole document; entries are not filtered individually.
    async fn load(&self) -> Result<Vec<NewsItem>, DataLoadError> {
        let doc: Option<NewsDocument> = self.source.fetch_document(NEWS_DOCUMENT).await?;
        Ok(doc.and_then(|d| d.news).unwrap_or_default())
    }
}

/// In-memory repository over already loaded items.
#[derive(Clone, Debug, Default)]
pub struct StaticNewsRepository(pub Vec<NewsItem>);

impl NewsRepository for StaticNewsRepository {
    async fn load(&self) -> Result<Vec<NewsItem>, DataLoadError> {
        Ok(self.0.clone())
    }
}

/// What: Load news, degrading to an empty list on failure.
///
/// Inputs:
/// - `repo`: Repository to read
///
/// Output:
/// - Loaded items, or an empty list after logging the `DataLoadError`.
pub async fn load_news_or_empty<R: NewsRepository + Sync>(repo: &R) -> Vec<NewsItem> {
    match repo.load().await {
        Ok(items) => {
            tracing::info!(count = items.len(), "news loaded");
            items
        }
        Err(e) => {
            tracing::warn!(error = %e, "news unavailable; showing empty listing");
            Vec::new()
        }
    }
}
