//! Data retrieval: JSON documents from a directory or web server.

mod defaults;
mod documents;
mod error;
mod repository;
mod source;

use crate::state::types::{ChartsDocument, NewsItem, Profile, ServicesDocument, SiteConfig};

pub use defaults::{default_charts, default_site_config};
pub use documents::{
    CHARTS_DOCUMENT, CONFIG_DOCUMENT, PROFILE_DOCUMENT, SERVICES_DOCUMENT, load_charts,
    load_profile, load_services, load_site_config,
};
pub use error::DataLoadError;
pub use repository::{
    JsonNewsRepository, NEWS_DOCUMENT, NewsRepository, StaticNewsRepository, load_news_or_empty,
};
pub use source::DataSource;

/// Everything the portal shows, loaded once at startup.
#[derive(Clone, Debug, Default)]
pub struct PortalData {
    /// Site identity, hero, info cards and contact.
    pub site: SiteConfig,
    /// Village profile, when available.
    pub profile: Option<Profile>,
    /// Service cards and form options.
    pub services: ServicesDocument,
    /// Statistics.
    pub charts: ChartsDocument,
    /// All news in file order.
    pub news: Vec<NewsItem>,
}

/// What: Load every document from `source` concurrently.
///
/// Output:
/// - Portal data; each document falls back independently and no failure aborts the load.
pub async fn load_portal_data(source: &DataSource) -> PortalData {
    let repo = JsonNewsRepository::new(source.clone());
    let (site, profile, services, charts, news) = futures::join!(
        load_site_config(source),
        load_profile(source),
        load_services(source),
        load_charts(source),
        load_news_or_empty(&repo),
    );
    tracing::info!(
        source = %source,
        news = news.len(),
        services = services.services.len(),
        charts = charts.charts.len(),
        "portal data loaded"
    );
    PortalData {
        site,
        profile,
        services,
        charts,
        news,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn portal_data_loads_news_beside_fallbacks() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join(NEWS_DOCUMENT),
            r#"{"news": [{"id": 1, "title": "Gotong Royong", "category": "kegiatan"}]}"#,
        )
        .expect("write news");
        let data = load_portal_data(&DataSource::Dir(dir.path().to_path_buf())).await;
        assert_eq!(data.news.len(), 1);
        assert_eq!(data.site.hero.title, "Selamat Datang di Desa Sejahtera");
        assert!(data.profile.is_none());
    }
}
