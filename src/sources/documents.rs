//! Loaders for the supplementary documents, each with its own fallback.

use super::DataSource;
use super::defaults::{default_charts, default_site_config, default_summary};
use crate::state::types::{
    ChartsDocument, Profile, ProfileDocument, ServicesDocument, SiteConfig,
};

/// Site configuration document name.
pub const CONFIG_DOCUMENT: &str = "config.json";
/// Village profile document name.
pub const PROFILE_DOCUMENT: &str = "profile.json";
/// Services document name.
pub const SERVICES_DOCUMENT: &str = "services.json";
/// Statistics document name.
pub const CHARTS_DOCUMENT: &str = "charts.json";

/// What: Load `config.json`, falling back to the built-in site configuration.
pub async fn load_site_config(source: &DataSource) -> SiteConfig {
    match source.fetch_document::<SiteConfig>(CONFIG_DOCUMENT).await {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!(error = %e, "using built-in site configuration");
            default_site_config()
        }
    }
}

/// What: Load `profile.json`.
///
/// Output:
/// - `None` when the document is missing, malformed or has no `profile` key;
///   the profile page then shows only its headings.
pub async fn load_profile(source: &DataSource) -> Option<Profile> {
    match source.fetch_document::<ProfileDocument>(PROFILE_DOCUMENT).await {
        Ok(doc) => doc.profile,
        Err(e) => {
            tracing::warn!(error = %e, "profile unavailable");
            None
        }
    }
}

/// What: Load `services.json`; empty lists on failure.
pub async fn load_services(source: &DataSource) -> ServicesDocument {
    match source.fetch_document::<ServicesDocument>(SERVICES_DOCUMENT).await {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!(error = %e, "services unavailable");
            ServicesDocument::default()
        }
    }
}

/// What: Load `charts.json`, falling back to the built-in statistics.
///
/// Details:
/// - A document without charts is treated like a failed load.
/// - A missing `summary` is filled from the built-in figures.
pub async fn load_charts(source: &DataSource) -> ChartsDocument {
    match source.fetch_document::<ChartsDocument>(CHARTS_DOCUMENT).await {
        Ok(mut doc) if !doc.charts.is_empty() => {
            if doc.summary.is_empty() {
                doc.summary = default_summary();
            }
            doc
        }
        Ok(_) => {
            tracing::warn!("charts document has no charts; using built-in statistics");
            default_charts()
        }
        Err(e) => {
            tracing::warn!(error = %e, "using built-in statistics");
            default_charts()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    /// What: Every loader degrades to its fallback on an empty directory.
    async fn loaders_fall_back_when_files_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let src = DataSource::Dir(dir.path().to_path_buf());
        assert_eq!(load_site_config(&src).await.site.title, "Desa Sejahtera");
        assert!(load_profile(&src).await.is_none());
        let services = load_services(&src).await;
        assert!(services.services.is_empty() && services.service_types.is_empty());
        assert_eq!(load_charts(&src).await.charts.len(), 4);
    }

    #[tokio::test]
    async fn loaders_read_present_documents() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join(SERVICES_DOCUMENT),
            r#"{"services": [{"title": "Surat Domisili"}],
                "serviceTypes": [{"value": "domisili", "label": "Surat Keterangan Domisili"}]}"#,
        )
        .expect("write services");
        std::fs::write(
            dir.path().join(CHARTS_DOCUMENT),
            r#"{"charts": {"x": {"title": "X", "type": "bar", "data": {"labels": ["a"], "datasets": [{"data": [1]}]}}}}"#,
        )
        .expect("write charts");
        std::fs::write(
            dir.path().join(PROFILE_DOCUMENT),
            r#"{"profile": {"vision": {"title": "Visi", "content": "Maju"}}}"#,
        )
        .expect("write profile");
        let src = DataSource::Dir(dir.path().to_path_buf());

        let services = load_services(&src).await;
        assert_eq!(services.service_types[0].value, "domisili");
        let charts = load_charts(&src).await;
        assert_eq!(charts.charts.len(), 1);
        assert_eq!(charts.summary.len(), 4);
        let profile = load_profile(&src).await.expect("profile");
        assert_eq!(profile.vision.expect("vision").content, "Maju");
    }
}
