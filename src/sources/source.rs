//! Where the JSON documents come from: a local directory or a web server.

use reqwest::Url;
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;

use super::DataLoadError;

/// Shared HTTP client with connection pooling for document fetches.
/// `None` when the TLS backend could not be initialized.
static HTTP_CLIENT: LazyLock<Option<reqwest::Client>> = LazyLock::new(|| {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .user_agent(format!("portal-desa/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| tracing::error!(error = %e, "failed to build HTTP client"))
        .ok()
});

/// Location of the static data documents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// Directory on disk holding `news.json` and friends.
    Dir(PathBuf),
    /// Base URL the documents are served under.
    Http(Url),
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dir(p) => write!(f, "{}", p.display()),
            Self::Http(u) => write!(f, "{u}"),
        }
    }
}

impl DataSource {
    /// What: Pick the data source from settings or CLI values.
    ///
    /// Inputs:
    /// - `dir`: Local directory, used when no URL is given
    /// - `url`: Optional base URL; wins over `dir`
    ///
    /// Output:
    /// - `DataLoadError::Url` when `url` is not an absolute http(s) URL.
    ///
    /// Details:
    /// - A trailing `/` is added to the URL so document names join beneath it.
    pub fn resolve(dir: PathBuf, url: Option<&str>) -> Result<Self, DataLoadError> {
        let Some(raw) = url.map(str::trim).filter(|u| !u.is_empty()) else {
            return Ok(Self::Dir(dir));
        };
        let with_slash = if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{raw}/")
        };
        let parsed = Url::parse(&with_slash).map_err(|e| DataLoadError::Url {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DataLoadError::Url {
                url: raw.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        Ok(Self::Http(parsed))
    }

    /// What: Fetch the raw text of a document.
    ///
    /// Inputs:
    /// - `name`: Document file name, e.g. `news.json`
    ///
    /// Output:
    /// - Body text, or the `DataLoadError` describing the failure.
    pub async fn fetch_text(&self, name: &str) -> Result<String, DataLoadError> {
        match self {
            Self::Dir(dir) => {
                let path = dir.join(name);
                tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|source| DataLoadError::Io { path, source })
            }
            Self::Http(base) => {
                let url = base.join(name).map_err(|e| DataLoadError::Url {
                    url: format!("{base}{name}"),
                    reason: e.to_string(),
                })?;
                let client = HTTP_CLIENT
                    .as_ref()
                    .ok_or(DataLoadError::ClientUnavailable)?;
                let http_err = |source| DataLoadError::Http {
                    url: url.to_string(),
                    source,
                };
                let resp = client.get(url.clone()).send().await.map_err(http_err)?;
                let status = resp.status();
                if !status.is_success() {
                    return Err(DataLoadError::Status {
                        url: url.to_string(),
                        status: status.as_u16(),
                    });
                }
                resp.text().await.map_err(http_err)
            }
        }
    }

    /// What: Fetch and decode a JSON document.
    ///
    /// Output:
    /// - Decoded value; `DataLoadError::Parse` when the body does not match `T`.
    pub async fn fetch_document<T: DeserializeOwned>(&self, name: &str) -> Result<T, DataLoadError> {
        let text = self.fetch_text(name).await?;
        let value = serde_json::from_str(&text).map_err(|source| DataLoadError::Parse {
            name: name.to_string(),
            source,
        })?;
        tracing::debug!(source = %self, document = name, bytes = text.len(), "loaded data document");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: URL wins over the directory and gains a trailing slash.
    fn resolve_prefers_url() {
        let src = DataSource::resolve(PathBuf::from("data"), Some("https://desa.example.id/data"))
            .expect("valid url");
        match src {
            DataSource::Http(u) => assert_eq!(u.as_str(), "https://desa.example.id/data/"),
            DataSource::Dir(_) => panic!("expected http source"),
        }
        let dir = DataSource::resolve(PathBuf::from("data"), Some("  ")).expect("blank url");
        assert_eq!(dir, DataSource::Dir(PathBuf::from("data")));
    }

    #[test]
    fn resolve_rejects_bad_urls() {
        assert!(matches!(
            DataSource::resolve(PathBuf::new(), Some("not a url")),
            Err(DataLoadError::Url { .. })
        ));
        assert!(matches!(
            DataSource::resolve(PathBuf::new(), Some("ftp://desa.example.id/")),
            Err(DataLoadError::Url { .. })
        ));
    }

    #[tokio::test]
    /// What: Directory sources read files and classify failures.
    async fn dir_source_reads_and_classifies_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("ok.json"), r#"{"a": 1}"#).expect("write");
        std::fs::write(dir.path().join("bad.json"), "{oops").expect("write");
        let src = DataSource::Dir(dir.path().to_path_buf());
        let v: serde_json::Value = src.fetch_document("ok.json").await.expect("parse");
        assert_eq!(v["a"], 1);
        assert!(matches!(
            src.fetch_document::<serde_json::Value>("bad.json").await,
            Err(DataLoadError::Parse { .. })
        ));
        assert!(matches!(
            src.fetch_text("missing.json").await,
            Err(DataLoadError::Io { .. })
        ));
    }
}
