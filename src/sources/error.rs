//! Errors raised while loading the portal's JSON documents.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain or decode one data document.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The request did not complete (connect, timeout, body read).
    #[error("request for {url} failed: {source}")]
    Http {
        /// Requested URL.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{url} answered with HTTP status {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// Status code.
        status: u16,
    },

    /// The body was not valid JSON of the expected shape.
    #[error("{name} is not a valid document: {source}")]
    Parse {
        /// Document name (e.g. `news.json`).
        name: String,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// A base URL or document URL could not be formed.
    #[error("invalid data URL '{url}': {reason}")]
    Url {
        /// Offending URL text.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// The HTTP client could not be constructed.
    #[error("HTTP client unavailable")]
    ClientUnavailable,
}
