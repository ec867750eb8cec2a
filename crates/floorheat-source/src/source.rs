//! Heatmap source references.

use crate::SourceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an encoded heatmap image comes from.
///
/// In JSON this is `{"base64": "..."}` or `{"url": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatmapSource {
    /// Raw base64 image payload, without a `data:` prefix.
    #[serde(rename = "base64")]
    Base64Payload(String),
    /// `data:`, `file://`, `http(s)://` URL or a bare filesystem path.
    #[serde(rename = "url")]
    UrlReference(String),
}

impl HeatmapSource {
    pub fn base64(payload: impl Into<String>) -> Self {
        HeatmapSource::Base64Payload(payload.into())
    }

    pub fn url(url: impl Into<String>) -> Self {
        HeatmapSource::UrlReference(url.into())
    }

    /// Check the reference is well formed. Performs no I/O.
    pub fn validate(&self) -> Result<(), SourceError> {
        match self {
            HeatmapSource::Base64Payload(payload) if !is_base64_payload(payload) => {
                Err(SourceError::MalformedBase64)
            }
            HeatmapSource::UrlReference(url) if url.trim().is_empty() => Err(SourceError::EmptyUrl),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for HeatmapSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeatmapSource::Base64Payload(payload) => {
                write!(f, "base64 payload ({} chars)", payload.len())
            }
            HeatmapSource::UrlReference(url) if url.starts_with("data:") => {
                write!(f, "data URL ({} chars)", url.len())
            }
            HeatmapSource::UrlReference(url) => write!(f, "{url}"),
        }
    }
}

/// True when `s` matches `^[A-Za-z0-9/+]*={0,2}$`.
pub fn is_base64_payload(s: &str) -> bool {
    let body = s.trim_end_matches('=');
    s.len() - body.len() <= 2
        && body
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'/' || b == b'+')
}
