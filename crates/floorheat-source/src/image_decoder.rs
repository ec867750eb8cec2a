//! Default [`ImageDecoder`] built on the `image` crate.

use crate::{HeatmapSource, ImageDecoder, SourceError};
use async_trait::async_trait;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use floorheat_core::PixelBuffer;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Decodes PNG/JPEG/... bytes into an RGBA8 [`PixelBuffer`].
pub fn decode_image_bytes(bytes: &[u8]) -> Result<PixelBuffer, SourceError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(PixelBuffer::new(width, height, rgba.into_raw())?)
}

// Standard alphabet; trailing '=' padding is optional, as in browser data URLs.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

fn decode_base64(payload: &str) -> Result<Vec<u8>, SourceError> {
    Ok(PAYLOAD_ENGINE.decode(payload.trim())?)
}

/// Resolves every [`HeatmapSource`] variant:
///
/// - base64 payloads and `data:<mime>;base64,<payload>` URLs are decoded in
///   memory,
/// - `file://` URLs and bare paths are read with `tokio::fs`,
/// - `http(s)://` URLs are fetched with `reqwest` (feature `http`).
#[derive(Clone, Debug, Default)]
pub struct ImageCrateDecoder {
    #[cfg(feature = "http")]
    client: reqwest::Client,
}

impl ImageCrateDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured HTTP client (timeouts, proxies, ...).
    #[cfg(feature = "http")]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn url_bytes(&self, url: &str) -> Result<Vec<u8>, SourceError> {
        let url = url.trim();
        if let Some(rest) = url.strip_prefix("data:") {
            let (header, payload) = rest
                .split_once(',')
                .ok_or_else(|| SourceError::UnsupportedScheme(truncated(url)))?;
            if !header.ends_with(";base64") {
                return Err(SourceError::UnsupportedScheme(truncated(url)));
            }
            return decode_base64(payload);
        }
        if url.starts_with("http://") || url.starts_with("https://") {
            return self.fetch(url).await;
        }
        let path = match url.strip_prefix("file://") {
            Some(path) => path,
            None if !url.contains("://") => url,
            None => return Err(SourceError::UnsupportedScheme(url.to_string())),
        };
        tokio::fs::read(path)
            .await
            .map_err(|source| SourceError::Read {
                path: path.to_string(),
                source,
            })
    }

    #[cfg(feature = "http")]
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, SourceError> {
        let fetch_err = |e: reqwest::Error| SourceError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        };
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(fetch_err)?
            .error_for_status()
            .map_err(fetch_err)?;
        let bytes = response.bytes().await.map_err(fetch_err)?;
        Ok(bytes.to_vec())
    }

    #[cfg(not(feature = "http"))]
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, SourceError> {
        Err(SourceError::Fetch {
            url: url.to_string(),
            reason: "built without the `http` feature".to_string(),
        })
    }
}

#[async_trait]
impl ImageDecoder for ImageCrateDecoder {
    #[cfg_attr(feature = "tracing", instrument(level = "info", skip(self, source), fields(source = %source)))]
    async fn resolve(&self, source: &HeatmapSource) -> Result<PixelBuffer, SourceError> {
        log::trace!("resolving {source}");
        let bytes = match source {
            HeatmapSource::Base64Payload(payload) => decode_base64(payload),
            HeatmapSource::UrlReference(url) => self.url_bytes(url).await,
        };
        bytes.and_then(|bytes| decode_image_bytes(&bytes))
    }
}

// Data URLs can be megabytes long; keep error messages readable.
fn truncated(url: &str) -> String {
    const MAX: usize = 48;
    match url.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &url[..idx]),
        None => url.to_string(),
    }
}
