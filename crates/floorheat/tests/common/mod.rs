#![allow(dead_code)]

use async_trait::async_trait;
use floorheat::core::PixelBuffer;
use floorheat::source::SourceError;
use floorheat::{HeatmapSource, ImageDecoder};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// How the fake decoder answers one source.
pub enum Reply {
    Pixels(PixelBuffer),
    Fail,
    /// Never resolves.
    Hang,
}

/// In-memory decoder keyed by the source string, counting every call.
#[derive(Default)]
pub struct FakeDecoder {
    replies: HashMap<String, Reply>,
    calls: AtomicUsize,
}

impl FakeDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, reply: Reply) -> Self {
        self.replies.insert(key.to_string(), reply);
        self
    }

    /// Register channel-0 bytes for `key`.
    pub fn with_pixels(self, key: &str, width: u32, height: u32, values: &[u8]) -> Self {
        let buf = PixelBuffer::from_channel0(width, height, values).expect("fake buffer");
        self.with(key, Reply::Pixels(buf))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn key(source: &HeatmapSource) -> &str {
    match source {
        HeatmapSource::Base64Payload(s) | HeatmapSource::UrlReference(s) => s,
    }
}

#[async_trait]
impl ImageDecoder for FakeDecoder {
    async fn resolve(&self, source: &HeatmapSource) -> Result<PixelBuffer, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.replies.get(key(source)) {
            Some(Reply::Pixels(buf)) => Ok(buf.clone()),
            Some(Reply::Hang) => futures::future::pending().await,
            Some(Reply::Fail) | None => Err(SourceError::Fetch {
                url: key(source).to_string(),
                reason: "fake decoder has no image".to_string(),
            }),
        }
    }
}

/// `round(x * 100)` clamped to a byte, the inverse of version 1.
pub fn encode_v1(values: &[f64]) -> Vec<u8> {
    values
        .iter()
        .map(|x| (x * 100.0).round().clamp(0.0, 255.0) as u8)
        .collect()
}
