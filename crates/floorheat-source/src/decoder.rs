use crate::{HeatmapSource, SourceError};
use async_trait::async_trait;
use floorheat_core::PixelBuffer;

/// Turns a [`HeatmapSource`] into raw RGBA pixels.
///
/// Implementations may suspend on I/O. The decode pipeline validates the
/// source before calling [`ImageDecoder::resolve`], so implementations can
/// assume a well-formed reference.
#[async_trait]
pub trait ImageDecoder: Send + Sync {
    async fn resolve(&self, source: &HeatmapSource) -> Result<PixelBuffer, SourceError>;
}

#[async_trait]
impl<D: ImageDecoder + ?Sized> ImageDecoder for &D {
    async fn resolve(&self, source: &HeatmapSource) -> Result<PixelBuffer, SourceError> {
        (**self).resolve(source).await
    }
}

#[async_trait]
impl<D: ImageDecoder + ?Sized> ImageDecoder for std::sync::Arc<D> {
    async fn resolve(&self, source: &HeatmapSource) -> Result<PixelBuffer, SourceError> {
        (**self).resolve(source).await
    }
}
