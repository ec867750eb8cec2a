use crate::{decode, interpolate, HeatmapError};
use floorheat_core::Heatmap;
use floorheat_source::{HeatmapSource, ImageCrateDecoder, ImageDecoder};

/// Owns an [`ImageDecoder`] and exposes decode/interpolate as methods.
#[derive(Clone, Debug, Default)]
pub struct Heatmapper<D = ImageCrateDecoder> {
    decoder: D,
}

impl Heatmapper<ImageCrateDecoder> {
    /// Heatmapper backed by the `image`-crate decoder.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: ImageDecoder> Heatmapper<D> {
    pub fn with_decoder(decoder: D) -> Self {
        Self { decoder }
    }

    #[inline]
    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// See [`crate::decode`].
    pub async fn decode(
        &self,
        source: &HeatmapSource,
        floor_count: usize,
        version: u32,
    ) -> Result<Heatmap, HeatmapError> {
        decode(&self.decoder, source, floor_count, version).await
    }

    /// See [`crate::interpolate`].
    pub async fn interpolate(
        &self,
        source_a: &HeatmapSource,
        source_b: &HeatmapSource,
        fraction: f64,
        floor_count: usize,
        version: u32,
    ) -> Result<Heatmap, HeatmapError> {
        interpolate(
            &self.decoder,
            source_a,
            source_b,
            fraction,
            floor_count,
            version,
        )
        .await
    }
}
