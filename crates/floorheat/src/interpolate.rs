use crate::{DecodeRequest, HeatmapError};
use floorheat_core::{interpolate_heatmaps, Heatmap};
use floorheat_source::{HeatmapSource, ImageDecoder};
use futures::future::try_join;

/// Decode `source_a` and `source_b` concurrently and blend them.
///
/// Every cell of the result is `a + fraction * (b - a)`. Both decodes must
/// succeed; the first failure is returned and the other decode is dropped.
/// `fraction` is not clamped.
pub async fn interpolate<D: ImageDecoder + ?Sized>(
    decoder: &D,
    source_a: &HeatmapSource,
    source_b: &HeatmapSource,
    fraction: f64,
    floor_count: usize,
    version: u32,
) -> Result<Heatmap, HeatmapError> {
    let request_a = DecodeRequest::new(source_a, floor_count, version)?;
    let request_b = DecodeRequest::new(source_b, floor_count, version)?;

    let (a, b) = try_join(request_a.run(decoder), request_b.run(decoder)).await?;
    log::debug!("blending {:?} heatmaps at fraction {fraction}", a.shape());
    Ok(interpolate_heatmaps(&a, &b, fraction)?)
}
