//! Pixel buffer to per-floor grids.

use crate::{DecodeError, EncodingVersion, Heatmap, PixelBuffer, NUM_CHANNELS};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Height of one floor, failing when `height` is not a multiple of
/// `floor_count`.
///
/// Failures are logged before they are returned.
pub fn per_floor_height(height: usize, floor_count: usize) -> Result<usize, DecodeError> {
    if floor_count == 0 {
        return Err(DecodeError::InvalidFloorCount);
    }
    if height % floor_count != 0 {
        let err = DecodeError::ShapeMismatch {
            height,
            floor_count,
        };
        log::error!("{err}");
        return Err(err);
    }
    Ok(height / floor_count)
}

/// Decode a stacked heatmap image into `floor_count` grids.
///
/// Floors are stacked top to bottom, so floor `f` starts at pixel offset
/// `width * floor_height * f`. Only channel 0 of every pixel is read.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "debug",
        skip(pixels),
        fields(width = pixels.width(), height = pixels.height())
    )
)]
pub fn decode_pixels(
    pixels: &PixelBuffer,
    floor_count: usize,
    version: EncodingVersion,
) -> Result<Heatmap, DecodeError> {
    let width = pixels.width();
    let floor_height = per_floor_height(pixels.height(), floor_count)?;
    let floor_bytes = width * floor_height * NUM_CHANNELS;

    // The buffer holds exactly floor_count * floor_bytes bytes, so the
    // chunks line up with floor boundaries.
    let floors: Vec<Vec<f64>> = pixels
        .as_raw()
        .chunks_exact(floor_bytes)
        .map(|floor| {
            floor
                .chunks_exact(NUM_CHANNELS)
                .map(|px| version.to_value(px[0]))
                .collect()
        })
        .collect();

    log::debug!(
        "decoded {} floor(s) of {}x{} (version {})",
        floors.len(),
        width,
        floor_height,
        version.tag()
    );

    Ok(Heatmap::from_parts_unchecked(floors, width, floor_height))
}
