//! Pointwise linear blending of two heatmaps.

use crate::{DecodeError, Heatmap};

/// Ensure two heatmaps agree on floor count, width and height.
pub fn check_compatible(a: &Heatmap, b: &Heatmap) -> Result<(), DecodeError> {
    let (left_floors, left_width, left_height) = a.shape();
    let (right_floors, right_width, right_height) = b.shape();
    if a.shape() != b.shape() {
        let err = DecodeError::IncompatibleShapes {
            left_floors,
            left_width,
            left_height,
            right_floors,
            right_width,
            right_height,
        };
        log::error!("{err}");
        return Err(err);
    }
    Ok(())
}

/// Blend `a` towards `b`: every cell becomes `a + fraction * (b - a)`.
///
/// `fraction` is not clamped; values outside `[0, 1]` extrapolate. Inputs are
/// left untouched and the result is freshly allocated with `a`'s shape.
pub fn interpolate_heatmaps(
    a: &Heatmap,
    b: &Heatmap,
    fraction: f64,
) -> Result<Heatmap, DecodeError> {
    check_compatible(a, b)?;

    let floors = a
        .floors()
        .iter()
        .zip(b.floors())
        .map(|(fa, fb)| {
            fa.iter()
                .zip(fb)
                .map(|(&va, &vb)| va + fraction * (vb - va))
                .collect()
        })
        .collect();

    Ok(Heatmap::from_parts_unchecked(floors, a.width(), a.height()))
}
