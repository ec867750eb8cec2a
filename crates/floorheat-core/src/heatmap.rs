//! Decoded multi-floor heatmap.

use crate::DecodeError;
use serde::{Deserialize, Serialize};

/// Per-floor scalar grids sharing one `width x height` shape.
///
/// Each floor is a flat row-major array: the value at `(x, y)` lives at
/// index `x + y * width`. Fields are private so the shape invariant holds
/// for every instance, including deserialized ones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHeatmap")]
pub struct Heatmap {
    floors: Vec<Vec<f64>>,
    width: usize,
    height: usize,
}

#[derive(Deserialize)]
struct RawHeatmap {
    floors: Vec<Vec<f64>>,
    width: usize,
    height: usize,
}

impl TryFrom<RawHeatmap> for Heatmap {
    type Error = DecodeError;

    fn try_from(raw: RawHeatmap) -> Result<Self, Self::Error> {
        Heatmap::new(raw.floors, raw.width, raw.height)
    }
}

impl Heatmap {
    /// Validate and wrap per-floor grids.
    pub fn new(floors: Vec<Vec<f64>>, width: usize, height: usize) -> Result<Self, DecodeError> {
        if floors.is_empty() {
            return Err(DecodeError::InvalidFloorCount);
        }
        // Saturation makes every floor length mismatch on overflow.
        let expected = width.saturating_mul(height);
        if let Some((floor, values)) = floors
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != expected)
        {
            return Err(DecodeError::InvalidFloorLength {
                floor,
                expected,
                got: values.len(),
            });
        }
        Ok(Self::from_parts_unchecked(floors, width, height))
    }

    /// Caller guarantees every floor has `width * height` values.
    pub(crate) fn from_parts_unchecked(floors: Vec<Vec<f64>>, width: usize, height: usize) -> Self {
        debug_assert!(floors.iter().all(|f| f.len() == width * height));
        Self {
            floors,
            width,
            height,
        }
    }

    /// Per-floor width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Per-floor height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// All floors, floor 0 first.
    #[inline]
    pub fn floors(&self) -> &[Vec<f64>] {
        &self.floors
    }

    #[inline]
    pub fn floor(&self, floor: usize) -> Option<&[f64]> {
        self.floors.get(floor).map(Vec::as_slice)
    }

    /// Value at `(x, y)` on the given floor, `None` when out of range.
    pub fn value_at(&self, floor: usize, x: usize, y: usize) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.floor(floor)?.get(x + y * self.width).copied()
    }

    /// `(floor_count, width, height)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.floors.len(), self.width, self.height)
    }

    /// Take ownership of the floor grids.
    pub fn into_floors(self) -> Vec<Vec<f64>> {
        self.floors
    }
}
