use crate::DecodeError;

/// Number of interleaved channels per pixel (RGBA).
pub const NUM_CHANNELS: usize = 4;

/// Decoded raster data, row-major RGBA8.
///
/// Only channel 0 carries heatmap data; the other three are carried along so
/// buffers coming straight out of an image codec can be used without copying.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>, // len = width * height * NUM_CHANNELS
}

impl PixelBuffer {
    /// Wrap an RGBA8 buffer, checking its length against the dimensions.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, DecodeError> {
        let (w, h) = checked_dims(width, height)?;
        let expected = w
            .checked_mul(h)
            .and_then(|n| n.checked_mul(NUM_CHANNELS))
            .ok_or(DecodeError::InvalidDimensions { width, height })?;
        if data.len() != expected {
            return Err(DecodeError::InvalidPixelBuffer {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width: w,
            height: h,
            data,
        })
    }

    /// Build a buffer from one byte per pixel, replicated into RGB with an
    /// opaque alpha.
    pub fn from_channel0(width: u32, height: u32, values: &[u8]) -> Result<Self, DecodeError> {
        let (w, h) = checked_dims(width, height)?;
        let expected = w
            .checked_mul(h)
            .ok_or(DecodeError::InvalidDimensions { width, height })?;
        if values.len() != expected {
            return Err(DecodeError::InvalidPixelBuffer {
                expected,
                got: values.len(),
            });
        }
        let data = values.iter().flat_map(|&v| [v, v, v, u8::MAX]).collect();
        Self::new(width, height, data)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw interleaved bytes.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// All four channels of the pixel at `(x, y)`.
    pub fn pixel_at(&self, x: usize, y: usize) -> Option<[u8; NUM_CHANNELS]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (x + y * self.width) * NUM_CHANNELS;
        let px = &self.data[start..start + NUM_CHANNELS];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Channel 0 of the pixel at row-major `offset`.
    #[inline]
    pub fn channel0(&self, offset: usize) -> Option<u8> {
        self.data.get(offset.checked_mul(NUM_CHANNELS)?).copied()
    }
}

fn checked_dims(width: u32, height: u32) -> Result<(usize, usize), DecodeError> {
    let w = usize::try_from(width).ok().filter(|&w| w > 0);
    let h = usize::try_from(height).ok().filter(|&h| h > 0);
    w.zip(h)
        .ok_or(DecodeError::InvalidDimensions { width, height })
}
