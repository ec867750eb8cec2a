/// Errors returned while validating inputs and decoding a heatmap buffer.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("floor count must be >= 1")]
    InvalidFloorCount,

    #[error("unsupported encoding version {0}, only version 1 is supported")]
    UnsupportedVersion(u32),

    #[error("invalid pixel buffer dimensions (width={width}, height={height})")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid pixel buffer length (expected {expected} bytes, got {got})")]
    InvalidPixelBuffer { expected: usize, got: usize },

    #[error("heatmap image has height {height}, should be divisible by {floor_count}")]
    ShapeMismatch { height: usize, floor_count: usize },

    #[error("floor {floor} has {got} values, expected {expected}")]
    InvalidFloorLength {
        floor: usize,
        expected: usize,
        got: usize,
    },

    #[error(
        "heatmaps differ in shape ({left_floors} floors of {left_width}x{left_height} \
         vs {right_floors} floors of {right_width}x{right_height})"
    )]
    IncompatibleShapes {
        left_floors: usize,
        left_width: usize,
        left_height: usize,
        right_floors: usize,
        right_width: usize,
        right_height: usize,
    },
}
