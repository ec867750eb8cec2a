use floorheat_core::DecodeError;
use floorheat_source::SourceError;

/// Errors produced by the high-level decode and interpolate operations.
#[derive(thiserror::Error, Debug)]
pub enum HeatmapError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Coarse classification of a [`HeatmapError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A precondition on the arguments failed; no I/O was attempted.
    Validation,
    /// The encoding version tag is not known.
    UnsupportedVersion,
    /// The image decoder could not produce a pixel buffer.
    SourceResolution,
    /// The image height is not a multiple of the floor count.
    ShapeMismatch,
    /// Two heatmaps to blend do not share a shape.
    IncompatibleShapes,
}

impl HeatmapError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HeatmapError::Decode(err) => match err {
                DecodeError::UnsupportedVersion(_) => ErrorKind::UnsupportedVersion,
                DecodeError::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
                DecodeError::IncompatibleShapes { .. } => ErrorKind::IncompatibleShapes,
                DecodeError::InvalidFloorCount | DecodeError::InvalidFloorLength { .. } => {
                    ErrorKind::Validation
                }
                // Bad buffers only come out of a decoder.
                DecodeError::InvalidDimensions { .. } | DecodeError::InvalidPixelBuffer { .. } => {
                    ErrorKind::SourceResolution
                }
            },
            HeatmapError::Source(err) if err.is_validation() => ErrorKind::Validation,
            HeatmapError::Source(_) => ErrorKind::SourceResolution,
        }
    }
}
