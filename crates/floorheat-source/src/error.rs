/// Errors produced while validating or resolving a [`crate::HeatmapSource`].
#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error(
        "heatmap must be base64 encoded, may only contain a-zA-Z0-9/+, \
         followed by at most 2 '=' signs"
    )]
    MalformedBase64,

    #[error("empty URL reference")]
    EmptyUrl,

    #[error("problem interpreting heatmap: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("problem interpreting heatmap: {0}")]
    Image(#[from] image::ImageError),

    #[error("problem reading heatmap from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("problem fetching heatmap from {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("unsupported URL scheme in {0}")]
    UnsupportedScheme(String),

    #[error("problem interpreting heatmap: {0}")]
    Pixels(#[from] floorheat_core::DecodeError),
}

impl SourceError {
    /// True for errors raised while checking the reference itself, before
    /// any I/O was attempted.
    pub fn is_validation(&self) -> bool {
        matches!(self, SourceError::MalformedBase64 | SourceError::EmptyUrl)
    }
}
