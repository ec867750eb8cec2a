//! Resolving heatmap source references into pixel buffers.
//!
//! This crate provides:
//! - [`HeatmapSource`], the tagged reference to an encoded heatmap image
//!   (a raw base64 payload or a URL),
//! - the [`ImageDecoder`] trait that the decode pipeline is generic over,
//! - [`ImageCrateDecoder`], a default decoder built on the `image` crate.
//!
//! Decoding the pixel data into floors lives in `floorheat-core`.

mod decoder;
mod error;
mod image_decoder;
mod source;

pub use decoder::ImageDecoder;
pub use error::SourceError;
pub use image_decoder::{decode_image_bytes, ImageCrateDecoder};
pub use source::{is_base64_payload, HeatmapSource};
