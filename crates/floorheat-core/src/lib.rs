//! Core types and transforms for multi-floor heatmap images.
//!
//! A heatmap image stores one scalar per pixel in channel 0, with every floor
//! stacked vertically (floor 0 on top). This crate turns such a pixel buffer
//! into per-floor `f64` grids and blends two decoded heatmaps linearly.
//!
//! It does *not* depend on any image codec. Resolving a base64 payload or a
//! URL into a [`PixelBuffer`] is the job of `floorheat-source`.

mod decode;
mod error;
mod heatmap;
mod interpolate;
mod io;
mod logger;
mod pixels;
mod version;

pub use decode::{decode_pixels, per_floor_height};
pub use error::DecodeError;
pub use heatmap::Heatmap;
pub use interpolate::{check_compatible, interpolate_heatmaps};
pub use io::FloorheatIoError;
pub use pixels::{PixelBuffer, NUM_CHANNELS};
pub use version::EncodingVersion;

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::{init_from_env, init_with_level, parse_level, LOG_ENV};
