//! High-level facade for the `floorheat-*` workspace.
//!
//! A heatmap image packs several floors of scalar data into one picture:
//! channel 0 of every pixel holds `round(value * 100)` and floors are stacked
//! vertically, floor 0 on top. This crate provides:
//! - [`decode`]: resolve a [`HeatmapSource`] and split it into per-floor
//!   `f64` grids,
//! - [`interpolate`]: decode two sources concurrently and blend them
//!   linearly,
//! - JSON request configs ([`DecodeConfig`], [`InterpolateConfig`]).
//!
//! ## Quickstart
//!
//! ```no_run
//! use floorheat::{HeatmapSource, Heatmapper};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mapper = Heatmapper::new();
//! let before = HeatmapSource::url("file:///data/heatmap_0900.jpg");
//! let after = HeatmapSource::url("file:///data/heatmap_1000.jpg");
//!
//! let half_past = mapper.interpolate(&before, &after, 0.5, 3, 1).await?;
//! println!("floor 0 at (4, 2): {:?}", half_past.value_at(0, 4, 2));
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `floorheat::core`: pixel buffers, heatmaps and the synchronous
//!   decode/blend transforms.
//! - `floorheat::source`: source references and image decoders.

pub use floorheat_core as core;
pub use floorheat_source as source;

pub use floorheat_core::{EncodingVersion, Heatmap, PixelBuffer};
pub use floorheat_source::{HeatmapSource, ImageCrateDecoder, ImageDecoder};

mod decode;
mod error;
mod heatmapper;
mod interpolate;
mod io;

pub use decode::{decode, DecodeRequest};
pub use error::{ErrorKind, HeatmapError};
pub use heatmapper::Heatmapper;
pub use interpolate::interpolate;
pub use io::{DecodeConfig, InterpolateConfig};
