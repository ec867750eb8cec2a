//! JSON request configs for decode and interpolate.

use crate::{decode, interpolate, HeatmapError};
use floorheat_core::{EncodingVersion, FloorheatIoError, Heatmap};
use floorheat_source::{HeatmapSource, ImageDecoder};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

fn default_version() -> u32 {
    EncodingVersion::default().tag()
}

/// A single decode, e.g. `{"source": {"url": "h.png"}, "floor_count": 3}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodeConfig {
    pub source: HeatmapSource,
    pub floor_count: usize,
    #[serde(default = "default_version")]
    pub version: u32,
    /// Where to write the decoded heatmap JSON.
    #[serde(default)]
    pub output_path: Option<String>,
}

/// A blend between two heatmap images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpolateConfig {
    pub source_a: HeatmapSource,
    pub source_b: HeatmapSource,
    pub fraction: f64,
    pub floor_count: usize,
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub output_path: Option<String>,
}

impl DecodeConfig {
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, FloorheatIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), FloorheatIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the output path, defaulting to `heatmap.json`.
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("heatmap.json"))
    }

    /// Run the configured decode with `decoder`.
    pub async fn run<D: ImageDecoder + ?Sized>(&self, decoder: &D) -> Result<Heatmap, HeatmapError> {
        decode(decoder, &self.source, self.floor_count, self.version).await
    }
}

impl InterpolateConfig {
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, FloorheatIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), FloorheatIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the output path, defaulting to `heatmap_blend.json`.
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("heatmap_blend.json"))
    }

    /// Run the configured interpolation with `decoder`.
    pub async fn run<D: ImageDecoder + ?Sized>(&self, decoder: &D) -> Result<Heatmap, HeatmapError> {
        interpolate(
            decoder,
            &self.source_a,
            &self.source_b,
            self.fraction,
            self.floor_count,
            self.version,
        )
        .await
    }
}
