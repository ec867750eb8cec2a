//! JSON persistence for decoded heatmaps.

use crate::Heatmap;
use std::{fs, path::Path};

#[derive(thiserror::Error, Debug)]
pub enum FloorheatIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Heatmap {
    /// Load a heatmap from JSON on disk. The shape invariant is re-checked.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, FloorheatIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this heatmap to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), FloorheatIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
