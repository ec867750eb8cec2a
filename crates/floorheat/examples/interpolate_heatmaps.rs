//! Blend two heatmap images described by a JSON config and write the result.
//!
//! ```text
//! cargo run -p floorheat --example interpolate_heatmaps -- [config.json]
//! ```

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use floorheat::{Heatmap, Heatmapper, InterpolateConfig};

#[cfg(not(feature = "tracing"))]
use log::{info, warn};
#[cfg(feature = "tracing")]
use tracing::{info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(not(feature = "tracing"))]
    floorheat::core::init_from_env()?;
    #[cfg(feature = "tracing")]
    floorheat::core::init_tracing(false);

    let config_path = parse_config_path();
    let cfg = InterpolateConfig::load_json(&config_path)?;
    if !(0.0..=1.0).contains(&cfg.fraction) {
        warn!("fraction {} lies outside [0, 1], extrapolating", cfg.fraction);
    }
    info!(
        "blending {} -> {} at {}",
        cfg.source_a, cfg.source_b, cfg.fraction
    );

    let mapper = Heatmapper::new();
    let blended = mapper
        .interpolate(
            &cfg.source_a,
            &cfg.source_b,
            cfg.fraction,
            cfg.floor_count,
            cfg.version,
        )
        .await?;
    info!(
        "blended {} floor(s) of {}x{}",
        blended.floor_count(),
        blended.width(),
        blended.height()
    );

    write_heatmap(&cfg.output_path(), &blended)
}

fn parse_config_path() -> PathBuf {
    env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata/interpolate_config.json")
    })
}

fn write_heatmap(path: &Path, heatmap: &Heatmap) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    heatmap.write_json(path)?;
    println!("wrote blended heatmap JSON to {}", path.display());
    Ok(())
}
