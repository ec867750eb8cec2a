//! Decode one heatmap image described by a JSON config and write the floors
//! as JSON.
//!
//! ```text
//! cargo run -p floorheat --example decode_heatmap -- [config.json]
//! ```

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use floorheat::{DecodeConfig, Heatmap, Heatmapper};

#[cfg(not(feature = "tracing"))]
use log::info;
#[cfg(feature = "tracing")]
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(not(feature = "tracing"))]
    {
        let level = floorheat::core::init_from_env()?;
        info!("logger initialized at {level}");
    }
    #[cfg(feature = "tracing")]
    floorheat::core::init_tracing(false);

    let config_path = parse_config_path();
    let cfg = DecodeConfig::load_json(&config_path)?;
    info!(
        "decoding {} into {} floor(s)",
        cfg.source, cfg.floor_count
    );

    let mapper = Heatmapper::new();
    let heatmap = cfg.run(mapper.decoder()).await?;
    summarize(&heatmap);

    write_heatmap(&cfg.output_path(), &heatmap)
}

fn parse_config_path() -> PathBuf {
    env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata/decode_config.json")
    })
}

fn summarize(heatmap: &Heatmap) {
    for (idx, floor) in heatmap.floors().iter().enumerate() {
        let max = floor.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = floor.iter().sum::<f64>() / floor.len() as f64;
        info!(
            "floor {idx}: {}x{} mean={mean:.3} max={max:.2}",
            heatmap.width(),
            heatmap.height()
        );
    }
}

fn write_heatmap(path: &Path, heatmap: &Heatmap) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    heatmap.write_json(path)?;
    println!("wrote heatmap JSON to {}", path.display());
    Ok(())
}
