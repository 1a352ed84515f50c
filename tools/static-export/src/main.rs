//! Static dataset export CLI for the dashboard API.
//!
//! Writes every dashboard dataset to a directory of JSON files that the API
//! serves verbatim when `STATIC_DATA_DIR` points at it. A pinned seed makes
//! the export reproducible.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use heat_core::{
    generate_timeseries, heat_distribution, hotspots, land_use_distribution, regional_breakdown,
    regional_metrics,
};

/// Static dataset exporter
#[derive(Parser, Debug)]
#[command(name = "static-export")]
#[command(about = "Export the dashboard datasets as static JSON files")]
struct Args {
    /// Output directory
    #[arg(short, long, default_value = "data/static")]
    out: PathBuf,

    /// RNG seed for reproducible exports; omit for a fresh draw
    #[arg(short, long)]
    seed: Option<u64>,

    /// Region name stamped into the metrics snapshot
    #[arg(short, long, default_value = "Peel")]
    region: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => {
            println!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    println!("Exporting datasets to {}", args.out.display());

    export_all(&args.out, &args.region, &mut rng)?;

    println!("Done: 6 datasets written");

    Ok(())
}

/// Generate and write every dataset the API can serve statically.
fn export_all<R: Rng + ?Sized>(dir: &Path, region: &str, rng: &mut R) -> anyhow::Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let metrics = regional_metrics(region, rng)?;
    write_json(dir, "metrics.json", &metrics)?;

    let timeseries = generate_timeseries(rng);
    write_json(dir, "timeseries.json", &timeseries)?;

    write_json(dir, "regional_breakdown.json", &regional_breakdown())?;
    write_json(dir, "hotspots.geojson", &hotspots())?;
    write_json(dir, "land_use.json", &land_use_distribution())?;
    write_json(dir, "heat_distribution.json", &heat_distribution())?;

    Ok(())
}

/// Write one dataset as pretty-printed JSON, reporting its size.
fn write_json<T: Serialize>(dir: &Path, file_name: &str, payload: &T) -> anyhow::Result<()> {
    let path = dir.join(file_name);
    let json = serde_json::to_string_pretty(payload)
        .with_context(|| format!("Failed to serialize {}", file_name))?;
    fs::write(&path, &json).with_context(|| format!("Failed to write {}", path.display()))?;

    println!("  {} ({} bytes)", file_name, json.len());

    Ok(())
}
