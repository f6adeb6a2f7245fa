//! Demo binary that builds the globe sphere mesh and reports on it.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p globe-demo` for the configured depth.
//! Run with `cargo run -p globe-demo -- --divisions 3 --no-elevation` to override.

mod heightmap;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use globe_config::{CliArgs, Config};
use globe_mesh::{SphereMesh, SphereMeshCache, fill_elevations};
use tracing::{error, info};

const HEIGHTMAP_SEED: u64 = 42;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("globe")
    });

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    globe_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let mut cache = SphereMeshCache::new();
    let mesh = match cache.get_or_build(config.mesh.divisions) {
        Ok(mesh) => mesh,
        Err(e) => {
            error!("Failed to build sphere: {e}");
            return ExitCode::FAILURE;
        }
    };

    report_mesh(config.mesh.divisions, &mesh);

    if config.elevation.enabled {
        let mut mesh = mesh;
        if let Err(e) = demonstrate_elevation(&config, Arc::make_mut(&mut mesh)) {
            error!("Failed to sample elevation: {e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

/// Log the mesh's size and how many vertices the texture seam duplicated.
fn report_mesh(divisions: u32, mesh: &SphereMesh) {
    let unique_positions = mesh.unique_position_count();
    info!(
        "Built sphere at depth {}: {} triangles, {} vertices ({} seam duplicates)",
        divisions,
        mesh.triangle_count(),
        mesh.vertex_count(),
        mesh.vertex_count() - unique_positions
    );
    info!(
        "Buffer sizes: indices {} B, position {} B, texcoord {} B, elevation {} B",
        mesh.indices_bytes().len(),
        mesh.position_bytes().len(),
        mesh.texcoord_bytes().len(),
        mesh.elevation_bytes().len()
    );
}

/// Fill elevations from a synthetic heightmap and log their range.
fn demonstrate_elevation(
    config: &Config,
    mesh: &mut SphereMesh,
) -> Result<(), globe_mesh::MeshError> {
    let heightmap = heightmap::synthetic_heightmap(
        config.elevation.heightmap_width,
        config.elevation.heightmap_height,
        HEIGHTMAP_SEED,
    );
    fill_elevations(mesh, &heightmap)?;

    let (min, max) = mesh
        .elevation
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &e| {
            (lo.min(e), hi.max(e))
        });
    info!(
        "Sampled {}x{} heightmap: elevation range [{:.3}, {:.3}]",
        heightmap.width(),
        heightmap.height(),
        min,
        max
    );
    Ok(())
}
