//! Command-line argument parsing for the globe tools.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Globe command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "globe", about = "Octahedron sphere mesh generator")]
pub struct CliArgs {
    /// Subdivision passes applied to the octahedron.
    #[arg(long)]
    pub divisions: Option<u32>,

    /// Skip elevation sampling.
    #[arg(long)]
    pub no_elevation: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(divisions) = args.divisions {
            self.mesh.divisions = divisions;
        }
        if args.no_elevation {
            self.elevation.enabled = false;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
