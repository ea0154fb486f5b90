//! mesh-gen - procedural mesh scene builder
//!
//! Reads a scene manifest (scene.toml), generates every listed shape and
//! writes the combined buffers as JSON and/or Wavefront OBJ.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mesh_gen::manifest;

#[derive(Parser)]
#[command(name = "mesh-gen")]
#[command(about = "Procedural mesh scene builder")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a scene from a manifest file
    Build {
        /// Path to scene.toml manifest
        #[arg(default_value = "scene.toml")]
        manifest: PathBuf,

        /// Output directory (overrides manifest)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate every shape and report counts without writing files
    Check {
        /// Path to scene.toml manifest
        #[arg(default_value = "scene.toml")]
        manifest: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match &cli.command {
        Commands::Build { verbose: true, .. } => tracing::Level::DEBUG,
        _ => tracing::Level::INFO,
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    match cli.command {
        Commands::Build {
            manifest,
            output,
            verbose: _,
        } => {
            tracing::info!("Building scene from {:?}", manifest);
            let config = manifest::load_manifest(&manifest)?;
            let written = manifest::build_all(&config, output.as_deref())?;
            tracing::info!("Build complete! {} file(s) written", written.len());
        }

        Commands::Check { manifest } => {
            tracing::info!("Checking manifest {:?}", manifest);
            let config = manifest::load_manifest(&manifest)?;
            match manifest::check(&config) {
                0 => tracing::info!("Manifest is valid!"),
                invalid => tracing::warn!("{} shape(s) failed validation", invalid),
            }
        }
    }

    Ok(())
}
