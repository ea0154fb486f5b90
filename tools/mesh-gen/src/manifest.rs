//! Manifest parsing and build orchestration
//!
//! Parses scene.toml, folds its shapes into one scene and writes the
//! requested export formats.

use anyhow::{Context, Result};
use nether_mesh::{Primitive, Scene, Shape, write_json_file, write_obj_file};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root manifest structure
#[derive(Debug, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default, rename = "shape")]
    pub shapes: Vec<Shape>,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_formats")]
    pub formats: Vec<ExportFormat>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            name: default_name(),
            formats: default_formats(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("meshes/")
}

fn default_name() -> String {
    "scene".to_string()
}

fn default_formats() -> Vec<ExportFormat> {
    vec![ExportFormat::Json]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Obj,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Obj => "obj",
        }
    }
}

/// Load and parse a manifest file
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest: {:?}", path))?;
    let manifest: Manifest = toml::from_str(&content)
        .with_context(|| format!("Failed to parse manifest: {:?}", path))?;
    Ok(manifest)
}

/// Generate every shape in manifest order and fold them into one scene
pub fn build_scene(manifest: &Manifest) -> Scene {
    let mut scene = Scene::new();
    for shape in &manifest.shapes {
        scene.add(&shape.generate());
    }
    scene
}

/// Generate each shape on its own and log its counts and validation result
///
/// Returns the number of shapes that failed validation.
pub fn check(manifest: &Manifest) -> usize {
    if manifest.shapes.is_empty() {
        tracing::warn!("Manifest lists no shapes");
    }

    let mut invalid = 0;
    for (i, shape) in manifest.shapes.iter().enumerate() {
        let mesh = shape.generate();
        match mesh.validate() {
            Ok(()) => tracing::info!(
                "shape {} ({}): {} vertices, {} indices, {:?}",
                i,
                shape.kind(),
                mesh.vertex_count(),
                mesh.index_count(),
                mesh.topology
            ),
            Err(e) => {
                invalid += 1;
                tracing::warn!("shape {} ({}) is invalid: {}", i, shape.kind(), e);
            }
        }
    }
    invalid
}

/// Write the primitive in every format the manifest asks for
pub fn write_outputs(
    manifest: &Manifest,
    primitive: &Primitive,
    output_override: Option<&Path>,
) -> Result<Vec<PathBuf>> {
    let output_dir = output_override.unwrap_or(&manifest.output.dir);
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

    let name = &manifest.output.name;
    let mut written = Vec::with_capacity(manifest.output.formats.len());
    for format in &manifest.output.formats {
        let path = output_dir.join(format!("{}.{}", name, format.extension()));
        tracing::info!("Writing {:?}", path);
        let result = match format {
            ExportFormat::Json => write_json_file(primitive, &path),
            ExportFormat::Obj => write_obj_file(primitive, &path, name),
        };
        result.with_context(|| format!("Failed to write {:?}", path))?;
        written.push(path);
    }
    Ok(written)
}

/// Build the scene and write all outputs
///
/// Scene inconsistencies are reported as warnings and do not stop the build.
pub fn build_all(manifest: &Manifest, output_override: Option<&Path>) -> Result<Vec<PathBuf>> {
    let scene = build_scene(manifest);
    let mesh = scene.primitive();

    if let Err(e) = mesh.validate() {
        tracing::warn!("Scene '{}' is inconsistent: {}", manifest.output.name, e);
    }
    tracing::info!(
        "Scene '{}': {} shapes, {} vertices, {} indices",
        manifest.output.name,
        manifest.shapes.len(),
        mesh.vertex_count(),
        mesh.index_count()
    );

    write_outputs(manifest, mesh, output_override)
}
