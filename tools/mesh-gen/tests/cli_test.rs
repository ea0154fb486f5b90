//! Integration tests for the mesh-gen binary
//!
//! Writes a manifest into a temp dir, runs the built binary and inspects
//! the files it produces.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

const SCENE: &str = r#"
[output]
name = "demo"
formats = ["json", "obj"]

[[shape]]
kind = "face"
half_extents = [2.0, 2.0]
center = [0.0, -1.0, 0.0]
strip = false
rotation = { axis = [1.0, 0.0, 0.0], degrees = -90.0 }

[[shape]]
kind = "sphere"
center = [0.0, 1.0, 0.0]
radius = 1.0
precision = 8
color = [0.2, 0.4, 1.0]
strip = false
"#;

fn mesh_gen(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mesh-gen"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("Failed to run mesh-gen")
}

#[test]
fn test_build_writes_json_and_obj() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("scene.toml"), SCENE).expect("Failed to write manifest");

    let out = dir.path().join("out");
    let output = mesh_gen(&["build", "-o", out.to_str().expect("utf8 path")], dir.path());
    assert!(
        output.status.success(),
        "build failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    // 4 face vertices + 9 * 16 sphere vertices
    let expected_vertices = 4 + 9 * 16;

    let json = std::fs::read_to_string(out.join("demo.json")).expect("JSON output should exist");
    let value: serde_json::Value = serde_json::from_str(&json).expect("JSON output should parse");
    assert_eq!(
        value["vertices"].as_array().map(Vec::len),
        Some(expected_vertices * 3)
    );
    assert_eq!(value["topology"], "triangle_list");
    let max_index = value["indices"]
        .as_array()
        .expect("indices array")
        .iter()
        .filter_map(|v| v.as_u64())
        .max()
        .expect("non-empty indices");
    assert!((max_index as usize) < expected_vertices);

    let obj = std::fs::read_to_string(out.join("demo.obj")).expect("OBJ output should exist");
    assert!(obj.contains("o demo"));
    assert_eq!(
        obj.lines().filter(|l| l.starts_with("v ")).count(),
        expected_vertices
    );
    assert_eq!(
        obj.lines().filter(|l| l.starts_with("vn ")).count(),
        expected_vertices
    );
    // 2 face triangles + 12p(p-1)/3 sphere triangles
    assert_eq!(obj.lines().filter(|l| l.starts_with("f ")).count(), 2 + 4 * 8 * 7);
}

#[test]
fn test_build_default_output_dir() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(
        dir.path().join("scene.toml"),
        "[[shape]]\nkind = \"block\"\nhalf_extents = [1.0, 1.0, 1.0]\n",
    )
    .expect("Failed to write manifest");

    let output = mesh_gen(&["build"], dir.path());
    assert!(output.status.success());
    assert!(dir.path().join("meshes").join("scene.json").exists());
    assert!(!dir.path().join("meshes").join("scene.obj").exists());
}

#[test]
fn test_check_valid_manifest() {
    let dir = tempdir().expect("Failed to create temp dir");
    let manifest = dir.path().join("custom.toml");
    std::fs::write(&manifest, SCENE).expect("Failed to write manifest");

    let output = mesh_gen(&["check", "custom.toml"], dir.path());
    assert!(output.status.success());
    // Check never writes outputs
    assert!(!dir.path().join("meshes").exists());
}

#[test]
fn test_check_rejects_bad_manifest() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(
        dir.path().join("scene.toml"),
        "[[shape]]\nkind = \"torus\"\nradius = 1.0\n",
    )
    .expect("Failed to write manifest");

    let output = mesh_gen(&["check"], dir.path());
    assert!(!output.status.success());
}

#[test]
fn test_missing_manifest_fails() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = mesh_gen(&["build", "nope.toml"], dir.path());
    assert!(!output.status.success());
}
