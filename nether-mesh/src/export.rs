//! Primitive export to JSON and Wavefront OBJ

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::MeshError;
use crate::types::Primitive;
use crate::{NORMAL_COMPONENTS, TEXCOORD_COMPONENTS};

/// Serialize all buffers and the topology as pretty-printed JSON
///
/// Absent optional attributes are written as `null`.
pub fn write_json<W: Write>(primitive: &Primitive, writer: W) -> Result<(), MeshError> {
    serde_json::to_writer_pretty(writer, primitive)?;
    Ok(())
}

pub fn write_json_file(primitive: &Primitive, path: &Path) -> Result<(), MeshError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_json(primitive, &mut writer)?;
    writer.flush()?;
    debug!("Wrote {}", path.display());
    Ok(())
}

/// Write a Wavefront OBJ object
///
/// Vertex colors use the common `v x y z r g b` extension (alpha dropped).
/// Strips are decoded into independent triangles, so the file always
/// contains plain `f` records with 1-based indices.
pub fn write_obj<W: Write>(
    primitive: &Primitive,
    mut writer: W,
    name: &str,
) -> Result<(), MeshError> {
    let vertex_count = primitive.vertex_count();
    let color_width = primitive.color_components();
    let has_colors = color_width >= 3 && primitive.colors.len() == vertex_count * color_width;

    let uvs = covering(
        "texture_coords",
        primitive.texture_coords.as_deref(),
        TEXCOORD_COMPONENTS,
        vertex_count,
    );
    let normals = covering(
        "normals",
        primitive.normals.as_deref(),
        NORMAL_COMPONENTS,
        vertex_count,
    );

    writeln!(writer, "# nether-mesh")?;
    writeln!(writer, "o {}", name)?;

    for i in 0..vertex_count {
        let p = primitive.position(i as u32);
        if has_colors {
            let c = &primitive.colors[i * color_width..i * color_width + 3];
            writeln!(writer, "v {} {} {} {} {} {}", p.x, p.y, p.z, c[0], c[1], c[2])?;
        } else {
            writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
        }
    }

    if let Some(uvs) = uvs {
        for uv in uvs.chunks_exact(TEXCOORD_COMPONENTS) {
            writeln!(writer, "vt {} {}", uv[0], uv[1])?;
        }
    }
    if let Some(normals) = normals {
        for n in normals.chunks_exact(NORMAL_COMPONENTS) {
            writeln!(writer, "vn {} {} {}", n[0], n[1], n[2])?;
        }
    }

    let mut faces = 0usize;
    for tri in primitive.triangles() {
        write!(writer, "f")?;
        for index in tri {
            let i = index + 1;
            match (uvs.is_some(), normals.is_some()) {
                (true, true) => write!(writer, " {i}/{i}/{i}")?,
                (true, false) => write!(writer, " {i}/{i}")?,
                (false, true) => write!(writer, " {i}//{i}")?,
                (false, false) => write!(writer, " {i}")?,
            }
        }
        writeln!(writer)?;
        faces += 1;
    }

    debug!("write_obj '{}': {} vertices, {} faces", name, vertex_count, faces);
    Ok(())
}

pub fn write_obj_file(primitive: &Primitive, path: &Path, name: &str) -> Result<(), MeshError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_obj(primitive, &mut writer, name)?;
    writer.flush()?;
    debug!("Wrote {}", path.display());
    Ok(())
}

/// The buffer if it holds exactly one entry per vertex
fn covering<'a>(
    attribute: &str,
    buffer: Option<&'a [f32]>,
    components: usize,
    vertex_count: usize,
) -> Option<&'a [f32]> {
    let data = buffer.filter(|data| !data.is_empty())?;
    if data.len() == vertex_count * components {
        Some(data)
    } else {
        warn!(
            "Skipping {} in OBJ export: {} floats for {} vertices",
            attribute,
            data.len(),
            vertex_count
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::*;
    use crate::primitives::{
        BlockConfig, FaceConfig, SphereConfig, generate_block, generate_face, generate_sphere,
    };
    use crate::scene::Scene;

    fn obj_string(primitive: &Primitive) -> String {
        let mut out = Vec::new();
        write_obj(primitive, &mut out, "test").expect("write to memory");
        String::from_utf8(out).expect("utf8 output")
    }

    fn count_prefix(text: &str, prefix: &str) -> usize {
        text.lines().filter(|l| l.starts_with(prefix)).count()
    }

    #[test]
    fn test_json_roundtrip_keeps_absent_attributes() {
        let block = generate_block(Vec3::ONE, Vec3::ZERO, &BlockConfig::default());
        let mut out = Vec::new();
        write_json(&block, &mut out).expect("write to memory");

        let value: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
        assert!(value["texture_coords"].is_null());
        assert!(value["normals"].is_null());
        assert_eq!(value["topology"], "triangle_list");
        assert_eq!(value["indices"].as_array().map(Vec::len), Some(36));

        let parsed: Primitive = serde_json::from_slice(&out).expect("parse back");
        assert_eq!(parsed, block);
    }

    #[test]
    fn test_obj_block() {
        let block = generate_block(Vec3::ONE, Vec3::ZERO, &BlockConfig::default());
        let text = obj_string(&block);

        assert!(text.contains("o test"));
        assert_eq!(count_prefix(&text, "v "), 8);
        assert_eq!(count_prefix(&text, "vt "), 0);
        assert_eq!(count_prefix(&text, "vn "), 0);
        assert_eq!(count_prefix(&text, "f "), 12);
        // First corner with its default red color
        assert!(text.contains("v -1 -1 1 1 0 0"));
        assert!(text.contains("f 1 2 3"));
    }

    #[test]
    fn test_obj_strip_sphere_decoded() {
        let sphere = generate_sphere(Vec3::ZERO, 1.0, 4, &SphereConfig::default());
        let text = obj_string(&sphere);

        assert_eq!(count_prefix(&text, "v "), 40);
        assert_eq!(count_prefix(&text, "vt "), 40);
        assert_eq!(count_prefix(&text, "vn "), 40);
        assert_eq!(count_prefix(&text, "f "), sphere.triangles().count());

        for line in text.lines().filter(|l| l.starts_with("f ")) {
            for corner in line[2..].split_whitespace() {
                let parts: Vec<&str> = corner.split('/').collect();
                assert_eq!(parts.len(), 3);
                let index: usize = parts[0].parse().expect("numeric index");
                assert!((1..=40).contains(&index));
            }
        }
    }

    #[test]
    fn test_obj_face_rgba_truncated() {
        let face = generate_face(
            Vec2::ONE,
            Vec3::ZERO,
            &FaceConfig {
                color: Some([0.25, 0.5, 0.75, 0.1].into()),
                ..Default::default()
            },
        );
        let text = obj_string(&face);
        assert!(text.contains("v -1 -1 0 0.25 0.5 0.75\n"));
        assert_eq!(count_prefix(&text, "f "), 2);
    }

    #[test]
    fn test_obj_skips_partial_attributes() {
        let shared = generate_block(Vec3::ONE, Vec3::ZERO, &BlockConfig::default());
        let sphere = generate_sphere(Vec3::X * 3.0, 1.0, 2, &SphereConfig::default());
        let mut scene = Scene::new();
        scene.add(&shared).add(&sphere);

        let text = obj_string(scene.primitive());
        assert_eq!(count_prefix(&text, "v "), 8 + 12);
        assert_eq!(count_prefix(&text, "vt "), 0);
        assert_eq!(count_prefix(&text, "vn "), 0);
    }

    #[test]
    fn test_write_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        let sphere = generate_sphere(Vec3::ZERO, 1.0, 2, &SphereConfig::default());

        let json_path = dir.path().join("sphere.json");
        let obj_path = dir.path().join("sphere.obj");
        write_json_file(&sphere, &json_path).expect("write json");
        write_obj_file(&sphere, &obj_path, "sphere").expect("write obj");

        let json = std::fs::read_to_string(&json_path).expect("read json");
        let parsed: Primitive = serde_json::from_str(&json).expect("parse json");
        assert_eq!(parsed.vertex_count(), 12);

        let obj = std::fs::read_to_string(&obj_path).expect("read obj");
        assert!(obj.starts_with("# nether-mesh\no sphere\n"));
    }

    #[test]
    fn test_write_file_missing_dir() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing").join("out.json");
        let block = generate_block(Vec3::ONE, Vec3::ZERO, &BlockConfig::default());
        assert!(matches!(
            write_json_file(&block, &path),
            Err(MeshError::Io(_))
        ));
    }
}
