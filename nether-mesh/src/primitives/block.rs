//! Axis-aligned box with shared or per-face vertices

use glam::Vec3;
use tracing::debug;

use crate::color::Color;
use crate::types::{Primitive, Topology};

/// Block generator options
#[derive(Debug, Clone, PartialEq)]
pub struct BlockConfig {
    /// Color broadcast to every vertex; `None` uses the built-in palette
    pub color: Option<Color>,
    /// Emit 8 shared corners (true) or 24 per-face vertices (false)
    pub shared_vertices: bool,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            color: None,
            shared_vertices: true,
        }
    }
}

/// Unit corner signs, indexed by shared vertex
///
/// 0-3 are the front (+Z) corners, 4-7 the back (-Z) corners, each in
/// bottom-left, bottom-right, top-left, top-right order seen from +Z.
const CORNERS: [[f32; 3]; 8] = [
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
];

/// Corners of each face as (bottom-left, bottom-right, top-left, top-right)
/// viewed from outside the box
///
/// Order: front, right, left, top, bottom, back
const FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3], // front  (+Z)
    [1, 5, 3, 7], // right  (+X)
    [4, 0, 6, 2], // left   (-X)
    [2, 3, 6, 7], // top    (+Y)
    [4, 5, 0, 1], // bottom (-Y)
    [5, 4, 7, 6], // back   (-Z)
];

/// Triangle list over the 8 shared corners (CCW from outside)
const SHARED_INDICES: [u32; 36] = [
    0, 1, 2, 2, 1, 3, // front
    1, 5, 3, 3, 5, 7, // right
    4, 0, 6, 6, 0, 2, // left
    2, 3, 6, 6, 3, 7, // top
    4, 5, 0, 0, 5, 1, // bottom
    5, 4, 7, 7, 4, 6, // back
];

/// Triangle list over the 24 per-face vertices (CCW from outside)
const UNSHARED_INDICES: [u32; 36] = [
    0, 1, 2, 2, 1, 3, // front
    4, 5, 6, 6, 5, 7, // right
    8, 9, 10, 10, 9, 11, // left
    12, 13, 14, 14, 13, 15, // top
    16, 17, 18, 18, 17, 19, // bottom
    20, 21, 22, 22, 21, 23, // back
];

/// Per-face texture coordinates, repeated for every face
const FACE_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];

/// Default corner colors for shared mode (one per corner)
const CORNER_COLORS: [[f32; 3]; 8] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 1.0, 0.0],
    [1.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, 0.5, 0.0],
];

/// Default face colors for unshared mode (front, right, left, top, bottom, back)
const FACE_COLORS: [[f32; 3]; 6] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 1.0, 0.0],
    [1.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
];

/// Generate an axis-aligned box
///
/// # Arguments
/// * `half_extents` - Half size along X, Y and Z
/// * `center` - Box center
/// * `config` - Coloring and vertex-sharing options
///
/// # Returns
/// - Shared mode: 8 vertices, 36 list indices, no texture coordinates or normals
/// - Unshared mode: 24 vertices (4 per face), 48 texture-coordinate floats,
///   an explicitly empty normal buffer, 36 list indices
pub fn generate_block(half_extents: Vec3, center: Vec3, config: &BlockConfig) -> Primitive {
    let corner = |i: usize| center + Vec3::from_array(CORNERS[i]) * half_extents;

    let mut mesh = Primitive::new(Topology::TriangleList);

    if config.shared_vertices {
        for i in 0..CORNERS.len() {
            mesh.add_vertex(corner(i));
        }

        match &config.color {
            Some(color) => color.broadcast(&mut mesh.colors, CORNERS.len()),
            None => mesh.colors = CORNER_COLORS.concat(),
        }

        mesh.indices.extend_from_slice(&SHARED_INDICES);
    } else {
        let mut uvs = Vec::with_capacity(FACES.len() * FACE_UVS.len() * 2);

        for (face, corners) in FACES.iter().enumerate() {
            for &i in corners {
                mesh.add_vertex(corner(i));
            }
            uvs.extend(FACE_UVS.iter().flatten());

            match &config.color {
                Some(color) => color.broadcast(&mut mesh.colors, corners.len()),
                None => Color::Rgb(FACE_COLORS[face]).broadcast(&mut mesh.colors, corners.len()),
            }
        }

        mesh.texture_coords = Some(uvs);
        // Flat per-face normals are not generated yet; present but empty
        mesh.normals = Some(Vec::new());
        mesh.indices.extend_from_slice(&UNSHARED_INDICES);
    }

    debug!(
        "generate_block: {} vertices, {} indices (shared={})",
        mesh.vertex_count(),
        mesh.index_count(),
        config.shared_vertices
    );

    mesh
}
