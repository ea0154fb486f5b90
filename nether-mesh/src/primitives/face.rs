//! Single oriented quad

use glam::{Mat3, Vec2, Vec3};
use tracing::debug;

use crate::color::Color;
use crate::math::{push_vec3, radial_normal};
use crate::types::{Primitive, Topology};

/// Face generator options
#[derive(Debug, Clone, PartialEq)]
pub struct FaceConfig {
    /// Color broadcast to all 4 vertices; `None` means white
    pub color: Option<Color>,
    /// Emit strip indices (with restart markers) instead of a triangle list
    pub strip: bool,
    /// Rotation applied to the local quad before translation
    pub orientation: Mat3,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            color: None,
            strip: true,
            orientation: Mat3::IDENTITY,
        }
    }
}

/// Local-frame corners: bottom-left, bottom-right, top-left, top-right
const LOCAL_CORNERS: [[f32; 2]; 4] = [[-1.0, -1.0], [1.0, -1.0], [-1.0, 1.0], [1.0, 1.0]];

const FACE_UVS: [f32; 8] = [0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0];

/// Strip order, padded with a repeated index at each end so faces can be
/// chained into one strip
const STRIP_INDICES: [u32; 6] = [0, 0, 1, 2, 3, 3];

const LIST_INDICES: [u32; 6] = [0, 1, 2, 1, 3, 2];

/// Generate a single planar quad
///
/// # Arguments
/// * `half_extents` - Half width (X) and half height (Y) in the local frame
/// * `center` - Quad center after rotation
/// * `config` - Coloring, topology and orientation
///
/// # Returns
/// Mesh with 4 vertices and 6 indices
///
/// All four vertices share one normal: the unit direction from `center` to
/// the first (bottom-left) corner.
pub fn generate_face(half_extents: Vec2, center: Vec3, config: &FaceConfig) -> Primitive {
    let topology = if config.strip {
        Topology::TriangleStrip
    } else {
        Topology::TriangleList
    };
    let mut mesh = Primitive::new(topology);

    for [sx, sy] in LOCAL_CORNERS {
        let local = Vec3::new(sx * half_extents.x, sy * half_extents.y, 0.0);
        mesh.add_vertex(config.orientation * local + center);
    }

    let normal = radial_normal(mesh.position(0), center);
    let mut normals = Vec::with_capacity(12);
    for _ in 0..4 {
        push_vec3(&mut normals, normal);
    }
    mesh.normals = Some(normals);
    mesh.texture_coords = Some(FACE_UVS.to_vec());

    config
        .color
        .unwrap_or(Color::WHITE)
        .broadcast(&mut mesh.colors, 4);

    mesh.indices.extend_from_slice(if config.strip {
        &STRIP_INDICES
    } else {
        &LIST_INDICES
    });

    debug!(
        "generate_face: {} vertices, {:?}",
        mesh.vertex_count(),
        mesh.topology
    );

    mesh
}
