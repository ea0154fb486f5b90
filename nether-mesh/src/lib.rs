//! Nether-Mesh: procedural primitives for Nethercore
//!
//! Generates flat, GPU-ready vertex buffers for a small family of parametric
//! shapes and folds them together into a single drawable scene.
//!
//! # Shapes
//!
//! - **Block**: axis-aligned box, 8 shared corners or 24 per-face vertices
//! - **Face**: single oriented quad
//! - **Sphere**: latitude/longitude sphere with triangle strip or list indices
//!
//! Every generator returns a [`Primitive`]: five parallel buffers (positions,
//! colors, texture coordinates, normals, indices) plus the [`Topology`] the
//! indices are meant to be drawn with.
//!
//! # Usage
//!
//! ```
//! use glam::Vec3;
//! use nether_mesh::{BlockConfig, Scene, SphereConfig, generate_block, generate_sphere};
//!
//! let block = generate_block(Vec3::splat(0.5), Vec3::ZERO, &BlockConfig::default());
//! let sphere = generate_sphere(
//!     Vec3::new(0.0, 2.0, 0.0),
//!     1.0,
//!     8,
//!     &SphereConfig { strip: false, ..Default::default() },
//! );
//!
//! let mut scene = Scene::new();
//! scene.add(&block).add(&sphere);
//!
//! assert_eq!(scene.primitive().vertex_count(), 8 + 9 * 16);
//! ```

mod color;
mod error;
mod export;
mod math;
mod primitives;
mod scene;
mod shape;
mod types;

pub use color::Color;
pub use error::MeshError;
pub use export::{write_json, write_json_file, write_obj, write_obj_file};
pub use math::distance;
pub use primitives::{
    BlockConfig, FaceConfig, SphereConfig, generate_block, generate_face, generate_sphere,
    sphere_index_count, sphere_vertex_count,
};
pub use scene::Scene;
pub use shape::{BlockShape, FaceShape, Rotation, Shape, SphereShape};
pub use types::{Primitive, Topology, Triangles};

/// Components per position entry (x, y, z)
pub const POSITION_COMPONENTS: usize = 3;

/// Components per texture coordinate entry (u, v)
pub const TEXCOORD_COMPONENTS: usize = 2;

/// Components per normal entry (nx, ny, nz)
pub const NORMAL_COMPONENTS: usize = 3;
