//! Procedural primitive generators
//!
//! Each generator takes its geometric parameters plus one configuration
//! struct and returns a fully formed [`Primitive`](crate::Primitive).

mod block;
mod face;
mod sphere;


pub use block::{BlockConfig, generate_block};
pub use face::{FaceConfig, generate_face};
pub use sphere::{SphereConfig, generate_sphere, sphere_index_count, sphere_vertex_count};
