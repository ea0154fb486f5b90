//! Declarative shape descriptions
//!
//! A [`Shape`] is the serializable form of one generator call, so scenes can
//! be described in data files and rebuilt on demand.

use glam::{Mat3, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::color::Color;
use crate::primitives::{
    BlockConfig, FaceConfig, SphereConfig, generate_block, generate_face, generate_sphere,
};
use crate::types::Primitive;

/// One generator invocation, tagged by `kind`
///
/// ```toml
/// kind = "sphere"
/// center = [0.0, 2.0, 0.0]
/// radius = 1.0
/// precision = 8
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Block(BlockShape),
    Face(FaceShape),
    Sphere(SphereShape),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockShape {
    pub half_extents: [f32; 3],
    #[serde(default)]
    pub center: [f32; 3],
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default = "default_true")]
    pub shared_vertices: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceShape {
    pub half_extents: [f32; 2],
    #[serde(default)]
    pub center: [f32; 3],
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default = "default_true")]
    pub strip: bool,
    #[serde(default)]
    pub rotation: Option<Rotation>,
}

/// Axis-angle rotation for a face
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub axis: [f32; 3],
    pub degrees: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereShape {
    #[serde(default)]
    pub center: [f32; 3],
    pub radius: f32,
    pub precision: u32,
    #[serde(default)]
    pub color: Color,
    #[serde(default = "default_true")]
    pub strip: bool,
    #[serde(default)]
    pub random_color: bool,
}

fn default_true() -> bool {
    true
}

impl Rotation {
    /// Rotation matrix; a zero-length axis yields the identity
    pub fn matrix(&self) -> Mat3 {
        match Vec3::from_array(self.axis).try_normalize() {
            Some(axis) => Mat3::from_axis_angle(axis, self.degrees.to_radians()),
            None => {
                warn!("Rotation axis {:?} has zero length, ignoring rotation", self.axis);
                Mat3::IDENTITY
            }
        }
    }
}

impl Shape {
    /// Run the matching generator
    pub fn generate(&self) -> Primitive {
        match self {
            Shape::Block(block) => generate_block(
                Vec3::from_array(block.half_extents),
                Vec3::from_array(block.center),
                &BlockConfig {
                    color: block.color,
                    shared_vertices: block.shared_vertices,
                },
            ),
            Shape::Face(face) => generate_face(
                Vec2::from_array(face.half_extents),
                Vec3::from_array(face.center),
                &FaceConfig {
                    color: face.color,
                    strip: face.strip,
                    orientation: face.rotation.map_or(Mat3::IDENTITY, |r| r.matrix()),
                },
            ),
            Shape::Sphere(sphere) => generate_sphere(
                Vec3::from_array(sphere.center),
                sphere.radius,
                sphere.precision,
                &SphereConfig {
                    color: sphere.color,
                    strip: sphere.strip,
                    random_color: sphere.random_color,
                },
            ),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Block(_) => "block",
            Shape::Face(_) => "face",
            Shape::Sphere(_) => "sphere",
        }
    }
}
