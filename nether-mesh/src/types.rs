//! Primitive buffer types
//!
//! Shared output type for every generator and for the scene assembler.

use bytemuck::cast_slice;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::math::push_vec3;
use crate::{NORMAL_COMPONENTS, POSITION_COMPONENTS, TEXCOORD_COMPONENTS};

/// How an index buffer is consumed when drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    /// Independent triangles, 3 indices each
    #[default]
    TriangleList,
    /// Sliding window of 3 indices; odd triangles have their first two
    /// indices swapped, repeated indices mark restart (degenerate) triangles
    TriangleStrip,
}

/// Flat vertex-attribute buffers for one drawable shape
///
/// All attribute buffers are parallel: vertex `i` owns positions
/// `[3i..3i+3]`, its color tuple, its `(u, v)` pair and its normal.
///
/// Optional attributes distinguish two states:
/// - `None`: not generated for this configuration (e.g. shared-vertex blocks)
/// - `Some(buffer)`: generated; `buffer` may legitimately be empty
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    /// Positions as consecutive (x, y, z) triples
    pub vertices: Vec<f32>,
    /// Colors, 3 or 4 floats per vertex
    pub colors: Vec<f32>,
    /// Texture coordinates as (u, v) pairs
    pub texture_coords: Option<Vec<f32>>,
    /// Unit normals as (nx, ny, nz) triples
    pub normals: Option<Vec<f32>>,
    /// Vertex indices, interpreted according to `topology`
    pub indices: Vec<u32>,
    /// Index consumption mode
    pub topology: Topology,
}

impl Primitive {
    /// Create an empty primitive with the given topology and absent optional attributes
    pub fn new(topology: Topology) -> Self {
        Self {
            topology,
            ..Default::default()
        }
    }

    /// Add a vertex position and return its index
    pub(crate) fn add_vertex(&mut self, position: Vec3) -> u32 {
        let index = self.vertex_count() as u32;
        push_vec3(&mut self.vertices, position);
        index
    }

    /// Add a triangle (3 vertex indices)
    pub(crate) fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }

    /// Number of vertices (positions / 3)
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / POSITION_COMPONENTS
    }

    /// Number of indices
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Floats per vertex in the color buffer (0 when there are no vertices)
    pub fn color_components(&self) -> usize {
        match self.vertex_count() {
            0 => 0,
            count => self.colors.len() / count,
        }
    }

    /// Position of vertex `index`
    ///
    /// # Panics
    /// Panics if `index >= self.vertex_count()`.
    pub fn position(&self, index: u32) -> Vec3 {
        let base = index as usize * POSITION_COMPONENTS;
        Vec3::from_slice(&self.vertices[base..base + POSITION_COMPONENTS])
    }

    /// Decode the index buffer into drawable triangles
    ///
    /// Strips are unrolled with the alternating winding rule; triangles that
    /// repeat an index (restart markers) are skipped.
    pub fn triangles(&self) -> Triangles<'_> {
        Triangles {
            indices: &self.indices,
            topology: self.topology,
            cursor: 0,
        }
    }

    /// Check the buffer-length and index-range invariants
    ///
    /// Every non-empty attribute buffer must hold exactly one entry per
    /// vertex, and every index must reference an existing vertex.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.vertices.len() % POSITION_COMPONENTS != 0 {
            return Err(MeshError::PositionsNotTriples(self.vertices.len()));
        }
        let vertex_count = self.vertex_count();

        if !self.colors.is_empty() {
            let width = self.color_components();
            if !(width == 3 || width == 4) || self.colors.len() != vertex_count * width {
                return Err(MeshError::AttributeLength {
                    attribute: "colors",
                    components: width.clamp(3, 4),
                    expected: vertex_count * width.clamp(3, 4),
                    actual: self.colors.len(),
                });
            }
        }

        check_attribute(
            "texture_coords",
            self.texture_coords.as_deref(),
            TEXCOORD_COMPONENTS,
            vertex_count,
        )?;
        check_attribute(
            "normals",
            self.normals.as_deref(),
            NORMAL_COMPONENTS,
            vertex_count,
        )?;

        if let Some((position, &index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|&(_, &index)| index as usize >= vertex_count)
        {
            return Err(MeshError::IndexOutOfRange {
                position,
                index,
                vertex_count,
            });
        }

        Ok(())
    }

    /// Positions as raw bytes for GPU upload
    pub fn vertex_bytes(&self) -> &[u8] {
        cast_slice(&self.vertices)
    }

    /// Colors as raw bytes for GPU upload
    pub fn color_bytes(&self) -> &[u8] {
        cast_slice(&self.colors)
    }

    /// Indices as raw bytes (u32 little/native endian) for GPU upload
    pub fn index_bytes(&self) -> &[u8] {
        cast_slice(&self.indices)
    }
}

impl AsRef<Primitive> for Primitive {
    fn as_ref(&self) -> &Primitive {
        self
    }
}

fn check_attribute(
    attribute: &'static str,
    buffer: Option<&[f32]>,
    components: usize,
    vertex_count: usize,
) -> Result<(), MeshError> {
    match buffer {
        Some(data) if !data.is_empty() && data.len() != vertex_count * components => {
            Err(MeshError::AttributeLength {
                attribute,
                components,
                expected: vertex_count * components,
                actual: data.len(),
            })
        }
        _ => Ok(()),
    }
}

/// Iterator over the triangles of a [`Primitive`], see [`Primitive::triangles`]
pub struct Triangles<'a> {
    indices: &'a [u32],
    topology: Topology,
    cursor: usize,
}

impl Iterator for Triangles<'_> {
    type Item = [u32; 3];

    fn next(&mut self) -> Option<Self::Item> {
        match self.topology {
            Topology::TriangleList => {
                let tri = self.indices.get(self.cursor..self.cursor + 3)?;
                self.cursor += 3;
                Some([tri[0], tri[1], tri[2]])
            }
            Topology::TriangleStrip => loop {
                let window = self.indices.get(self.cursor..self.cursor + 3)?;
                let odd = self.cursor % 2 == 1;
                self.cursor += 1;

                let (a, b, c) = (window[0], window[1], window[2]);
                if a == b || b == c || a == c {
                    continue;
                }
                return Some(if odd { [b, a, c] } else { [a, b, c] });
            },
        }
    }
}
