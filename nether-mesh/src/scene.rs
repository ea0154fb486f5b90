//! Scene assembly
//!
//! Folds any number of primitives into one set of buffers by concatenating
//! their attributes and rebasing their indices.

use tracing::{debug, warn};

use crate::types::{Primitive, Topology};

/// Aggregate of primitives drawn as one mesh
///
/// The scene owns its own buffers. Sources are only borrowed, so a single
/// generated primitive can be added to any number of scenes (or several
/// times to the same one).
///
/// # Example
/// ```
/// use glam::Vec3;
/// use nether_mesh::{BlockConfig, Scene, generate_block};
///
/// let block = generate_block(Vec3::ONE, Vec3::ZERO, &BlockConfig::default());
///
/// let mut scene = Scene::new();
/// scene.add(&block).add(&block);
///
/// assert_eq!(scene.primitive().vertex_count(), 16);
/// assert_eq!(scene.primitive().indices[36], 8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    mesh: Primitive,
}

impl Scene {
    /// Create an empty scene; optional attributes start present and empty
    pub fn new() -> Self {
        Self {
            mesh: Primitive {
                texture_coords: Some(Vec::new()),
                normals: Some(Vec::new()),
                ..Primitive::new(Topology::default())
            },
        }
    }

    /// Append a primitive, offsetting its indices past the vertices already held
    ///
    /// Absent optional attributes contribute nothing; mixing primitives with
    /// and without them leaves the scene inconsistent, which
    /// [`Primitive::validate`] reports.
    pub fn add<P: AsRef<Primitive>>(&mut self, primitive: &P) -> &mut Self {
        let source = primitive.as_ref();
        let vertex_offset = self.mesh.vertex_count() as u32;

        if source.vertex_count() > 0 {
            if vertex_offset == 0 {
                self.mesh.topology = source.topology;
            } else {
                if source.topology != self.mesh.topology {
                    warn!(
                        "Scene topology is {:?} but added primitive is {:?}; concatenating anyway",
                        self.mesh.topology, source.topology
                    );
                }
                let (ours, theirs) = (self.mesh.color_components(), source.color_components());
                if ours != theirs {
                    warn!(
                        "Scene colors have {} components but added primitive has {}",
                        ours, theirs
                    );
                }
            }
        }

        self.mesh.vertices.extend_from_slice(&source.vertices);
        self.mesh.colors.extend_from_slice(&source.colors);

        extend_present(&mut self.mesh.texture_coords, &source.texture_coords);
        extend_present(&mut self.mesh.normals, &source.normals);

        self.mesh.indices.reserve(source.indices.len());
        self.mesh
            .indices
            .extend(source.indices.iter().map(|&index| index + vertex_offset));

        debug!(
            "Scene::add: +{} vertices, +{} indices (total {} / {})",
            source.vertex_count(),
            source.index_count(),
            self.mesh.vertex_count(),
            self.mesh.index_count()
        );

        self
    }

    /// Aggregated buffers
    pub fn primitive(&self) -> &Primitive {
        &self.mesh
    }

    pub fn into_primitive(self) -> Primitive {
        self.mesh
    }
}

fn extend_present(ours: &mut Option<Vec<f32>>, theirs: &Option<Vec<f32>>) {
    if let (Some(ours), Some(theirs)) = (ours, theirs) {
        ours.extend_from_slice(theirs);
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Primitive> for Scene {
    fn as_ref(&self) -> &Primitive {
        &self.mesh
    }
}
