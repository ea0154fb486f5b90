//! Latitude/longitude sphere with strip or list topology
//!
//! # Layout
//!
//! The sphere is sampled on `precision + 1` rings. Ring `i` is the great
//! circle through the Z poles at azimuth `phi = i * PI / precision`; sample
//! `k` on a ring sits at `psi = k * PI / precision`:
//!
//! ```text
//! position = center + radius * (cos(phi) cos(psi), sin(phi) cos(psi), sin(psi))
//! ```
//!
//! With `n = 2 * precision` samples per ring, vertex `(i, k)` has index
//! `i * n + k`. Samples `n/4` and `3n/4` are the +Z and -Z poles. Rings 0 and
//! `precision` trace the same circle from opposite sides and form the
//! texture seam.
//!
//! # Winding
//!
//! `d/dphi x d/dpsi = cos(psi) * outward`, so the parametric orientation
//! flips between the poles. Cells in `[n/4, 3n/4)` use the reversed
//! winding to keep every triangle counter-clockwise from outside.

use glam::Vec3;
use std::f32::consts::PI;
use tracing::{debug, warn};

use crate::color::Color;
use crate::math::{push_vec3, radial_normal};
use crate::types::{Primitive, Topology};

/// Sphere generator options
#[derive(Debug, Clone, PartialEq)]
pub struct SphereConfig {
    /// Color broadcast to every vertex (ignored when `random_color` is set)
    pub color: Color,
    /// Emit one continuous triangle strip instead of a triangle list
    pub strip: bool,
    /// Give each vertex three independent random components
    pub random_color: bool,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            strip: true,
            random_color: false,
        }
    }
}

/// Vertex count for a sphere of the given precision: `(p + 1) * 2p`
pub fn sphere_vertex_count(precision: u32) -> usize {
    let p = precision as usize;
    (p + 1) * 2 * p
}

/// Index count for a sphere of the given precision
///
/// - strip: `2p * (2p + 3)`, plus the closing pair alone when `p = 0`
/// - list: `12p * (p - 1)`, exact for even precisions only
pub fn sphere_index_count(precision: u32, strip: bool) -> usize {
    let p = precision as usize;
    if strip {
        // Per transition: n + 2 pairs, one restart pair between transitions,
        // one closing pair at the end
        p * (4 * p + 4) + 2 * p.saturating_sub(1) + 2
    } else {
        12 * p * p.saturating_sub(1)
    }
}

/// Generate a UV-approximated sphere
///
/// # Arguments
/// * `center` - Sphere center
/// * `radius` - Sphere radius
/// * `precision` - Angular subdivisions per half turn (even, >= 2)
/// * `config` - Coloring and topology
///
/// # Returns
/// Mesh with `(precision + 1) * 2 * precision` vertices, radial normals and
/// banded texture coordinates. `precision = 2` is an octahedron.
///
/// List mode leaves out the zero-area half of the four pole cells per ring
/// transition, so it emits `12p(p - 1)` indices rather than a full 6 per
/// cell (`12p^2`).
///
/// Odd or smaller precisions are outside the supported range; they are
/// reported with a warning and generated without adjustment. The buffers are
/// then not guaranteed to be consistent (odd precisions produce fewer
/// texture coordinates than vertices).
pub fn generate_sphere(
    center: Vec3,
    radius: f32,
    precision: u32,
    config: &SphereConfig,
) -> Primitive {
    if precision < 2 || precision % 2 != 0 {
        warn!(
            "generate_sphere: precision must be even and >= 2 (got {}), output is unspecified",
            precision
        );
    }

    let topology = if config.strip {
        Topology::TriangleStrip
    } else {
        Topology::TriangleList
    };
    let mut mesh = Primitive::new(topology);

    let ring_size = 2 * precision;
    let step = PI / precision as f32;
    let vertex_count = sphere_vertex_count(precision);

    mesh.vertices.reserve(vertex_count * 3);
    let mut normals = Vec::with_capacity(vertex_count * 3);

    for ring in 0..=precision {
        let phi = ring as f32 * step;
        let (sin_phi, cos_phi) = phi.sin_cos();

        for k in 0..ring_size {
            let psi = k as f32 * step;
            let (sin_psi, cos_psi) = psi.sin_cos();

            let position =
                center + radius * Vec3::new(cos_phi * cos_psi, sin_phi * cos_psi, sin_psi);
            mesh.add_vertex(position);
            push_vec3(&mut normals, radial_normal(position, center));
        }
    }

    mesh.normals = Some(normals);
    mesh.texture_coords = Some(band_texture_coords(precision));

    if config.random_color {
        mesh.colors.reserve(vertex_count * 3);
        for _ in 0..vertex_count {
            mesh.colors
                .extend_from_slice(&[rand::random(), rand::random(), rand::random()]);
        }
    } else {
        config.color.broadcast(&mut mesh.colors, vertex_count);
    }

    if config.strip {
        strip_indices(&mut mesh, precision);
    } else {
        list_indices(&mut mesh, precision);
    }

    debug!(
        "generate_sphere: precision {}, {} vertices, {} indices ({:?})",
        precision,
        mesh.vertex_count(),
        mesh.index_count(),
        mesh.topology
    );

    mesh
}

/// Texture coordinates for every ring, in vertex order
///
/// Each ring is unwrapped in three bands:
/// 1. `p/2 + 1` samples from the equator up to the +Z pole, `v` 0.5 -> 0, at `u0`
/// 2. `p` samples over the far side down to the -Z pole, `v` -> 1, at `u0 + 0.5`
/// 3. `p/2 - 1` samples back towards the equator, `v` 1 -> 0.5, at `u0`
///
/// where `u0 = ring / 2p`.
fn band_texture_coords(precision: u32) -> Vec<f32> {
    let p = precision as f32;
    let half = precision / 2;
    let mut uvs = Vec::with_capacity(sphere_vertex_count(precision) * 2);

    for ring in 0..=precision {
        let u = ring as f32 / (2.0 * p);

        for k in 0..=half {
            uvs.extend_from_slice(&[u, 0.5 - k as f32 / p]);
        }
        for j in 1..=precision {
            uvs.extend_from_slice(&[0.5 + u, j as f32 / p]);
        }
        for j in 1..half {
            uvs.extend_from_slice(&[u, 1.0 - j as f32 / p]);
        }
    }

    uvs
}

/// Vertex indices of one ring transition
#[derive(Clone, Copy)]
struct RingPair {
    /// First index of the current ring
    this: u32,
    /// First index of the next ring
    next: u32,
}

impl RingPair {
    fn new(ring: u32, ring_size: u32) -> Self {
        Self {
            this: ring * ring_size,
            next: (ring + 1) * ring_size,
        }
    }

    #[inline]
    fn a(&self, k: u32) -> u32 {
        self.this + k
    }

    #[inline]
    fn b(&self, k: u32) -> u32 {
        self.next + k
    }
}

/// One continuous strip zig-zagging between each pair of rings
///
/// Per transition the pairs are walked in four runs: `[0, n/4)` as
/// (this, next), `[n/4, 3n/4]` as (next, this), `[3n/4, n)` as (this, next),
/// then a closing (this, next) pair back at sample 0. Swapping the pair order
/// between runs flips strip parity to follow the winding flip at the poles;
/// the duplicated pole samples make the switching triangles degenerate.
fn strip_indices(mesh: &mut Primitive, precision: u32) {
    let n = 2 * precision;
    let quarter = n / 4;
    let three_quarter = 3 * n / 4;
    mesh.indices.reserve(sphere_index_count(precision, true));

    for ring in 0..precision {
        let rings = RingPair::new(ring, n);

        if ring > 0 {
            // Restart marker between transitions
            mesh.indices.extend_from_slice(&[rings.this, rings.this]);
        }

        for k in 0..quarter {
            mesh.indices.extend_from_slice(&[rings.a(k), rings.b(k)]);
        }
        for k in quarter..=three_quarter {
            mesh.indices.extend_from_slice(&[rings.b(k), rings.a(k)]);
        }
        for k in three_quarter..n {
            mesh.indices.extend_from_slice(&[rings.a(k), rings.b(k)]);
        }
        mesh.indices.extend_from_slice(&[rings.a(0), rings.b(0)]);
    }

    let last = precision * n;
    mesh.indices.extend_from_slice(&[last, last]);
}

/// Independent triangles, two per cell, with a wraparound cell per ring
///
/// The four cells touching a pole have two corners on the pole; their
/// zero-area half is left out.
fn list_indices(mesh: &mut Primitive, precision: u32) {
    let n = 2 * precision;
    let quarter = n / 4;
    let three_quarter = 3 * n / 4;
    mesh.indices.reserve(sphere_index_count(precision, false));

    for ring in 0..precision {
        let rings = RingPair::new(ring, n);

        for k in 0..n {
            // k == n - 1 wraps back to the ring's first sample
            let k1 = (k + 1) % n;
            let (a0, a1, b0, b1) = (rings.a(k), rings.a(k1), rings.b(k), rings.b(k1));

            // Which half of the cell lies on a pole, if any
            let skip_first = k == quarter || k == three_quarter;
            let skip_second = k + 1 == quarter || k + 1 == three_quarter;

            if (quarter..three_quarter).contains(&k) {
                if !skip_first {
                    mesh.add_triangle(a0, a1, b0);
                }
                if !skip_second {
                    mesh.add_triangle(a1, b1, b0);
                }
            } else {
                if !skip_first {
                    mesh.add_triangle(a0, b0, a1);
                }
                if !skip_second {
                    mesh.add_triangle(a1, b0, b1);
                }
            }
        }
    }
}
