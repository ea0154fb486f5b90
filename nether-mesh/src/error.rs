//! Mesh error types

/// Errors reported by primitive validation and export
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    /// Position buffer length is not a multiple of 3
    #[error("position buffer has {0} floats, not a whole number of (x, y, z) triples")]
    PositionsNotTriples(usize),

    /// An attribute buffer does not cover every vertex exactly once
    #[error(
        "{attribute} buffer has {actual} floats, expected {expected} ({components} per vertex)"
    )]
    AttributeLength {
        attribute: &'static str,
        components: usize,
        expected: usize,
        actual: usize,
    },

    /// An index references a vertex past the end of the vertex list
    #[error("index {index} at position {position} is out of range ({vertex_count} vertices)")]
    IndexOutOfRange {
        position: usize,
        index: u32,
        vertex_count: usize,
    },

    /// IO error during export
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error during export
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
