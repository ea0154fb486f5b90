//! Vertex color values

use serde::{Deserialize, Serialize};

/// A vertex color with either 3 (RGB) or 4 (RGBA) float components
///
/// The variant picks the width of a primitive's color buffer: every vertex
/// generated with an RGBA color contributes 4 floats, RGB contributes 3.
///
/// Deserializes from a plain array: `[1.0, 0.5, 0.0]` or `[1.0, 0.5, 0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Rgb([f32; 3]),
    Rgba([f32; 4]),
}

impl Color {
    pub const WHITE: Color = Color::Rgb([1.0, 1.0, 1.0]);

    /// Component slice in buffer order
    pub fn components(&self) -> &[f32] {
        match self {
            Color::Rgb(c) => c,
            Color::Rgba(c) => c,
        }
    }

    /// Number of floats this color occupies per vertex
    pub fn width(&self) -> usize {
        self.components().len()
    }

    /// Append this color `count` times to a flat buffer
    pub(crate) fn broadcast(&self, buffer: &mut Vec<f32>, count: usize) {
        buffer.reserve(count * self.width());
        for _ in 0..count {
            buffer.extend_from_slice(self.components());
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 3]> for Color {
    fn from(c: [f32; 3]) -> Self {
        Color::Rgb(c)
    }
}

impl From<[f32; 4]> for Color {
    fn from(c: [f32; 4]) -> Self {
        Color::Rgba(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width() {
        assert_eq!(Color::WHITE.width(), 3);
        assert_eq!(Color::from([0.0, 0.0, 0.0, 1.0]).width(), 4);
    }

    #[test]
    fn test_broadcast() {
        let mut buffer = Vec::new();
        Color::Rgba([0.1, 0.2, 0.3, 0.4]).broadcast(&mut buffer, 3);
        assert_eq!(buffer.len(), 12);
        assert_eq!(&buffer[8..12], &[0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn test_deserialize_from_array() {
        let rgb: Color = serde_json::from_str("[1.0, 0.5, 0.0]").unwrap();
        assert_eq!(rgb, Color::Rgb([1.0, 0.5, 0.0]));

        let rgba: Color = serde_json::from_str("[1.0, 0.5, 0.0, 0.25]").unwrap();
        assert_eq!(rgba, Color::Rgba([1.0, 0.5, 0.0, 0.25]));

        assert!(serde_json::from_str::<Color>("[1.0, 0.5]").is_err());
    }
}
