//! Draw commands handed to the graphics backend
//!
//! A command is plain data: the resolved matrix for the `uOMatrix` uniform,
//! vertex positions and per-vertex colors. Buffer management and the actual
//! draw call belong to the host.

use crate::types::{Color, DrawMode};
use gl2d_math::Mat4;

/// Unit quad, counter-clockwise from the origin, three floats per vertex
pub const RECT_VERTICES: [f32; 12] = [
    0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, //
    1.0, 1.0, 0.0, //
    1.0, 0.0, 0.0,
];

/// A single draw call
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// Matrix to upload as the vertex shader's model transform
    ///
    /// Narrow with [`Mat4::to_uniform_array`] for the upload.
    pub transform: Mat4,

    /// Vertex positions, three floats per vertex
    pub vertices: [f32; 12],

    /// One color per vertex
    pub colors: [Color; 4],

    /// Primitive assembly
    pub mode: DrawMode,
}

impl DrawCommand {
    /// Create a unit-quad command with a uniform color
    pub fn rect(transform: Mat4, color: Color, mode: DrawMode) -> Self {
        Self {
            transform,
            vertices: RECT_VERTICES,
            colors: [color; 4],
            mode,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    pub fn transform_bytes(&self) -> [u8; 64] {
        self.transform.uniform_bytes()
    }

    /// Corners of the quad after applying `transform`
    pub fn transformed_corners(&self) -> [gl2d_math::Vec3; 4] {
        let mut out = [gl2d_math::Vec3::ZERO; 4];
        for (i, corner) in out.iter_mut().enumerate() {
            let v = &self.vertices[i * 3..i * 3 + 3];
            let p = gl2d_math::Vec3::new(v[0].into(), v[1].into(), v[2].into());
            *corner = self.transform.transform_point3(p);
        }
        out
    }
}
