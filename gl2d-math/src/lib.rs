//! GL2D Math - Matrix/Vector Kernel
//!
//! Fixed-size vector and 4x4 matrix math for the 2D-over-3D transform pipeline.
//!
//! Key properties:
//! - Plain value types (`Copy`), every operation returns a new value
//! - Column-major storage, layout compatible with glam and GL uniforms
//! - `Pod` types, castable with bytemuck
//! - Determinant and inverse share the same 2x2 block partial products
//! - `f64` elements, narrowed to `f32` only for uniform uploads

pub mod matrix;
pub mod vector;

pub use matrix::*;
pub use vector::*;

pub fn version() -> &'static str {
    "0.1.0"
}
