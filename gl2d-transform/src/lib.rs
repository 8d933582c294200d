//! GL2D Transform Stack
//!
//! Save/restore-style stack of affine frames that flattens to one matrix per
//! draw call.
//!
//! Key properties:
//! - One frame per nesting level, local transforms right-multiply the top
//! - Cumulative products cached per level, repaired lazily on resolve
//! - Repeated resolves without mutation cost no matrix products

pub mod stack;

pub use gl2d_math::{Mat4, Vec3, Vec4};
pub use stack::*;

pub fn version() -> &'static str {
    "0.1.0"
}
