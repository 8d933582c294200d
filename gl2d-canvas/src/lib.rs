//! GL2D Canvas - 2D drawing state over a 3D transform pipeline
//!
//! Maps Canvas2D-style calls (translate/rotate/scale, save/restore, fill and
//! stroke styles, rectangles) onto a [`TransformStack`] and emits plain-data
//! [`DrawCommand`]s carrying the resolved matrix for each draw.

pub mod canvas;
pub mod color;
pub mod command;
pub mod error;
pub mod types;

pub use canvas::*;
pub use color::*;
pub use command::*;
pub use error::*;
pub use gl2d_transform::TransformStack;
pub use types::*;

pub fn version() -> &'static str {
    "0.1.0"
}
