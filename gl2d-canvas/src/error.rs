//! Canvas error types

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CanvasError {
    #[error("color string {0:?} has no numeric components")]
    EmptyColor(String),

    #[error("invalid color component {0:?}")]
    InvalidComponent(String),

    #[error("expected 3 or 4 color components, found {0}")]
    ComponentCount(usize),
}

pub type Result<T> = std::result::Result<T, CanvasError>;
