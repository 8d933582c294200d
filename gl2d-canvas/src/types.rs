//! Canvas configuration and plain-data types

use bytemuck::{Pod, Zeroable};

/// RGBA color with components in [0, 1]
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const BLACK: Self = Self([0.0, 0.0, 0.0, 1.0]);
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([r, g, b, a])
    }

    pub fn alpha(&self) -> f32 {
        self.0[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Primitive assembly for a draw command
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    #[default]
    TriangleFan = 0,
    LineLoop = 1,
}

/// Canvas configuration
#[derive(Debug, Clone, Copy)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Color the surface is cleared to when the context is created
    pub clear_color: Color,
    /// Negate y on the way into the stack (top-left pixel origin)
    pub flip_y: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 300,
            height: 150,
            clear_color: Color::WHITE,
            flip_y: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = CanvasConfig::default();
        assert_eq!((config.width, config.height), (300, 150));
        assert_eq!(config.clear_color, Color::WHITE);
        assert!(config.flip_y);
    }

    #[test]
    fn test_color_defaults_to_opaque_black() {
        let color = Color::default();
        assert_eq!(color, Color::BLACK);
        assert_eq!(color.alpha(), 1.0);
    }
}
