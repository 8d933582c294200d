//! Canvas2D state mapped onto a transform stack
//!
//! The 2D API works in pixel coordinates with y pointing down. Translations
//! are forwarded with y negated (when `flip_y` is set), rotations become a Z
//! rotation and scales leave z untouched. `save`/`restore` bracket nested
//! frames on the stack.

use crate::color::parse_color;
use crate::command::DrawCommand;
use crate::error::Result;
use crate::types::{CanvasConfig, Color, DrawMode};
use gl2d_math::{Mat4, Vec3};
use gl2d_transform::TransformStack;

/// 2D drawing state for one context
pub struct Canvas {
    config: CanvasConfig,
    transform: TransformStack,
    fill_style: Color,
    stroke_style: Color,
}

impl Canvas {
    /// Create a new canvas with the given configuration
    pub fn new(config: CanvasConfig) -> Self {
        log::debug!(
            "canvas created ({}x{}, flip_y: {})",
            config.width,
            config.height,
            config.flip_y
        );

        Self {
            config,
            transform: TransformStack::new(),
            fill_style: Color::BLACK,
            stroke_style: Color::BLACK,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Get canvas dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn clear_color(&self) -> Color {
        self.config.clear_color
    }

    pub fn fill_style(&self) -> Color {
        self.fill_style
    }

    pub fn stroke_style(&self) -> Color {
        self.stroke_style
    }

    /// Set the fill color from an `rgb()`/`rgba()` string
    ///
    /// On error the previous style is kept.
    pub fn set_fill_style(&mut self, value: &str) -> Result<()> {
        match parse_color(value) {
            Ok(color) => {
                self.fill_style = color;
                Ok(())
            }
            Err(err) => {
                log::warn!("rejected fill style {:?}: {}", value, err);
                Err(err)
            }
        }
    }

    /// Set the stroke color from an `rgb()`/`rgba()` string
    ///
    /// On error the previous style is kept.
    pub fn set_stroke_style(&mut self, value: &str) -> Result<()> {
        match parse_color(value) {
            Ok(color) => {
                self.stroke_style = color;
                Ok(())
            }
            Err(err) => {
                log::warn!("rejected stroke style {:?}: {}", value, err);
                Err(err)
            }
        }
    }

    fn to_stack_y(&self, y: f64) -> f64 {
        if self.config.flip_y {
            -y
        } else {
            y
        }
    }

    pub fn translate(&mut self, x: f64, y: f64) {
        let y = self.to_stack_y(y);
        self.transform.translate_vec(Vec3::new(x, y, 0.0));
    }

    /// Rotate by `degrees` about the viewing axis
    ///
    /// With `flip_y` set, a positive angle turns counter-clockwise on screen,
    /// the opposite of the HTML canvas `rotate`. Without it the turn is
    /// clockwise on the y-down pixel grid.
    pub fn rotate(&mut self, degrees: f64) {
        self.transform.rotate_euler(Vec3::new(0.0, 0.0, degrees));
    }

    pub fn scale(&mut self, x: f64, y: f64) {
        self.transform.scale_vec(Vec3::new(x, y, 1.0));
    }

    /// Push a nested frame
    pub fn save(&mut self) {
        self.transform.push();
    }

    /// Pop the nested frame opened by the matching `save`
    pub fn restore(&mut self) {
        if self.transform.depth() == 0 {
            log::warn!("restore without matching save ignored");
            return;
        }
        self.transform.pop();
    }

    /// Current save/restore nesting depth
    pub fn depth(&self) -> usize {
        self.transform.depth()
    }

    /// Net transform of the current state
    pub fn transform_matrix(&mut self) -> Mat4 {
        self.transform.resolve()
    }

    pub fn transform_stack(&self) -> &TransformStack {
        &self.transform
    }

    /// Resolve the transform of a `width` x `height` rectangle at (x, y)
    ///
    /// The rectangle's placement is applied in a temporary frame, so the
    /// canvas state is the same before and after.
    fn rect_transform(&mut self, x: f64, y: f64, width: f64, height: f64) -> Mat4 {
        let ty = self.to_stack_y(y);
        let sy = self.to_stack_y(height);

        self.transform
            .push()
            .translate_vec(Vec3::new(x, ty, 0.0))
            .scale_vec(Vec3::new(width, sy, 1.0));
        let m = self.transform.resolve();
        self.transform.pop();
        m
    }

    /// Filled rectangle in the current fill style
    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> DrawCommand {
        let m = self.rect_transform(x, y, width, height);
        DrawCommand::rect(m, self.fill_style, DrawMode::TriangleFan)
    }

    /// Rectangle outline in the current stroke style
    pub fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> DrawCommand {
        let m = self.rect_transform(x, y, width, height);
        DrawCommand::rect(m, self.stroke_style, DrawMode::LineLoop)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}
