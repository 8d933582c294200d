//! CSS `rgb()` / `rgba()` color parsing
//!
//! Lenient in the same way canvas style strings usually are: every character
//! other than digits, `.` and `,` is discarded before splitting on `,`.

use crate::error::{CanvasError, Result};
use crate::types::Color;

/// Parse `rgb(r, g, b)` or `rgba(r, g, b, a)`
///
/// `r`, `g`, `b` are 0-255 and are divided by 255; `a` is used as-is and
/// defaults to 1.0.
pub fn parse_color(input: &str) -> Result<Color> {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();

    if cleaned.is_empty() {
        return Err(CanvasError::EmptyColor(input.to_string()));
    }

    let components = cleaned
        .split(',')
        .map(|part| {
            part.parse::<f32>()
                .map_err(|_| CanvasError::InvalidComponent(part.to_string()))
        })
        .collect::<Result<Vec<f32>>>()?;

    match components[..] {
        [r, g, b] => Ok(Color([r / 255.0, g / 255.0, b / 255.0, 1.0])),
        [r, g, b, a] => Ok(Color([r / 255.0, g / 255.0, b / 255.0, a])),
        _ => Err(CanvasError::ComponentCount(components.len())),
    }
}
