//! Collage configuration options.

use image::Rgba;

use crate::DEFAULT_BORDER_WIDTH;
use crate::color::DEFAULT_BORDER_COLOR;

/// Configuration for one collage request.
///
/// The canvas width has no meaningful default; hosts pass their display
/// width (or any target width) to [`CollageOptions::new`]. Border styling
/// defaults to a 30px dark-gray frame.
#[derive(Debug, Clone)]
pub struct CollageOptions {
    /// Output canvas width in pixels.
    pub canvas_width: f32,

    /// Thickness of the border around and between tiles.
    pub border_width: f32,

    /// Fill color for the border and canvas background.
    pub border_color: Rgba<u8>,
}

impl CollageOptions {
    /// Options for the given canvas width with default border styling.
    pub fn new(canvas_width: f32) -> Self {
        Self {
            canvas_width,
            border_width: DEFAULT_BORDER_WIDTH,
            border_color: DEFAULT_BORDER_COLOR,
        }
    }

    /// Builder: set border thickness.
    pub fn with_border_width(mut self, val: f32) -> Self {
        self.border_width = val;
        self
    }

    /// Builder: set border color.
    pub fn with_border_color(mut self, val: Rgba<u8>) -> Self {
        self.border_color = val;
        self
    }
}
