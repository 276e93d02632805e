//! Collage rasterization and encoding.
//!
//! Consumes decoded images plus a `collage-layout` plan, draws each cropped
//! source into its placement slot over a border-colored canvas, and encodes
//! the result as PNG. The `pipeline` module ties decoding, planning,
//! rendering, and encoding into a single call.

pub mod color;
pub mod compose;
pub mod options;
pub mod pipeline;

// Re-exports for convenience
pub use color::{DEFAULT_BORDER_COLOR, parse_hex_color};
pub use compose::{encode_png, render};
pub use options::CollageOptions;
pub use pipeline::create_collage;

/// Default border thickness in pixels.
pub const DEFAULT_BORDER_WIDTH: f32 = 30.0;

/// Errors that can occur while building a collage.
#[derive(Debug, thiserror::Error)]
pub enum CollageError {
    #[error(transparent)]
    Layout(#[from] collage_layout::LayoutError),

    #[error("Failed to decode input image {index}: {source}")]
    Decode {
        index: usize,
        #[source]
        source: image::ImageError,
    },

    #[error("Plan holds {expected} slots but {actual} images were supplied")]
    SlotCountMismatch { expected: usize, actual: usize },

    #[error("Crop rectangle for image {index} escapes the source bounds")]
    CropOutOfBounds { index: usize },

    #[error("Failed to encode collage: {0}")]
    Encode(#[source] image::ImageError),
}
