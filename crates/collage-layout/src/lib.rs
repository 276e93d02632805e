//! Photo grid layout computation.
//!
//! Pure geometry for arranging 1-9 images on a bordered square canvas:
//! centered square crops, fixed row layouts per image count, and canvas
//! sizing. No pixel operations, no I/O; rasterization lives in the
//! `collage-render` crate.

pub mod geometry;
pub mod plan;

// Re-exports for convenience
pub use geometry::{Dimension, Rect};
pub use plan::{LayoutPlan, Slot, plan};

/// Maximum number of images a single grid can hold.
pub const MAX_IMAGES: usize = 9;

/// Errors that can occur during layout planning.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("Cannot lay out {0} images: a grid holds 1 to 9")]
    UnsupportedImageCount(usize),
}
