//! The end-to-end collage pipeline: decode, plan, render, encode.
//!
//! One synchronous pass per request. Every decoded buffer and the canvas
//! are owned by the call and dropped on every exit path; a failure at any
//! stage aborts the whole request with nothing produced.

use image::DynamicImage;
use tracing::debug;

use collage_layout::{Dimension, LayoutError, MAX_IMAGES, plan};

use crate::options::CollageOptions;
use crate::{CollageError, compose};

/// Build a collage PNG from encoded source images.
///
/// Inputs are laid out in order: the first source fills the top-left
/// slot. Accepts 1 to [`MAX_IMAGES`] sources and rejects the request
/// before decoding anything otherwise.
pub fn create_collage(
    sources: &[impl AsRef<[u8]>],
    options: &CollageOptions,
) -> Result<Vec<u8>, CollageError> {
    let count = sources.len();
    if count == 0 || count > MAX_IMAGES {
        return Err(LayoutError::UnsupportedImageCount(count).into());
    }

    debug!(
        count,
        canvas_width = options.canvas_width,
        border_width = options.border_width,
        "Building collage"
    );

    let images = decode_all(sources)?;
    let dimensions: Vec<Dimension> = images
        .iter()
        .map(|image| Dimension::from((image.width(), image.height())))
        .collect();

    let plan = plan(&dimensions, options.canvas_width, options.border_width)?;
    let canvas = compose::render(&images, &plan, options.border_color)?;
    compose::encode_png(&canvas)
}

/// Decode every source buffer, failing on the first corrupt input.
fn decode_all(sources: &[impl AsRef<[u8]>]) -> Result<Vec<DynamicImage>, CollageError> {
    let mut images = Vec::with_capacity(sources.len());
    for (index, bytes) in sources.iter().enumerate() {
        let image = image::load_from_memory(bytes.as_ref())
            .map_err(|source| CollageError::Decode { index, source })?;
        debug!(
            index,
            width = image.width(),
            height = image.height(),
            "Decoded source image"
        );
        images.push(image);
    }
    Ok(images)
}
