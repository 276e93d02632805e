//! Canvas composition — crop, resample, and blit each source into its slot.
//!
//! The canvas is filled with the border color first; tiles are drawn in
//! input order. Crop rectangles are validated against the source bounds
//! before any pixel is touched, so a bad plan never produces a partial
//! collage.

use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use tracing::debug;

use collage_layout::{LayoutPlan, Rect, Slot};

use crate::CollageError;

/// Rasterize a plan onto a border-colored canvas.
///
/// Fails with [`CollageError::CropOutOfBounds`] if any crop rectangle
/// escapes its source image; bounds are never clamped.
pub fn render(
    images: &[DynamicImage],
    plan: &LayoutPlan,
    border_color: Rgba<u8>,
) -> Result<RgbaImage, CollageError> {
    if images.len() != plan.slots.len() {
        return Err(CollageError::SlotCountMismatch {
            expected: plan.slots.len(),
            actual: images.len(),
        });
    }

    // Validate every crop up front; nothing is drawn unless all pass.
    for (index, (image, slot)) in images.iter().zip(&plan.slots).enumerate() {
        let bounds = Rect::new(0.0, 0.0, image.width() as f32, image.height() as f32);
        if !bounds.contains(&slot.crop) {
            return Err(CollageError::CropOutOfBounds { index });
        }
    }

    let width = plan.canvas.width as u32;
    let height = plan.canvas.height as u32;
    debug!(width, height, "Allocating collage canvas");
    let mut canvas = RgbaImage::from_pixel(width, height, border_color);

    for (index, (image, slot)) in images.iter().zip(&plan.slots).enumerate() {
        blit_slot(&mut canvas, image, slot, index);
    }

    Ok(canvas)
}

/// Crop a source to its slot's crop rectangle, resample it to the
/// placement size, and draw it at the placement origin.
fn blit_slot(canvas: &mut RgbaImage, source: &DynamicImage, slot: &Slot, index: usize) {
    let crop = slot.crop;
    let dest = slot.placement;

    let cropped = source.crop_imm(
        crop.x as u32,
        crop.y as u32,
        crop.width as u32,
        crop.height as u32,
    );

    let dest_width = (dest.width as u32).max(1);
    let dest_height = (dest.height as u32).max(1);
    let tile = cropped.resize_exact(dest_width, dest_height, FilterType::Lanczos3);

    debug!(
        index,
        x = dest.x,
        y = dest.y,
        width = dest_width,
        height = dest_height,
        "Compositing tile"
    );
    overlay(canvas, &tile, dest.x as u32, dest.y as u32);
}

/// Overlay `tile` onto `canvas` at the given position.
///
/// Partially transparent pixels are alpha-composited over the canvas, so
/// sources with alpha blend against the border color.
fn overlay(canvas: &mut RgbaImage, tile: &DynamicImage, x: u32, y: u32) {
    let tile_rgba = tile.to_rgba8();
    for (dx, dy, pixel) in tile_rgba.enumerate_pixels() {
        let target_x = x + dx;
        let target_y = y + dy;
        if target_x < canvas.width() && target_y < canvas.height() {
            let alpha = pixel[3] as f32 / 255.0;
            if alpha > 0.99 {
                canvas.put_pixel(target_x, target_y, *pixel);
            } else if alpha > 0.01 {
                let bg = canvas.get_pixel(target_x, target_y);
                let blended = blend_pixel(bg, pixel, alpha);
                canvas.put_pixel(target_x, target_y, blended);
            }
        }
    }
}

fn blend_pixel(bg: &Rgba<u8>, fg: &Rgba<u8>, alpha: f32) -> Rgba<u8> {
    let inv = 1.0 - alpha;
    Rgba([
        (fg[0] as f32 * alpha + bg[0] as f32 * inv) as u8,
        (fg[1] as f32 * alpha + bg[1] as f32 * inv) as u8,
        (fg[2] as f32 * alpha + bg[2] as f32 * inv) as u8,
        255,
    ])
}

/// Encode the finished canvas as PNG bytes.
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>, CollageError> {
    let mut bytes = Vec::new();
    canvas
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(CollageError::Encode)?;
    debug!(len = bytes.len(), "Encoded collage PNG");
    Ok(bytes)
}
