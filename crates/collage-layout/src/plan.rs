//! Grid layout planning.
//!
//! Maps an ordered list of source dimensions onto a bordered square canvas:
//! each count from 1 to 9 has a fixed row layout, every slot gets a centered
//! square crop of its source, and the canvas height shrinks to the minimum
//! that encloses the rows. A single image is the exception: it is never
//! cropped and the canvas grows to fit its aspect ratio instead.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::LayoutError;
use crate::geometry::{Dimension, Rect};

/// Crop and placement pair for one input image.
///
/// `crop` is in the source image's coordinate space, `placement` in canvas
/// coordinates. Index `i` of a plan refers to input `i`; input order is
/// preserved, the first image fills the top-left slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub crop: Rect,
    pub placement: Rect,
}

/// Complete layout for one collage request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPlan {
    /// One slot per input image, in input order.
    pub slots: Vec<Slot>,
    /// Final canvas size, whole-number pixels.
    pub canvas: Dimension,
}

/// Which of the three derived tile sides a row uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TileSize {
    /// Full canvas width minus the outer borders.
    Single,
    /// Two tiles share the row.
    Double,
    /// Three tiles share the row.
    Triple,
}

/// One row of the grid: tile side selector and tile count.
#[derive(Debug, Clone, Copy)]
struct RowSpec {
    tile: TileSize,
    tiles: u8,
}

use TileSize::{Double, Single, Triple};

/// One full-width tile.
const SINGLE_ROW: RowSpec = RowSpec {
    tile: Single,
    tiles: 1,
};
/// Two half-width tiles.
const DOUBLE_ROW: RowSpec = RowSpec {
    tile: Double,
    tiles: 2,
};
/// Three third-width tiles.
const TRIPLE_ROW: RowSpec = RowSpec {
    tile: Triple,
    tiles: 3,
};

/// Row layouts for counts 2 through 9. Count 1 bypasses the table because
/// it preserves the source aspect ratio.
fn rows_for(count: usize) -> &'static [RowSpec] {
    match count {
        2 => &[DOUBLE_ROW],
        3 => &[DOUBLE_ROW, SINGLE_ROW],
        4 => &[DOUBLE_ROW, DOUBLE_ROW],
        5 => &[DOUBLE_ROW, TRIPLE_ROW],
        6 => &[TRIPLE_ROW, TRIPLE_ROW],
        7 => &[DOUBLE_ROW, DOUBLE_ROW, TRIPLE_ROW],
        8 => &[DOUBLE_ROW, TRIPLE_ROW, TRIPLE_ROW],
        9 => &[TRIPLE_ROW, TRIPLE_ROW, TRIPLE_ROW],
        _ => unreachable!("count is validated before row lookup"),
    }
}

/// Counts whose rows fill the default square canvas exactly; their height
/// is never overridden.
fn keeps_square_canvas(count: usize) -> bool {
    matches!(count, 4 | 9)
}

/// The three tile side lengths derived from canvas and border width.
#[derive(Debug, Clone, Copy)]
struct TileSides {
    single: f32,
    double: f32,
    triple: f32,
}

impl TileSides {
    fn derive(canvas_width: f32, border_width: f32) -> Self {
        Self {
            single: canvas_width - 2.0 * border_width,
            double: canvas_width / 2.0 - 1.5 * border_width,
            triple: canvas_width / 3.0 - (4.0 / 3.0) * border_width,
        }
    }

    fn of(&self, tile: TileSize) -> f32 {
        match tile {
            Single => self.single,
            Double => self.double,
            Triple => self.triple,
        }
    }
}

/// Compute crop and placement rectangles for 1 to 9 images.
///
/// Pure function: identical inputs produce identical plans. Fails with
/// [`LayoutError::UnsupportedImageCount`] outside that range, before any
/// layout work.
pub fn plan(
    dimensions: &[Dimension],
    canvas_width: f32,
    border_width: f32,
) -> Result<LayoutPlan, LayoutError> {
    let count = dimensions.len();
    if count == 0 || count > crate::MAX_IMAGES {
        return Err(LayoutError::UnsupportedImageCount(count));
    }

    debug!(count, canvas_width, border_width, "Planning collage layout");

    let sides = TileSides::derive(canvas_width, border_width);

    if count == 1 {
        return Ok(plan_single(
            dimensions[0],
            canvas_width,
            border_width,
            sides.single,
        ));
    }

    let mut placements = Vec::with_capacity(count);
    let mut y = border_width;
    let mut last_row = (y, sides.double);
    for spec in rows_for(count) {
        let side = sides.of(spec.tile);
        for i in 0..spec.tiles {
            let x = border_width + f32::from(i) * (side + border_width);
            placements.push(Rect::square(x, y, side));
        }
        last_row = (y, side);
        y += side + border_width;
    }

    // The row table holds exactly `count` tiles, so crops and placements
    // pair up one to one in input order.
    let slots = dimensions
        .iter()
        .map(centered_square_crop)
        .zip(placements)
        .map(|(crop, placement)| Slot { crop, placement })
        .collect();

    let canvas = if keeps_square_canvas(count) {
        Dimension::new(canvas_width.trunc(), canvas_width.trunc())
    } else {
        let (row_y, side) = last_row;
        // Each term truncates separately before summing.
        let height = row_y.trunc() + side.trunc() + border_width.trunc();
        Dimension::new(canvas_width.trunc(), height)
    };

    debug!(
        canvas_width = canvas.width,
        canvas_height = canvas.height,
        "Layout planned"
    );

    Ok(LayoutPlan { slots, canvas })
}

/// Single-image layout: no crop, full-width tile, canvas height grown to
/// preserve the source aspect ratio.
fn plan_single(
    source: Dimension,
    canvas_width: f32,
    border_width: f32,
    single_side: f32,
) -> LayoutPlan {
    let scale = source.width / single_side;
    let tile_height = source.height / scale;

    let slot = Slot {
        crop: Rect::new(0.0, 0.0, source.width, source.height),
        placement: Rect::new(border_width, border_width, single_side, tile_height),
    };
    let canvas = Dimension::new(
        canvas_width.trunc(),
        (tile_height + 2.0 * border_width).trunc(),
    );

    debug!(
        tile_height,
        canvas_height = canvas.height,
        "Planned single-image layout"
    );

    LayoutPlan {
        slots: vec![slot],
        canvas,
    }
}

/// Centered square crop covering the shorter axis of the source.
fn centered_square_crop(source: &Dimension) -> Rect {
    let side = source.min_side();
    let x = if side < source.width {
        (source.width - side) / 2.0
    } else {
        0.0
    };
    let y = if side < source.height {
        (source.height - side) / 2.0
    } else {
        0.0
    };
    Rect::square(x, y, side)
}
