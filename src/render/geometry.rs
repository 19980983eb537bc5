//! Canvas extent and per-layer placement.
//!
//! Layers are positioned in a bottom-left-anchored frame while rasters are top-left-anchored.
//! [`canvas_geometry`] only establishes the extent; the vertical flip happens per layer in
//! [`draw_origin`], so both stages stay independently testable.

use crate::{
    composition::model::LayerDescriptor,
    foundation::error::{SpriteError, SpriteResult},
    markup::style::MAX_PX,
};

/// Canvas size for one character plus the horizontal shift that puts the leftmost layer at
/// column 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasGeometry {
    pub width: u32,
    pub height: u32,
    pub origin_left: i64,
}

impl CanvasGeometry {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Minimal canvas containing every layer. Order-independent.
///
/// `height` is the highest layer top, clamped at 0 when every layer sits below the frame's
/// baseline. Offsets beyond [`MAX_PX`] are rejected.
pub fn canvas_geometry(layers: &[LayerDescriptor]) -> SpriteResult<CanvasGeometry> {
    let first = layers
        .first()
        .ok_or_else(|| SpriteError::geometry("no layers to measure"))?;

    let in_range = |v: i64| (-MAX_PX..=MAX_PX).contains(&v);
    if let Some(l) = layers.iter().find(|l| !in_range(l.left) || !in_range(l.bottom)) {
        return Err(SpriteError::geometry(format!(
            "layer {} offset (left {}, bottom {}) out of range",
            l.image_ref, l.left, l.bottom
        )));
    }

    let (min_left, max_right, max_top) = layers.iter().fold(
        (first.left, first.right(), first.top()),
        |(min_left, max_right, max_top), l| {
            (
                min_left.min(l.left),
                max_right.max(l.right()),
                max_top.max(l.top()),
            )
        },
    );

    let width = u32::try_from(max_right - min_left)
        .map_err(|_| SpriteError::geometry(format!("canvas width {} out of range", max_right - min_left)))?;
    let height = u32::try_from(max_top.max(0))
        .map_err(|_| SpriteError::geometry(format!("canvas height {max_top} out of range")))?;

    Ok(CanvasGeometry {
        width,
        height,
        origin_left: min_left,
    })
}

/// Top-left raster position of `layer` on `canvas`.
pub fn draw_origin(layer: &LayerDescriptor, canvas: &CanvasGeometry) -> (i64, i64) {
    let x = layer.left.saturating_sub(canvas.origin_left);
    let y = i64::from(canvas.height)
        .saturating_sub(layer.bottom)
        .saturating_sub(i64::from(layer.height));
    (x, y)
}

#[cfg(test)]
#[path = "../../tests/unit/render/geometry.rs"]
mod tests;
