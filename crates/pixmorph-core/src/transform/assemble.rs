//! Writing mapped pixels into a new raster.

use super::MappedPixels;
use crate::{Raster, TransformError};

/// Build the output raster from mapped pixels.
///
/// The raster covers `mapped.bounds` exactly; each point is written at
/// `(x - min_x, y - min_y)` in the order of `mapped.points`, so later points
/// overwrite earlier ones. Destinations no point maps to stay fully
/// transparent black.
///
/// # Errors
///
/// Returns [`TransformError::OutputTooLarge`] if either side does not fit
/// in a `u32` or the pixel count exceeds `max_output_pixels`.
pub fn assemble(mapped: MappedPixels, max_output_pixels: u64) -> Result<Raster, TransformError> {
    let bounds = mapped.bounds;
    let (width, height) = (bounds.width(), bounds.height());

    let too_large = TransformError::OutputTooLarge { width, height };
    let (Ok(out_w), Ok(out_h)) = (u32::try_from(width), u32::try_from(height)) else {
        return Err(too_large);
    };
    match width.checked_mul(height) {
        Some(count) if count <= max_output_pixels => {}
        _ => return Err(too_large),
    }

    tracing::debug!(
        width = out_w,
        height = out_h,
        min_x = bounds.min_x,
        min_y = bounds.min_y,
        "assembling output raster"
    );

    let mut output = Raster::transparent(out_w, out_h);
    for point in mapped.points {
        // In range: every point was folded into `bounds`
        let dst_x = (point.x - bounds.min_x) as u32;
        let dst_y = (point.y - bounds.min_y) as u32;
        output.set_argb(dst_x, dst_y, point.color);
    }

    Ok(output)
}
