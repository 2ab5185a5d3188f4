//! Per-pixel mapping through the composite matrices.
//!
//! # Rounding
//!
//! Both coordinates and channel values are truncated toward zero, never
//! rounded. A positional result of `-1.5` lands on `-1`, a channel result
//! of `254.9` becomes `254`.
//!
//! # Bounding Box
//!
//! The box starts at `(0, 0, 0, 0)` rather than at the first mapped point,
//! so it always contains the origin.

use super::CompositeTransform;
use crate::Raster;

/// One source pixel's destination and transformed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappedPoint {
    /// Destination x, before shifting into the output raster.
    pub x: i64,
    /// Destination y, before shifting into the output raster.
    pub y: i64,
    /// Color as `[alpha, red, green, blue]`.
    pub color: [u8; 4],
}

/// Integer rectangle covering the mapped coordinates, inclusive on all
/// sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundingBox {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl BoundingBox {
    /// Widen the box to contain `(x, y)`.
    #[inline]
    pub fn include(&mut self, x: i64, y: i64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Smallest box containing both boxes.
    pub fn union(self, other: BoundingBox) -> BoundingBox {
        BoundingBox {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Number of columns covered, always at least 1.
    pub fn width(&self) -> u64 {
        self.max_x.abs_diff(self.min_x).saturating_add(1)
    }

    /// Number of rows covered, always at least 1.
    pub fn height(&self) -> u64 {
        self.max_y.abs_diff(self.min_y).saturating_add(1)
    }

    /// Returns true if `(x, y)` lies inside the box.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }
}

/// Output of [`map_pixels`]: the mapped points in emission order and their
/// bounding box.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MappedPixels {
    /// One entry per source pixel, ordered x-outer, y-inner.
    pub points: Vec<MappedPoint>,
    pub bounds: BoundingBox,
}

/// Clamp a transformed channel value to `[0, 255]` and truncate it.
///
/// NaN maps to 0.
#[inline]
pub fn clamp_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// Map every pixel of `source` through `composite`.
///
/// Pixels are visited with x in the outer loop and y in the inner loop.
/// This order is the order of `points` and decides which point wins when
/// several land on the same destination.
pub fn map_pixels(source: &Raster, composite: &CompositeTransform) -> MappedPixels {
    let mut points = Vec::with_capacity(source.pixel_count() as usize);
    let mut bounds = BoundingBox::default();

    for x in 0..source.width {
        for y in 0..source.height {
            let [fx, fy] = composite.positional.apply_to::<2>(&[x as f64, y as f64]);
            // `as` truncates toward zero (and saturates on overflow)
            let (new_x, new_y) = (fx as i64, fy as i64);
            bounds.include(new_x, new_y);

            let [a, r, g, b] = source.argb(x, y).unwrap_or_default();
            let channels = composite
                .color
                .apply_to::<4>(&[a as f64, r as f64, g as f64, b as f64]);

            points.push(MappedPoint {
                x: new_x,
                y: new_y,
                color: channels.map(clamp_channel),
            });
        }
    }

    MappedPixels { points, bounds }
}
