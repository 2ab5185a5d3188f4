//! Composition and application of matrix transformations.
//!
//! A transformation is anything that can report whether it acts on colors
//! and hand out its matrix. The engine splits a transformation list into
//! two groups, folds each group into one composite matrix, maps every
//! source pixel through both composites and assembles the mapped pixels
//! into a new raster.
//!
//! # Pipeline
//!
//! 1. [`compose`]: partition and fold into a [`CompositeTransform`]
//! 2. [`map_pixels`]: positions and colors for every source pixel
//! 3. [`assemble`]: write mapped pixels into a raster sized to their bounds
//!
//! # Matrix Order
//!
//! Composites are folded as `M = M · T` in list order, so the composite of
//! `[T1, T2, ..., Tn]` is `T1 · T2 · ... · Tn`. Applied to a column vector,
//! the last transformation in the list acts first.
//!
//! # Vector Layout
//!
//! - Positional matrices are 2x2 and act on `[x; y]`. There is no
//!   translation component.
//! - Color matrices are 4x4 and act on `[alpha; red; green; blue]` with
//!   channel values in 0-255.

mod assemble;
mod compose;
mod mapper;
mod descriptor;

pub use assemble::assemble;
pub use compose::{compose, CompositeTransform, COLOR_DIMENSION, POSITIONAL_DIMENSION};
pub use mapper::{clamp_channel, map_pixels, BoundingBox, MappedPixels, MappedPoint};
pub use descriptor::TransformationSpec;

use crate::Matrix;

/// A linear transformation of either pixel positions or pixel colors.
///
/// Implementations must return a 2x2 matrix when
/// [`is_color_transformation`](Transformation::is_color_transformation) is
/// false and a 4x4 matrix when it is true.
pub trait Transformation {
    /// Whether this transformation acts on `(alpha, red, green, blue)`
    /// rather than on `(x, y)`.
    fn is_color_transformation(&self) -> bool;

    /// The transformation matrix.
    fn matrix(&self) -> Matrix;
}

impl<T: Transformation + ?Sized> Transformation for &T {
    fn is_color_transformation(&self) -> bool {
        (**self).is_color_transformation()
    }

    fn matrix(&self) -> Matrix {
        (**self).matrix()
    }
}

impl<T: Transformation + ?Sized> Transformation for Box<T> {
    fn is_color_transformation(&self) -> bool {
        (**self).is_color_transformation()
    }

    fn matrix(&self) -> Matrix {
        (**self).matrix()
    }
}
