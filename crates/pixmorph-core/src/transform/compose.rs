//! Folding a transformation list into composite matrices.

use super::Transformation;
use crate::{Matrix, TransformError};

/// Dimension of positional matrices (`[x; y]`).
pub const POSITIONAL_DIMENSION: usize = 2;

/// Dimension of color matrices (`[alpha; red; green; blue]`).
pub const COLOR_DIMENSION: usize = 4;

/// The two aggregate matrices of a transformation list.
///
/// Computed once per run and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeTransform {
    /// Product of all positional matrices, 2x2.
    pub positional: Matrix,
    /// Product of all color matrices, 4x4.
    pub color: Matrix,
}

impl Default for CompositeTransform {
    fn default() -> Self {
        Self {
            positional: Matrix::identity(POSITIONAL_DIMENSION),
            color: Matrix::identity(COLOR_DIMENSION),
        }
    }
}

impl CompositeTransform {
    /// The composite of an empty transformation list.
    pub fn identity() -> Self {
        Self::default()
    }
}

/// Compose a transformation list into a positional and a color matrix.
///
/// The list is partitioned by
/// [`is_color_transformation`](Transformation::is_color_transformation)
/// keeping the relative order, and each group is folded starting from the
/// identity as `M = M · T`. The composite of `[A, B]` is therefore `A · B`,
/// and when applied to a vector `B` acts first.
///
/// Each transformation's `matrix()` is called exactly once.
///
/// # Errors
///
/// Returns [`TransformError::InvalidTransformation`] if a positional
/// transformation does not return a 2x2 matrix or a color transformation
/// does not return a 4x4 matrix. `index` is the position in `transformations`.
///
/// # Example
///
/// ```ignore
/// let rotate = TransformationSpec::positional(&[[0.0, -1.0], [1.0, 0.0]]);
/// let composite = compose(&[rotate])?;
/// assert_eq!(composite.color, Matrix::identity(4));
/// ```
pub fn compose<T: Transformation>(
    transformations: &[T],
) -> Result<CompositeTransform, TransformError> {
    let mut composite = CompositeTransform::identity();

    for (index, transformation) in transformations.iter().enumerate() {
        let (target, expected) = if transformation.is_color_transformation() {
            (&mut composite.color, COLOR_DIMENSION)
        } else {
            (&mut composite.positional, POSITIONAL_DIMENSION)
        };

        let matrix = transformation.matrix();
        if matrix.rows() != expected || matrix.cols() != expected {
            return Err(TransformError::InvalidTransformation {
                index,
                expected,
                rows: matrix.rows(),
                cols: matrix.cols(),
            });
        }

        *target = target.multiply(&matrix);
    }

    tracing::debug!(
        positional = %composite.positional,
        color = %composite.color,
        "composed {} transformations",
        transformations.len()
    );

    Ok(composite)
}
