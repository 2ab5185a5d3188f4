//! Errors raised by the transformation engine.

use thiserror::Error;

use crate::decode::DecodeError;

/// Error types for applying a transformation list to a raster.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The source raster could not be loaded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A transformation returned a matrix of the wrong shape for its kind.
    #[error(
        "Transformation {index} returned a {rows}x{cols} matrix, expected {expected}x{expected}"
    )]
    InvalidTransformation {
        index: usize,
        expected: usize,
        rows: usize,
        cols: usize,
    },

    /// The bounding box of the mapped pixels is too large to allocate.
    #[error("Output raster {width}x{height} exceeds the configured pixel limit")]
    OutputTooLarge { width: u64, height: u64 },
}
