//! Data form of a transformation.
//!
//! Lets transformation lists travel as JSON (config files, the WASM
//! bindings) without a concrete type per transformation. The serialized
//! form is tagged by `kind`:
//!
//! ```text
//! [
//!   { "kind": "positional", "matrix": [[0, -1], [1, 0]] },
//!   { "kind": "color", "matrix": [[1,0,0,0], [0,0,0,1], [0,0,1,0], [0,1,0,0]] }
//! ]
//! ```

use serde::{Deserialize, Serialize};

use super::Transformation;
use crate::Matrix;

/// A transformation described by its kind and raw matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransformationSpec {
    /// Acts on `[x; y]`; the matrix should be 2x2.
    Positional { matrix: Matrix },
    /// Acts on `[alpha; red; green; blue]`; the matrix should be 4x4.
    Color { matrix: Matrix },
}

impl TransformationSpec {
    /// Positional transformation from rows.
    pub fn positional<R: AsRef<[f64]>>(rows: &[R]) -> Self {
        Self::Positional {
            matrix: Matrix::from_rows(rows),
        }
    }

    /// Color transformation from rows.
    pub fn color<R: AsRef<[f64]>>(rows: &[R]) -> Self {
        Self::Color {
            matrix: Matrix::from_rows(rows),
        }
    }
}

impl Transformation for TransformationSpec {
    fn is_color_transformation(&self) -> bool {
        matches!(self, TransformationSpec::Color { .. })
    }

    fn matrix(&self) -> Matrix {
        match self {
            TransformationSpec::Positional { matrix } | TransformationSpec::Color { matrix } => {
                matrix.clone()
            }
        }
    }
}
