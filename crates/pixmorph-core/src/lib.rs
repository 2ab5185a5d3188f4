//! Pixmorph Core - Matrix transformation engine for raster images
//!
//! This crate maps a raster through a list of positional (2x2) and color
//! (4x4) matrix transformations and produces a new raster sized to exactly
//! contain the mapped pixels. Pixels are mapped point by point with
//! truncation; there is no interpolation.

pub mod decode;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod raster;
pub mod transform;

pub use engine::{apply, apply_bytes, apply_file, apply_with_options};
pub use error::TransformError;
pub use matrix::Matrix;
pub use raster::Raster;
pub use transform::{CompositeTransform, Transformation, TransformationSpec};

/// Default limit on the number of output pixels (256 megapixels).
pub const DEFAULT_MAX_OUTPUT_PIXELS: u64 = 1 << 28;

/// Engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Largest output raster (width * height) the engine will allocate.
    pub max_output_pixels: u64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_output_pixels: DEFAULT_MAX_OUTPUT_PIXELS,
        }
    }
}

/// A complete run description: options plus an ordered transformation list.
///
/// Deserializes from documents such as:
///
/// ```text
/// {
///   "options": { "max_output_pixels": 1000000 },
///   "transformations": [{ "kind": "positional", "matrix": [[0, -1], [1, 0]] }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransformPipeline {
    #[serde(default)]
    pub options: EngineOptions,
    #[serde(default)]
    pub transformations: Vec<TransformationSpec>,
}

impl TransformPipeline {
    /// Create an empty pipeline with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transformation to the end of the list
    pub fn push(&mut self, transformation: TransformationSpec) -> &mut Self {
        self.transformations.push(transformation);
        self
    }

    /// Check if the pipeline has no transformations
    pub fn is_empty(&self) -> bool {
        self.transformations.is_empty()
    }

    /// Run the pipeline on `source`.
    pub fn apply(&self, source: &Raster) -> Result<Raster, TransformError> {
        engine::apply_with_options(source, &self.transformations, &self.options)
    }
}
