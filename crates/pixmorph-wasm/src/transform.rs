//! WASM bindings for the transformation engine.
//!
//! Transformations are passed as plain JavaScript objects:
//!
//! ```typescript
//! const rotated = apply_transformations(image, [
//!   { kind: 'positional', matrix: [[0, -1], [1, 0]] },
//!   { kind: 'color', matrix: [[1,0,0,0], [0,0,0,1], [0,0,1,0], [0,1,0,0]] },
//! ]);
//! ```
//!
//! The last transformation in each group is applied first.

use crate::types::JsRaster;
use pixmorph_core::{engine, TransformationSpec};
use wasm_bindgen::prelude::*;

/// Apply an ordered list of transformations to an image.
///
/// # Arguments
///
/// * `image` - Source image
/// * `transformations` - Array of `{ kind, matrix }` objects
///
/// # Returns
///
/// New `JsRaster` sized to the bounding box of the mapped pixels.
///
/// # Errors
///
/// Returns an error if the array cannot be parsed, a matrix has the wrong
/// shape for its kind, or the output would be too large.
#[wasm_bindgen]
pub fn apply_transformations(
    image: &JsRaster,
    transformations: JsValue,
) -> Result<JsRaster, JsValue> {
    let specs: Vec<TransformationSpec> = serde_wasm_bindgen::from_value(transformations)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    apply_specs(image, &specs).map_err(|e| JsValue::from_str(&e))
}

fn apply_specs(image: &JsRaster, specs: &[TransformationSpec]) -> Result<JsRaster, String> {
    engine::apply(&image.to_raster(), specs)
        .map(JsRaster::from_raster)
        .map_err(|e| e.to_string())
}
