//! Pixmorph WASM - WebAssembly bindings for Pixmorph
//!
//! This crate provides WASM bindings to expose the pixmorph-core engine to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper type for raster data
//! - `decode` - Image decoding bindings
//! - `transform` - Applying transformation lists
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, apply_transformations } from '@pixmorph/wasm';
//!
//! await init();
//!
//! const image = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const result = apply_transformations(image, [
//!   { kind: 'positional', matrix: [[0, -1], [1, 0]] },
//! ]);
//! const data = new ImageData(new Uint8ClampedArray(result.pixels()), result.width);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod transform;
mod types;

pub use decode::decode_image;
pub use transform::apply_transformations;
pub use types::JsRaster;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
