//! WASM-compatible wrapper types for raster data.
//!
//! This module provides a JavaScript-friendly type that wraps the core
//! `Raster`, handling the conversion between Rust and JavaScript data
//! representations.

use pixmorph_core::Raster;
use wasm_bindgen::prelude::*;

/// An RGBA raster wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy
/// is made to JavaScript memory as a `Uint8Array`. The layout matches
/// `ImageData.data` (RGBA, row-major), so the copy can be handed to a canvas
/// directly.
#[wasm_bindgen]
pub struct JsRaster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsRaster {
    /// Create a new JsRaster from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    ///
    /// # Errors
    /// Returns an error if `pixels.length != width * height * 4`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsRaster, JsValue> {
        Self::try_new(width, height, pixels).map_err(|e| JsValue::from_str(&e))
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsRaster {
    /// Validate the buffer length without touching `JsValue`.
    pub(crate) fn try_new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsRaster, String> {
        let raster = Raster::from_raw(width, height, pixels).ok_or_else(|| {
            format!(
                "Invalid pixel data: expected {} bytes (width * height * 4)",
                width as usize * height as usize * Raster::CHANNELS
            )
        })?;
        Ok(Self::from_raster(raster))
    }

    /// Create a JsRaster from a core Raster.
    pub(crate) fn from_raster(raster: Raster) -> Self {
        Self {
            width: raster.width,
            height: raster.height,
            pixels: raster.pixels,
        }
    }

    /// Convert back to a core Raster.
    ///
    /// Note: This clones the pixel data.
    pub(crate) fn to_raster(&self) -> Raster {
        Raster::new(self.width, self.height, self.pixels.clone())
    }
}
