//! Raster decoding for the transformation engine.
//!
//! This module provides functionality for:
//! - Reading an encoded image from disk
//! - Decoding an encoded image held in memory (used by the WASM bindings)
//!
//! Decoded images are always RGBA8 [`Raster`](crate::Raster)s.
//!
//! # Examples
//!
//! ```ignore
//! use pixmorph_core::decode::decode_file;
//!
//! let raster = decode_file("photo.png")?;
//! println!("Decoded {}x{} image", raster.width, raster.height);
//! ```

mod loader;
mod types;

pub use loader::{decode_bytes, decode_file};
pub use types::DecodeError;
