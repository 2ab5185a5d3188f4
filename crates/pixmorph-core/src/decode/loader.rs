//! Loading rasters from files and encoded bytes.
//!
//! Any format enabled on the `image` dependency is accepted; the result is
//! always converted to RGBA8 so the color matrix sees an alpha channel even
//! for opaque sources.

use std::io::Cursor;
use std::path::Path;

use image::{ImageError, ImageReader};

use super::DecodeError;
use crate::Raster;

/// Decode an image file from disk.
///
/// # Errors
///
/// Returns `DecodeError::Io` if the file cannot be read (the original
/// `std::io::Error` is kept), otherwise the same errors as [`decode_bytes`].
pub fn decode_file(path: impl AsRef<Path>) -> Result<Raster, DecodeError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "failed to read source image");
        DecodeError::Io(e)
    })?;
    decode_bytes(&bytes)
}

/// Decode an encoded image (PNG, JPEG, ...) from bytes.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be recognized.
/// Returns `DecodeError::CorruptedFile` if the data is truncated or corrupt.
pub fn decode_bytes(bytes: &[u8]) -> Result<Raster, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(_) => DecodeError::InvalidFormat,
        ImageError::IoError(io) => DecodeError::Io(io),
        other => DecodeError::CorruptedFile(other.to_string()),
    })?;

    Ok(Raster::from_rgba_image(img.into_rgba8()))
}
