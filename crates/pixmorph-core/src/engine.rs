//! Engine entry points.
//!
//! - [`apply`] / [`apply_with_options`]: pure, in-memory, deterministic
//! - [`apply_file`]: load a raster from disk, then apply
//! - [`apply_bytes`]: decode an encoded image held in memory, then apply
//!
//! All variants compose the transformation list once, map every pixel, and
//! assemble the result. See [`crate::transform`] for the matrix order.

use std::path::Path;

use crate::decode;
use crate::transform::{assemble, compose, map_pixels, Transformation};
use crate::{EngineOptions, Raster, TransformError};

/// Apply `transformations` to `source` with default [`EngineOptions`].
///
/// # Errors
///
/// See [`apply_with_options`].
///
/// # Example
///
/// ```ignore
/// use pixmorph_core::{engine, TransformationSpec};
///
/// let rotate = TransformationSpec::positional(&[[0.0, -1.0], [1.0, 0.0]]);
/// let rotated = engine::apply(&raster, &[rotate])?;
/// ```
pub fn apply<T: Transformation>(
    source: &Raster,
    transformations: &[T],
) -> Result<Raster, TransformError> {
    apply_with_options(source, transformations, &EngineOptions::default())
}

/// Apply `transformations` to `source`.
///
/// The output raster is sized to the bounding box of the mapped pixels
/// (which always includes the origin) and is never smaller than 1x1.
///
/// # Errors
///
/// - [`TransformError::InvalidTransformation`] if a transformation returns a
///   matrix of the wrong shape for its kind
/// - [`TransformError::OutputTooLarge`] if the output would exceed
///   `options.max_output_pixels`
#[tracing::instrument(
    skip_all,
    fields(
        width = source.width,
        height = source.height,
        transformations = transformations.len()
    )
)]
pub fn apply_with_options<T: Transformation>(
    source: &Raster,
    transformations: &[T],
    options: &EngineOptions,
) -> Result<Raster, TransformError> {
    let composite = compose(transformations)?;
    let mapped = map_pixels(source, &composite);
    tracing::debug!(bounds = ?mapped.bounds, points = mapped.points.len(), "mapped pixels");
    assemble(mapped, options.max_output_pixels)
}

/// Load the image at `path` and apply `transformations` to it.
///
/// # Errors
///
/// Loading failures are returned as [`TransformError::Decode`] with the
/// underlying [`DecodeError`](crate::decode::DecodeError) unchanged;
/// otherwise the same errors as [`apply`].
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn apply_file<T: Transformation>(
    path: impl AsRef<Path>,
    transformations: &[T],
) -> Result<Raster, TransformError> {
    let source = decode::decode_file(path)?;
    apply(&source, transformations)
}

/// Decode an encoded image from `bytes` and apply `transformations` to it.
///
/// # Errors
///
/// Same as [`apply_file`], without the I/O failures.
pub fn apply_bytes<T: Transformation>(
    bytes: &[u8],
    transformations: &[T],
) -> Result<Raster, TransformError> {
    let source = decode::decode_bytes(bytes)?;
    apply(&source, transformations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::DecodeError;
    use crate::{Matrix, TransformationSpec};
    use std::io::{Cursor, Write};

    const RED: [u8; 4] = [255, 0, 0, 255];
    const GREEN: [u8; 4] = [0, 255, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];
    const WHITE: [u8; 4] = [255, 255, 255, 255];
    const CLEAR: [u8; 4] = [0, 0, 0, 0];

    const NONE: &[TransformationSpec] = &[];

    /// 2x2: (0,0) red, (1,0) green, (0,1) blue, (1,1) white.
    fn quad() -> Raster {
        let mut pixels = Vec::new();
        for c in [RED, GREEN, BLUE, WHITE] {
            pixels.extend_from_slice(&c);
        }
        Raster::new(2, 2, pixels)
    }

    /// Raster where every pixel has a unique color derived from its position.
    fn gradient(width: u32, height: u32) -> Raster {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[(x * 40) as u8, (y * 40) as u8, 7, 255]);
            }
        }
        Raster::new(width, height, pixels)
    }

    fn rotate90() -> TransformationSpec {
        TransformationSpec::positional(&[[0.0, -1.0], [1.0, 0.0]])
    }

    fn scale(sx: f64, sy: f64) -> TransformationSpec {
        TransformationSpec::positional(&[[sx, 0.0], [0.0, sy]])
    }

    fn encode_png(raster: &Raster) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        raster
            .to_rgba_image()
            .unwrap()
            .write_to(&mut out, image::ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn test_empty_list_reproduces_source() {
        let src = quad();
        let out = apply(&src, NONE).unwrap();

        assert_eq!((out.width, out.height), (2, 2));
        assert_eq!(out.rgba(0, 0), Some(RED));
        assert_eq!(out.rgba(1, 0), Some(GREEN));
        assert_eq!(out.rgba(0, 1), Some(BLUE));
        assert_eq!(out.rgba(1, 1), Some(WHITE));
        assert_eq!(out, src);
    }

    #[test]
    fn test_identity_matrices_reproduce_source() {
        let src = gradient(5, 3);
        let list = [
            TransformationSpec::positional(&[[1.0, 0.0], [0.0, 1.0]]),
            TransformationSpec::Color {
                matrix: Matrix::identity(4),
            },
        ];
        assert_eq!(apply(&src, &list).unwrap(), src);
    }

    #[test]
    fn test_rotation_of_2x3() {
        let src = gradient(2, 3);
        let out = apply(&src, &[rotate90()]).unwrap();

        assert_eq!((out.width, out.height), (3, 2));
        // (x, y) -> (-y, x), shifted by min_x = -2
        for x in 0..2 {
            for y in 0..3 {
                let dst_x = (2 - y as i64) as u32;
                assert_eq!(out.rgba(dst_x, x), src.rgba(x, y), "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_composition_matches_product() {
        let src = gradient(4, 3);
        let a = rotate90();
        let b = scale(2.0, 1.0);

        let folded = apply(&src, &[a.clone(), b.clone()]).unwrap();
        let product = TransformationSpec::Positional {
            matrix: a.matrix().multiply(&b.matrix()),
        };
        let direct = apply(&src, &[product]).unwrap();

        assert_eq!(folded, direct);
    }

    #[test]
    fn test_order_sensitivity() {
        let src = gradient(3, 2);
        let ab = apply(&src, &[rotate90(), scale(2.0, 1.0)]).unwrap();
        let ba = apply(&src, &[scale(2.0, 1.0), rotate90()]).unwrap();

        // [rotate, scale]: scale acts first -> (x, y) -> (-y, 2x), 2x5
        // [scale, rotate]: rotate acts first -> (x, y) -> (-2y, x), 3x3
        assert_eq!((ab.width, ab.height), (2, 5));
        assert_eq!((ba.width, ba.height), (3, 3));
    }

    #[test]
    fn test_collision_follows_x_outer_order() {
        // (x, y) -> (x + y, 0): later x wins on each anti-diagonal
        let src = gradient(3, 3);
        let fold = TransformationSpec::positional(&[[1.0, 1.0], [0.0, 0.0]]);
        let out = apply(&src, &[fold]).unwrap();

        assert_eq!((out.width, out.height), (5, 1));
        assert_eq!(out.rgba(0, 0), src.rgba(0, 0));
        assert_eq!(out.rgba(1, 0), src.rgba(1, 0));
        assert_eq!(out.rgba(2, 0), src.rgba(2, 0));
        assert_eq!(out.rgba(3, 0), src.rgba(2, 1));
        assert_eq!(out.rgba(4, 0), src.rgba(2, 2));
    }

    #[test]
    fn test_scale_up_leaves_gaps() {
        let src = quad();
        let out = apply(&src, &[scale(2.0, 2.0)]).unwrap();

        assert_eq!((out.width, out.height), (3, 3));
        assert_eq!(out.rgba(0, 0), Some(RED));
        assert_eq!(out.rgba(2, 0), Some(GREEN));
        assert_eq!(out.rgba(0, 2), Some(BLUE));
        assert_eq!(out.rgba(2, 2), Some(WHITE));
        assert_eq!(out.rgba(1, 1), Some(CLEAR));
        assert_eq!(out.rgba(1, 0), Some(CLEAR));
    }

    #[test]
    fn test_color_and_position_together() {
        // Invert red, then mirror horizontally
        let invert_red = TransformationSpec::color(&[
            [1.0, 0.0, 0.0, 0.0],
            [0.0, -1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let mirror = scale(-1.0, 1.0);
        let out = apply(&quad(), &[invert_red, mirror]).unwrap();

        assert_eq!((out.width, out.height), (2, 2));
        // Red channel goes negative and clamps to 0; green moves to x = 0
        assert_eq!(out.rgba(1, 0), Some([0, 0, 0, 255]));
        assert_eq!(out.rgba(0, 0), Some(GREEN));
        assert_eq!(out.rgba(0, 1), Some([0, 255, 255, 255]));
    }

    #[test]
    fn test_empty_source_gives_single_transparent_pixel() {
        let src = Raster::new(0, 0, vec![]);
        let out = apply(&src, &[scale(5.0, 5.0)]).unwrap();
        assert_eq!((out.width, out.height), (1, 1));
        assert_eq!(out.rgba(0, 0), Some(CLEAR));
    }

    #[test]
    fn test_invalid_transformation() {
        let bad = TransformationSpec::color(&[[1.0, 0.0], [0.0, 1.0]]);
        let result = apply(&quad(), &[rotate90(), bad]);
        assert!(matches!(
            result,
            Err(TransformError::InvalidTransformation { index: 1, .. })
        ));
    }

    #[test]
    fn test_output_limit() {
        let src = quad();
        let huge = scale(1e6, 1e6);
        assert!(matches!(
            apply(&src, &[huge]),
            Err(TransformError::OutputTooLarge { .. })
        ));

        let options = EngineOptions {
            max_output_pixels: 3,
        };
        assert!(matches!(
            apply_with_options(&src, NONE, &options),
            Err(TransformError::OutputTooLarge {
                width: 2,
                height: 2
            })
        ));
    }

    #[test]
    fn test_apply_file() {
        let src = gradient(3, 2);
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(&encode_png(&src)).unwrap();

        let out = apply_file(file.path(), &[rotate90()]).unwrap();
        assert_eq!(out, apply(&src, &[rotate90()]).unwrap());
    }

    #[test]
    fn test_apply_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = apply_file(dir.path().join("nope.png"), NONE);
        match result {
            Err(TransformError::Decode(DecodeError::Io(e))) => {
                assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected I/O error, got: {:?}", other),
        }
    }

    #[test]
    fn test_apply_bytes() {
        let src = quad();
        let out = apply_bytes(&encode_png(&src), NONE).unwrap();
        assert_eq!(out, src);

        assert!(matches!(
            apply_bytes(b"not an image", NONE),
            Err(TransformError::Decode(DecodeError::InvalidFormat))
        ));
    }

    #[test]
    fn test_apply_logs_with_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let out = apply(&quad(), &[rotate90()]).unwrap();
            assert_eq!((out.width, out.height), (2, 2));
        });
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
