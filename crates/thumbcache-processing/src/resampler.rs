//! Image resampler - decode, resize, re-encode.

use bytes::Bytes;
use image::imageops::FilterType;
use image::GenericImageView;
use std::io::Cursor;

#[derive(Debug, thiserror::Error)]
pub enum ResampleError {
    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Failed to encode image: {0}")]
    Encode(String),
}

/// Pure resize capability consumed by the cache orchestrator.
///
/// Implementations must be deterministic: the same (bytes, width, height)
/// input always produces the same output, which is what makes redundant
/// concurrent regeneration of the same variant harmless.
pub trait Resampler: Send + Sync {
    fn resize(&self, data: &[u8], width: u32, height: u32) -> Result<Bytes, ResampleError>;
}

/// Resampler backed by the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageResampler;

impl Resampler for ImageResampler {
    fn resize(&self, data: &[u8], width: u32, height: u32) -> Result<Bytes, ResampleError> {
        let reader = image::ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| ResampleError::Decode(e.to_string()))?;

        // Re-encode in the source format so the variant keeps the original's
        // extension. Unrecognizable input fails decode below anyway.
        let format = reader.format().unwrap_or(image::ImageFormat::Png);

        let img = reader
            .decode()
            .map_err(|e| ResampleError::Decode(e.to_string()))?;

        let (src_width, src_height) = img.dimensions();
        tracing::debug!(
            src_width,
            src_height,
            width,
            height,
            format = ?format,
            "Resampling image"
        );

        // Cover fit: fill the requested box exactly, cropping overflow.
        let resized = img.resize_to_fill(width, height, FilterType::Lanczos3);

        let (out_width, out_height) = resized.dimensions();
        let estimated_size = (out_width * out_height * 3) as usize;
        let mut buffer = Vec::with_capacity(estimated_size);
        let mut cursor = Cursor::new(&mut buffer);
        resized
            .write_to(&mut cursor, format)
            .map_err(|e| ResampleError::Encode(e.to_string()))?;

        Ok(Bytes::from(buffer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba, RgbaImage};

    fn png_fixture(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            Rgba([255, 0, 0, 255]),
        ));
        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), image::ImageFormat::Png)
            .unwrap();
        buffer
    }

    #[test]
    fn test_resize_produces_requested_dimensions() {
        let source = png_fixture(8, 8);
        let resized = ImageResampler.resize(&source, 4, 2).unwrap();

        let img = image::load_from_memory(&resized).unwrap();
        assert_eq!(img.dimensions(), (4, 2));
    }

    #[test]
    fn test_resize_preserves_format() {
        let source = png_fixture(8, 8);
        let resized = ImageResampler.resize(&source, 2, 2).unwrap();

        let format = image::guess_format(&resized).unwrap();
        assert_eq!(format, image::ImageFormat::Png);
    }

    #[test]
    fn test_resize_is_deterministic() {
        let source = png_fixture(16, 16);
        let first = ImageResampler.resize(&source, 4, 4).unwrap();
        let second = ImageResampler.resize(&source, 4, 4).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_input_fails_decode() {
        let err = ImageResampler.resize(b"not an image", 4, 4).unwrap_err();
        assert!(matches!(err, ResampleError::Decode(_)));
    }
}
