//! Capabilities backing the analysis service.
//!
//! - Image decoding into width/height/format/mode via the `image` crate
//! - Uniform random draws for the disaster-scene signal via `rand`

use std::io::Cursor;
use std::sync::Arc;

use image::{ColorType, ImageError, ImageFormat, ImageReader};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shoreline_core::{ImageDecodeError, ImageProperties, RandomSource};
use tracing::debug;

/// Decode image bytes into a pixel grid description.
pub trait ImageDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<ImageProperties, ImageDecodeError>;
}

/// Decoder for the raster formats supported by the `image` crate.
///
/// The full pixel buffer is decoded, so truncated or corrupt payloads fail
/// here rather than passing on a valid header alone.
#[derive(Debug, Clone)]
pub struct RasterDecoder {
    max_bytes: usize,
}

impl RasterDecoder {
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }
}

impl ImageDecoder for RasterDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<ImageProperties, ImageDecodeError> {
        if bytes.is_empty() {
            return Err(ImageDecodeError::Empty);
        }
        if bytes.len() > self.max_bytes {
            return Err(ImageDecodeError::TooLarge {
                size: bytes.len(),
                limit: self.max_bytes,
            });
        }

        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| ImageDecodeError::Decode(e.to_string()))?;

        let format = reader.format().ok_or_else(|| {
            ImageDecodeError::UnsupportedFormat("unrecognised image signature".to_string())
        })?;

        let image = reader.decode().map_err(|e| match e {
            ImageError::Unsupported(inner) => {
                ImageDecodeError::UnsupportedFormat(inner.to_string())
            }
            other => ImageDecodeError::Decode(other.to_string()),
        })?;

        if image.width() == 0 || image.height() == 0 {
            return Err(ImageDecodeError::ZeroDimensions);
        }

        let properties = ImageProperties {
            width: image.width(),
            height: image.height(),
            format: Some(format_name(format)),
            mode: mode_name(image.color()),
        };

        debug!(
            "Decoded {} image {}x{} ({})",
            properties.format.as_deref().unwrap_or("unknown"),
            properties.width,
            properties.height,
            properties.mode
        );

        Ok(properties)
    }
}

/// Upper-case container name (`PNG`, `JPEG`, ...).
fn format_name(format: ImageFormat) -> String {
    match format {
        ImageFormat::Png => "PNG".to_string(),
        ImageFormat::Jpeg => "JPEG".to_string(),
        ImageFormat::Gif => "GIF".to_string(),
        ImageFormat::WebP => "WEBP".to_string(),
        ImageFormat::Bmp => "BMP".to_string(),
        ImageFormat::Tiff => "TIFF".to_string(),
        ImageFormat::Ico => "ICO".to_string(),
        other => format!("{:?}", other).to_uppercase(),
    }
}

/// Pixel mode name in the conventional short form (`L`, `RGB`, `RGBA`, ...).
fn mode_name(color: ColorType) -> String {
    match color {
        ColorType::L8 => "L".to_string(),
        ColorType::La8 => "LA".to_string(),
        ColorType::Rgb8 => "RGB".to_string(),
        ColorType::Rgba8 => "RGBA".to_string(),
        ColorType::L16 => "I;16".to_string(),
        ColorType::La16 => "LA;16".to_string(),
        ColorType::Rgb16 => "RGB;16".to_string(),
        ColorType::Rgba16 => "RGBA;16".to_string(),
        ColorType::Rgb32F => "RGB;F".to_string(),
        ColorType::Rgba32F => "RGBA;F".to_string(),
        other => format!("{:?}", other),
    }
}

/// Thread-safe pseudo-random source.
///
/// Seeded sources replay the same sequence of draws, which makes the
/// disaster-scene signal reproducible.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Seeded if a seed is given, entropy-seeded otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&self, low: f64, high: f64) -> f64 {
        let unit: f64 = self.rng.lock().gen();
        low + (high - low) * unit
    }
}

/// Create a thread-safe reference to the default decoder.
pub fn create_decoder(max_bytes: usize) -> Arc<RasterDecoder> {
    Arc::new(RasterDecoder::new(max_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbImage, RgbaImage};

    fn encode(image: DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        image.write_to(&mut buf, format).unwrap();
        buf.into_inner()
    }

    #[test]
    fn decodes_png() {
        let bytes = encode(
            DynamicImage::ImageRgb8(RgbImage::new(64, 48)),
            ImageFormat::Png,
        );
        let props = RasterDecoder::new(1 << 20).decode(&bytes).unwrap();
        assert_eq!(props.width, 64);
        assert_eq!(props.height, 48);
        assert_eq!(props.format.as_deref(), Some("PNG"));
        assert_eq!(props.mode, "RGB");
    }

    #[test]
    fn rgba_mode() {
        let bytes = encode(
            DynamicImage::ImageRgba8(RgbaImage::new(8, 8)),
            ImageFormat::Png,
        );
        let props = RasterDecoder::new(1 << 20).decode(&bytes).unwrap();
        assert_eq!(props.mode, "RGBA");
    }

    #[test]
    fn decodes_jpeg() {
        let bytes = encode(
            DynamicImage::ImageRgb8(RgbImage::new(32, 32)),
            ImageFormat::Jpeg,
        );
        let props = RasterDecoder::new(1 << 20).decode(&bytes).unwrap();
        assert_eq!(props.format.as_deref(), Some("JPEG"));
        assert_eq!((props.width, props.height), (32, 32));
    }

    #[test]
    fn empty_payload() {
        let err = RasterDecoder::new(1024).decode(&[]).unwrap_err();
        assert_eq!(err, ImageDecodeError::Empty);
    }

    #[test]
    fn garbage_payload() {
        let err = RasterDecoder::new(1024)
            .decode(b"definitely not an image")
            .unwrap_err();
        assert!(matches!(err, ImageDecodeError::UnsupportedFormat(_)));
    }

    #[test]
    fn truncated_png() {
        let bytes = encode(
            DynamicImage::ImageRgb8(RgbImage::new(64, 64)),
            ImageFormat::Png,
        );
        let truncated = &bytes[..bytes.len() / 2];
        let err = RasterDecoder::new(1 << 20).decode(truncated).unwrap_err();
        assert!(matches!(err, ImageDecodeError::Decode(_)));
    }

    #[test]
    fn payload_over_limit() {
        let err = RasterDecoder::new(4).decode(&[0u8; 16]).unwrap_err();
        assert_eq!(err, ImageDecodeError::TooLarge { size: 16, limit: 4 });
    }

    #[test]
    fn seeded_draws_repeat() {
        let a = SeededRandom::from_seed(7);
        let b = SeededRandom::from_seed(7);
        for _ in 0..10 {
            assert_eq!(a.uniform(0.6, 0.9), b.uniform(0.6, 0.9));
        }
    }

    #[test]
    fn draws_stay_in_range() {
        let rng = SeededRandom::from_entropy();
        for _ in 0..1000 {
            let v = rng.uniform(0.6, 0.9);
            assert!((0.6..0.9).contains(&v), "draw {} out of range", v);
        }
    }
}
