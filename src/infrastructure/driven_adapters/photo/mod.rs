//! Photo Encoder Implementation
//!
//! Implements the `PhotoEncoder` gateway with the `image` crate: uploads are
//! decoded, shrunk to fit the configured bounding box and stored as Base64 JPEG.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use super::config::PhotoConfig;
use crate::domain::gateways::PhotoEncoder;
use crate::shared::errors::PhotoError;

/// `image`-backed implementation of `PhotoEncoder`
#[derive(Debug, Clone)]
pub struct ImagePhotoEncoder {
    config: PhotoConfig,
}

impl ImagePhotoEncoder {
    /// Create a new ImagePhotoEncoder
    #[must_use]
    pub fn new(config: PhotoConfig) -> Self {
        Self { config }
    }

    fn resize(&self, bytes: &[u8]) -> Result<Vec<u8>, PhotoError> {
        let original = image::load_from_memory(bytes).map_err(|e| PhotoError::Decode(e.to_string()))?;

        let (max_width, max_height) = (self.config.max_width.max(1), self.config.max_height.max(1));
        let fitted = if original.width() > max_width || original.height() > max_height {
            original.thumbnail(max_width, max_height)
        } else {
            original
        };

        tracing::debug!(width = fitted.width(), height = fitted.height(), "Photo fitted to bounding box");

        // JPEG has no alpha channel
        let rgb = DynamicImage::ImageRgb8(fitted.to_rgb8());
        let mut out = Cursor::new(Vec::new());
        let encoder = JpegEncoder::new_with_quality(&mut out, self.config.jpeg_quality.clamp(1, 100));
        rgb.write_with_encoder(encoder)
            .map_err(|e| PhotoError::Encode(e.to_string()))?;

        Ok(out.into_inner())
    }
}

impl PhotoEncoder for ImagePhotoEncoder {
    fn encode(&self, bytes: &[u8]) -> Result<String, PhotoError> {
        if !self.config.resize {
            return Ok(STANDARD.encode(bytes));
        }

        let jpeg = self.resize(bytes)?;
        Ok(STANDARD.encode(jpeg))
    }
}
