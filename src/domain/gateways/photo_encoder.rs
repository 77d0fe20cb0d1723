//! Photo Encoder Gateway
//!
//! Turns uploaded image bytes into the Base64 text stored on a business card.

use crate::shared::errors::PhotoError;

/// Converts raw uploaded photo bytes into stored Base64 content
#[cfg_attr(test, mockall::automock)]
pub trait PhotoEncoder: Send + Sync {
    /// Encode `bytes` for storage
    ///
    /// # Errors
    ///
    /// Returns `PhotoError` if the bytes cannot be processed as an image.
    fn encode(&self, bytes: &[u8]) -> Result<String, PhotoError>;
}
