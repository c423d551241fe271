//! Image media types and inline payload encoding
//!
//! Validates the supported upload formats (JPEG, PNG, WebP) and converts raw
//! image bytes into the base64 inline payload the Gemini API expects.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upload formats accepted by the studio. Anything else is rejected at
/// selection time, before the encoder ever sees the bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
    Jpeg,
    Png,
    WebP,
}

impl MediaType {
    /// Parse a declared MIME string. Returns `None` for unsupported formats.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "image/jpeg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            "image/webp" => Some(Self::WebP),
            _ => None,
        }
    }

    /// Parse a declared MIME string, failing with a validation error for
    /// unsupported formats.
    pub fn try_from_mime(mime: &str) -> Result<Self> {
        Self::from_mime(mime)
            .ok_or_else(|| Error::Validation(format!("Unsupported image format: {}", mime)))
    }

    /// Infer the declared media type from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "webp" => Some(Self::WebP),
            _ => None,
        }
    }

    /// Sniff the actual format from magic bytes, where recognizable.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [0xFF, 0xD8, 0xFF, ..] => Some(Self::Jpeg),
            [0x89, 0x50, 0x4E, 0x47, ..] => Some(Self::Png),
            [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => Some(Self::WebP),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::WebP => "image/webp",
        }
    }
}

/// Self-describing inline image payload: base64 data plus its media type,
/// embeddable directly in a Gemini request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub media_type: MediaType,
    pub data: String,
}

impl InlineImage {
    pub fn from_bytes(bytes: &[u8], media_type: MediaType) -> Self {
        use base64::Engine as _;
        Self {
            media_type,
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }

    /// Read and encode an image file. The caller is responsible for having
    /// validated the media type; a read failure is fatal for the submission.
    pub async fn from_file(path: &Path, media_type: MediaType) -> Result<Self> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            tracing::error!("Failed to read image file {}: {}", path.display(), e);
            Error::Io(e)
        })?;
        Ok(Self::from_bytes(&bytes, media_type))
    }
}
