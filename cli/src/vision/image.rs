use base64::{engine::general_purpose, Engine};
use std::path::Path;

use super::VisionError;

/// Raw image bytes ready to be sent inline to a vision model
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub filename: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    /// Validate the bytes and wrap them; unknown formats are rejected
    pub fn from_bytes(filename: impl Into<String>, bytes: Vec<u8>) -> Result<Self, VisionError> {
        let filename = filename.into();
        let mime_type = detect_mime_type(&bytes)
            .ok_or_else(|| VisionError::InvalidImage(filename.clone()))?;
        Ok(Self {
            filename,
            mime_type,
            bytes,
        })
    }

    /// Read an image from disk, `filename` is the name reported to the model and in errors
    pub async fn load(path: &Path, filename: impl Into<String>) -> Result<Self, VisionError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| VisionError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_bytes(filename, bytes)
    }

    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.bytes)
    }
}

/// Identify an image format from its leading magic bytes
pub fn detect_mime_type(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        Some("image/png")
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        Some("image/gif")
    } else if bytes.starts_with(b"BM") && bytes.len() > 14 {
        Some("image/bmp")
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    #[test]
    fn test_detect_mime_type() {
        assert_eq!(detect_mime_type(PNG_HEADER), Some("image/png"));
        assert_eq!(detect_mime_type(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00]), Some("image/jpeg"));
        assert_eq!(detect_mime_type(b"GIF89a\x01\x00"), Some("image/gif"));
        assert_eq!(detect_mime_type(b"BM\0\0\0\0\0\0\0\0\0\0\0\0\0\0"), Some("image/bmp"));
        assert_eq!(detect_mime_type(b"RIFF\x24\0\0\0WEBPVP8 "), Some("image/webp"));
        assert_eq!(detect_mime_type(b"hello world"), None);
        assert_eq!(detect_mime_type(b""), None);
    }

    #[test]
    fn test_from_bytes_rejects_non_images() {
        let err = ImagePayload::from_bytes("chart.png", b"not an image".to_vec()).unwrap_err();
        assert!(matches!(err, VisionError::InvalidImage(ref name) if name == "chart.png"));
    }

    #[test]
    fn test_base64_encoding() {
        let payload = ImagePayload::from_bytes("a.png", PNG_HEADER.to_vec()).unwrap();
        assert_eq!(payload.mime_type, "image/png");
        assert_eq!(payload.to_base64(), general_purpose::STANDARD.encode(PNG_HEADER));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImagePayload::load(&dir.path().join("gone.png"), "gone.png")
            .await
            .unwrap_err();
        assert!(matches!(err, VisionError::Io { .. }));
    }
}
