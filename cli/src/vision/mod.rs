//! Vision-model access: image payloads, the [`VisionModel`] seam and the Gemini client

pub mod gemini;
pub mod image;

pub use gemini::{GeminiClient, GeminiConfig};
pub use image::{detect_mime_type, ImagePayload};

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VisionError {
    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,
    #[error("failed to read image {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot identify image file {0}")]
    InvalidImage(String),
    #[error("request to vision model failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("vision model returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("invalid response from vision model: {0}")]
    InvalidResponse(String),
    #[error("vision model returned no text")]
    EmptyResponse,
}

impl From<serde_json::Error> for VisionError {
    fn from(error: serde_json::Error) -> Self {
        VisionError::InvalidResponse(error.to_string())
    }
}

/// A generative model that answers a text prompt about one or more images
#[async_trait]
pub trait VisionModel: Send + Sync {
    /// Model identifier for logs
    fn name(&self) -> &str;

    /// Submit the prompt with every image; a single bad image fails the whole call
    async fn generate(&self, prompt: &str, images: &[ImagePayload]) -> Result<String, VisionError>;
}
