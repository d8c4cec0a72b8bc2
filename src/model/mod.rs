mod client;
pub mod dto;

pub use client::{GeminiClient, ModelClient, ModelError};

use bytes::Bytes;

/// An uploaded photo forwarded to the model as inline data.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub mime_type: String,
    pub data: Bytes,
}

/// One prompt, sent once.
#[derive(Debug, Clone)]
pub struct ModelPrompt {
    pub text: String,
    pub image: Option<UploadedImage>,
}

impl ModelPrompt {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: None,
        }
    }

    pub fn with_image(text: impl Into<String>, image: UploadedImage) -> Self {
        Self {
            text: text.into(),
            image: Some(image),
        }
    }
}
