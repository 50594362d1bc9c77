use serde::{Deserialize, Serialize};

use super::gallery::GenerationConfig;

/// Body of a generation request, `{ "prompt": ..., "config": ... }`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateImageRequest {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<GenerationConfig>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateImageResponse {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct CaptionResponse {
    pub text: String,
}

/// Error body the captioning endpoint sometimes returns alongside a
/// non-success status.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

/// An image to caption: raw bytes plus the file name carried in the
/// multipart form. The bytes are sent as-is, never inspected.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AspectRatio;

    #[test]
    fn generation_request_shape() {
        let request = GenerateImageRequest {
            prompt: "a red fox".to_string(),
            config: None,
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"prompt":"a red fox"}"#
        );

        let request = GenerateImageRequest {
            prompt: "a red fox".to_string(),
            config: Some(AspectRatio::Widescreen.config()),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"prompt":"a red fox","config":{"width":1344,"height":768}}"#
        );
    }

    #[test]
    fn response_bodies_parse() {
        let response: GenerateImageResponse =
            serde_json::from_str(r#"{"url":"https://x/1.png"}"#).unwrap();
        assert_eq!(response.url, "https://x/1.png");

        let caption: CaptionResponse = serde_json::from_str(r#"{"text":"a cat"}"#).unwrap();
        assert_eq!(caption.text, "a cat");

        let error: ApiErrorBody = serde_json::from_str(r#"{"error":"too large"}"#).unwrap();
        assert_eq!(error.error, "too large");
    }
}
