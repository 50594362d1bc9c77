pub mod captioning;
pub mod generation;

use crate::{
    config::ZzConfig,
    error::Result,
    models::{GenerationConfig, ImageUpload},
};
use async_trait::async_trait;

pub use captioning::CaptionClient;
pub use generation::GenerationClient;

/// The two remote operations the service offers. The session depends on this
/// trait so tests can swap in a scripted implementation.
#[async_trait]
pub trait ImageService: Send + Sync {
    /// Turn a text prompt into an image; returns the image URL.
    async fn generate_image(
        &self,
        prompt: &str,
        config: Option<GenerationConfig>,
    ) -> Result<String>;

    /// Turn an uploaded image into a description.
    async fn caption_image(&self, upload: ImageUpload) -> Result<String>;
}

#[derive(Clone)]
pub struct ZzClient {
    generation: GenerationClient,
    captioning: CaptionClient,
}

impl ZzClient {
    pub fn new(config: ZzConfig) -> Self {
        let http = reqwest::Client::new();
        Self {
            generation: GenerationClient::new(http.clone(), &config),
            captioning: CaptionClient::new(http, &config),
        }
    }

    pub fn generation(&self) -> &GenerationClient {
        &self.generation
    }

    pub fn captioning(&self) -> &CaptionClient {
        &self.captioning
    }
}

#[async_trait]
impl ImageService for ZzClient {
    async fn generate_image(
        &self,
        prompt: &str,
        config: Option<GenerationConfig>,
    ) -> Result<String> {
        self.generation.generate(prompt, config).await
    }

    async fn caption_image(&self, upload: ImageUpload) -> Result<String> {
        self.captioning.caption(upload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ZzError;

    fn keyless_client() -> ZzClient {
        // Unroutable endpoints: if the key check ever regressed, the request
        // would fail with a transport error instead of MissingApiKey.
        let config = ZzConfig::new().with_endpoints(
            "http://invalid.localdomain/gen_image",
            "http://invalid.localdomain/describe_image",
        );
        ZzClient::new(config)
    }

    #[tokio::test]
    async fn generation_without_api_key_fails_fast() {
        let client = keyless_client();
        let result = client.generate_image("a red fox", None).await;
        assert!(matches!(result, Err(ZzError::MissingApiKey)));
    }

    #[tokio::test]
    async fn captioning_without_api_key_fails_fast() {
        let client = keyless_client();
        let upload = ImageUpload::new("cat.jpg", vec![0xff, 0xd8]);
        let result = client.caption_image(upload).await;
        assert!(matches!(result, Err(ZzError::MissingApiKey)));
    }
}
