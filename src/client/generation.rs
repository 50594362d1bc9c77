use crate::{
    config::ZzConfig,
    error::{Result, ZzError},
    models::{GenerateImageRequest, GenerateImageResponse, GenerationConfig},
};
use reqwest::Client;

/// Text-to-image calls against the generation endpoint. One request per call,
/// no retry, no caching.
#[derive(Clone)]
pub struct GenerationClient {
    http: Client,
    endpoint: String,
    api_key: Option<String>,
    user_agent: Option<String>,
}

impl GenerationClient {
    pub fn new(http: Client, config: &ZzConfig) -> Self {
        Self {
            http,
            endpoint: config.generation_url.clone(),
            api_key: config.api_key.clone(),
            user_agent: config.user_agent.clone(),
        }
    }

    pub async fn generate(
        &self,
        prompt: &str,
        config: Option<GenerationConfig>,
    ) -> Result<String> {
        // Key check comes before anything touches the network.
        let api_key = self.api_key.as_deref().ok_or(ZzError::MissingApiKey)?;

        let body = GenerateImageRequest {
            prompt: prompt.to_string(),
            config,
        };

        log::info!("Requesting image generation from {}", self.endpoint);
        log::debug!("Generation prompt: {}", body.prompt);

        let mut request = self
            .http
            .post(&self.endpoint)
            .header("x-api-key", api_key)
            .json(&body);
        if let Some(user_agent) = &self.user_agent {
            request = request.header(reqwest::header::USER_AGENT, user_agent);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ZzError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::error!("Generation endpoint returned {}", status);
            return Err(ZzError::RequestFailed(format!(
                "image generation failed with status {}",
                status
            )));
        }

        let parsed: GenerateImageResponse = response
            .json()
            .await
            .map_err(|e| ZzError::InvalidResponse(e.to_string()))?;

        log::info!("Image generated: {}", parsed.url);
        Ok(parsed.url)
    }
}
