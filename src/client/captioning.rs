use crate::{
    config::ZzConfig,
    error::{Result, ZzError},
    models::{ApiErrorBody, CaptionResponse, ImageUpload},
};
use reqwest::multipart::{Form, Part};
use reqwest::Client;

/// Multipart field name the captioning endpoint expects.
const IMAGE_FIELD: &str = "image";

/// Image-to-text calls against the captioning endpoint.
#[derive(Clone)]
pub struct CaptionClient {
    http: Client,
    endpoint: String,
    api_key: Option<String>,
    user_agent: Option<String>,
}

impl CaptionClient {
    pub fn new(http: Client, config: &ZzConfig) -> Self {
        Self {
            http,
            endpoint: config.caption_url.clone(),
            api_key: config.api_key.clone(),
            user_agent: config.user_agent.clone(),
        }
    }

    pub async fn caption(&self, upload: ImageUpload) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or(ZzError::MissingApiKey)?;

        log::info!(
            "Requesting caption for {} ({} bytes)",
            upload.file_name,
            upload.bytes.len()
        );

        let part = Part::bytes(upload.bytes).file_name(upload.file_name);
        let form = Form::new().part(IMAGE_FIELD, part);

        let mut request = self
            .http
            .post(&self.endpoint)
            .header("x-api-key", api_key)
            .multipart(form);
        if let Some(user_agent) = &self.user_agent {
            request = request.header(reqwest::header::USER_AGENT, user_agent);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ZzError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // The endpoint sometimes explains itself; use its message verbatim.
            let message = match response.json::<ApiErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => format!("image captioning failed with status {}", status),
            };
            log::error!("Captioning endpoint returned {}: {}", status, message);
            return Err(ZzError::RequestFailed(message));
        }

        let parsed: CaptionResponse = response
            .json()
            .await
            .map_err(|e| ZzError::InvalidResponse(e.to_string()))?;

        Ok(parsed.text)
    }
}
