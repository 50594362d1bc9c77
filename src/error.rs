use thiserror::Error;

#[derive(Debug, Error)]
pub enum ZzError {
    #[error("API key is not configured (set ZZGEN_API_KEY or use ZzConfig::with_api_key)")]
    MissingApiKey,

    #[error("prompt must not be empty")]
    EmptyPrompt,

    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("invalid response from service: {0}")]
    InvalidResponse(String),

    #[error("gallery storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, ZzError>;
