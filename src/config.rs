use std::env;
use std::path::PathBuf;

pub const DEFAULT_GENERATION_URL: &str = "https://api.zzcreation.com/web/gen_image";
pub const DEFAULT_CAPTION_URL: &str = "https://api.zzcreation.com/web/describe_image";
pub const DEFAULT_GALLERY_PATH: &str = "zzgen_gallery.json";

/// Everything the client and gallery need, loaded once. The request paths
/// never read the environment themselves.
#[derive(Debug, Clone)]
pub struct ZzConfig {
    pub api_key: Option<String>,
    pub generation_url: String,
    pub caption_url: String,
    pub user_agent: Option<String>,
    pub gallery_path: PathBuf,
}

impl Default for ZzConfig {
    fn default() -> Self {
        ZzConfig {
            api_key: None,
            generation_url: DEFAULT_GENERATION_URL.to_string(),
            caption_url: DEFAULT_CAPTION_URL.to_string(),
            user_agent: None,
            gallery_path: PathBuf::from(DEFAULT_GALLERY_PATH),
        }
    }
}

impl ZzConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.api_key = env::var("ZZGEN_API_KEY").ok();
        if let Ok(url) = env::var("ZZGEN_GENERATION_URL") {
            config.generation_url = url;
        }
        if let Ok(url) = env::var("ZZGEN_CAPTION_URL") {
            config.caption_url = url;
        }
        config.user_agent = env::var("ZZGEN_USER_AGENT").ok();
        if let Ok(path) = env::var("ZZGEN_GALLERY_PATH") {
            config.gallery_path = PathBuf::from(path);
        }
        config
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_endpoints(
        mut self,
        generation_url: impl Into<String>,
        caption_url: impl Into<String>,
    ) -> Self {
        self.generation_url = generation_url.into();
        self.caption_url = caption_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_gallery_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.gallery_path = path.into();
        self
    }
}
