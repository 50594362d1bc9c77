use std::sync::Arc;

use uuid::Uuid;

use crate::{
    client::{ImageService, ZzClient},
    config::ZzConfig,
    error::{Result, ZzError},
    models::{GeneratedImage, GenerationConfig},
    store::{GalleryStore, JsonFileStore},
};

/// The persisted gallery plus the state of the one in-flight generation.
///
/// Records are newest-first and the whole list is rewritten to the store on
/// every mutation. `generate` takes `&mut self`, so two generations can never
/// overlap on one session; the `generating` flag exists for UIs that want to
/// show progress from shared read access.
pub struct GallerySession {
    service: Arc<dyn ImageService>,
    store: Box<dyn GalleryStore>,
    images: Vec<GeneratedImage>,
    generating: bool,
    last_error: Option<String>,
}

impl GallerySession {
    /// Open a session over the given service and store. A store that cannot
    /// be read starts the session with an empty gallery rather than failing.
    pub fn open(service: Arc<dyn ImageService>, store: Box<dyn GalleryStore>) -> Self {
        let images = store.load().unwrap_or_else(|e| {
            log::warn!("Could not read persisted gallery, starting empty: {}", e);
            Vec::new()
        });
        log::debug!("Gallery session opened with {} records", images.len());
        Self {
            service,
            store,
            images,
            generating: false,
            last_error: None,
        }
    }

    /// Convenience constructor wiring the HTTP client to the gallery file
    /// named by the config.
    pub fn from_config(config: &ZzConfig) -> Self {
        let store = JsonFileStore::new(config.gallery_path.clone());
        Self::open(Arc::new(ZzClient::new(config.clone())), Box::new(store))
    }

    /// Generate an image for `prompt` and prepend the result to the gallery.
    ///
    /// On success the updated list is persisted before this returns. On
    /// failure the list is untouched and the error's message is kept in
    /// `last_error` until the next attempt.
    pub async fn generate(
        &mut self,
        prompt: &str,
        config: Option<GenerationConfig>,
    ) -> Result<&GeneratedImage> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(ZzError::EmptyPrompt);
        }

        self.generating = true;
        self.last_error = None;

        let outcome = self.service.generate_image(prompt, config).await;
        self.generating = false;

        let url = match outcome {
            Ok(url) => url,
            Err(e) => {
                self.last_error = Some(e.to_string());
                return Err(e);
            }
        };

        let record = GeneratedImage::new(prompt, url);
        self.images.insert(0, record);
        if let Err(e) = self.persist() {
            // The record stays in memory; the next successful mutation
            // rewrites the full list anyway.
            self.last_error = Some(e.to_string());
            return Err(e);
        }

        Ok(&self.images[0])
    }

    /// Newest first.
    pub fn images(&self) -> &[GeneratedImage] {
        &self.images
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// Message from the most recent failed generation, if the failure has
    /// not been superseded by a later attempt.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Remove one record by id. Returns false when no record matched.
    pub fn remove(&mut self, id: Uuid) -> Result<bool> {
        let before = self.images.len();
        self.images.retain(|image| image.id != id);
        if self.images.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Drop every record and persist the empty gallery.
    pub fn clear(&mut self) -> Result<()> {
        if self.images.is_empty() {
            return Ok(());
        }
        self.images.clear();
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.images)
    }
}
