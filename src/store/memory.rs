use std::sync::Mutex;

use super::traits::GalleryStore;
use crate::{error::Result, models::GeneratedImage};

/// Ephemeral backend for tests and for running without a gallery file.
#[derive(Default)]
pub struct MemoryStore {
    images: Mutex<Vec<GeneratedImage>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GalleryStore for MemoryStore {
    fn load(&self) -> Result<Vec<GeneratedImage>> {
        Ok(self.images.lock().unwrap().clone())
    }

    fn save(&self, images: &[GeneratedImage]) -> Result<()> {
        *self.images.lock().unwrap() = images.to_vec();
        Ok(())
    }
}
