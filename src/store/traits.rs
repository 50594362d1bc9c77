use crate::{error::Result, models::GeneratedImage};

/// The durable slot holding the gallery. One writer, synchronous access;
/// the whole list is rewritten on every save.
pub trait GalleryStore: Send + Sync {
    fn load(&self) -> Result<Vec<GeneratedImage>>;
    fn save(&self, images: &[GeneratedImage]) -> Result<()>;
}

impl<S: GalleryStore + ?Sized> GalleryStore for std::sync::Arc<S> {
    fn load(&self) -> Result<Vec<GeneratedImage>> {
        (**self).load()
    }

    fn save(&self, images: &[GeneratedImage]) -> Result<()> {
        (**self).save(images)
    }
}
