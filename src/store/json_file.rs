use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::traits::GalleryStore;
use crate::{
    error::{Result, ZzError},
    models::GeneratedImage,
};

/// The gallery as one JSON document on disk. A missing file and a file that
/// no longer parses both load as an empty gallery; corrupt content is
/// discarded, never migrated.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GalleryStore for JsonFileStore {
    fn load(&self) -> Result<Vec<GeneratedImage>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ZzError::Storage(e.to_string())),
        };

        match serde_json::from_str(&raw) {
            Ok(images) => Ok(images),
            Err(e) => {
                log::warn!(
                    "Discarding malformed gallery file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, images: &[GeneratedImage]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| ZzError::Storage(e.to_string()))?;
            }
        }
        let raw = serde_json::to_string(images).map_err(|e| ZzError::Storage(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| ZzError::Storage(e.to_string()))?;
        log::debug!(
            "Persisted {} gallery records to {}",
            images.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_load_round_trip() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::tempdir()?;
        let store = JsonFileStore::new(temp.path().join("gallery.json"));

        let images = vec![
            GeneratedImage::new("second", "https://x/2.png"),
            GeneratedImage::new("first", "https://x/1.png"),
        ];
        store.save(&images)?;
        assert_eq!(store.load()?, images);
        Ok(())
    }

    #[test]
    fn missing_file_loads_empty() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::tempdir()?;
        let store = JsonFileStore::new(temp.path().join("nope.json"));
        assert!(store.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn malformed_file_loads_empty() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("gallery.json");
        fs::write(&path, "{not json")?;

        let store = JsonFileStore::new(&path);
        assert!(store.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn save_creates_parent_directories() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::tempdir()?;
        let store = JsonFileStore::new(temp.path().join("nested/dir/gallery.json"));
        store.save(&[GeneratedImage::new("p", "u")])?;
        assert_eq!(store.load()?.len(), 1);
        Ok(())
    }
}
