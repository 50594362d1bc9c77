pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod session;
pub mod store;

pub use client::{CaptionClient, GenerationClient, ImageService, ZzClient};
pub use config::ZzConfig;
pub use error::{Result, ZzError};
pub use models::{AspectRatio, GeneratedImage, GenerationConfig, ImageUpload};
pub use session::GallerySession;
pub use store::{GalleryStore, JsonFileStore, MemoryStore};
