use std::env;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use zzgen::{
    logger, AspectRatio, GallerySession, ImageService, ImageUpload, JsonFileStore, ZzClient,
    ZzConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::debug!(".env file loaded"),
        Err(_) => log::debug!("No .env file found, using system environment variables"),
    }

    logger::init_with_config(logger::LoggerConfig::development())?;

    let config = ZzConfig::from_env();
    if config.api_key.is_none() {
        log::warn!("⚠️  ZZGEN_API_KEY is not set; requests will fail until it is configured");
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let client = Arc::new(ZzClient::new(config.clone()));

    match args.first().map(String::as_str) {
        Some("generate") => {
            let prompt = match args.get(1) {
                Some(prompt) => prompt,
                None => {
                    log::error!("❌ Usage: zzgen generate <prompt> [aspect-ratio]");
                    return Ok(());
                }
            };
            let generation_config = match args.get(2) {
                Some(label) => match label.parse::<AspectRatio>() {
                    Ok(ratio) => {
                        let (width, height) = ratio.dimensions();
                        log::info!("Using aspect ratio {} ({}x{})", ratio, width, height);
                        Some(ratio.config())
                    }
                    Err(e) => {
                        log::error!("❌ {}", e);
                        list_ratios();
                        return Ok(());
                    }
                },
                None => None,
            };

            let mut session = GallerySession::open(
                client.clone(),
                Box::new(JsonFileStore::new(config.gallery_path.clone())),
            );
            match session.generate(prompt, generation_config).await {
                Ok(record) => {
                    log::info!("✅ Image generated!");
                    log::info!("🖼️  {}", record.url);
                }
                Err(e) => log::error!("❌ Generation failed: {}", e),
            }
        }
        Some("caption") => {
            let path = match args.get(1) {
                Some(path) => Path::new(path),
                None => {
                    log::error!("❌ Usage: zzgen caption <image-file>");
                    return Ok(());
                }
            };
            let bytes = match fs::read(path) {
                Ok(bytes) => bytes,
                Err(e) => {
                    log::error!("❌ Could not read {}: {}", path.display(), e);
                    return Ok(());
                }
            };
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "upload".to_string());

            match client.caption_image(ImageUpload::new(file_name, bytes)).await {
                Ok(text) => {
                    log::info!("✅ Caption generated!");
                    log::info!("📝 {}", text);
                }
                Err(e) => log::error!("❌ Captioning failed: {}", e),
            }
        }
        Some("gallery") => {
            let session = GallerySession::open(
                client,
                Box::new(JsonFileStore::new(config.gallery_path.clone())),
            );
            if session.images().is_empty() {
                log::info!("Gallery is empty");
            } else {
                log::info!("📚 {} records (newest first):", session.images().len());
                for record in session.images() {
                    log::info!(
                        "  {} | {} | {}",
                        record.timestamp.format("%Y-%m-%d %H:%M:%S"),
                        record.prompt,
                        record.url
                    );
                }
            }
        }
        Some("clear") => {
            let mut session = GallerySession::open(
                client,
                Box::new(JsonFileStore::new(config.gallery_path.clone())),
            );
            let count = session.images().len();
            session.clear()?;
            log::info!("🧹 Removed {} records", count);
        }
        _ => {
            log::info!("Usage: zzgen <command>");
            log::info!("  generate <prompt> [aspect-ratio]   generate an image and store it");
            log::info!("  caption <image-file>               describe an uploaded image");
            log::info!("  gallery                            list stored generations");
            log::info!("  clear                              empty the gallery");
            list_ratios();
        }
    }

    Ok(())
}

fn list_ratios() {
    log::info!("Supported aspect ratios:");
    for ratio in AspectRatio::ALL {
        let (width, height) = ratio.dimensions();
        log::info!("  {:>5}  ({}x{})", ratio.label(), width, height);
    }
}
