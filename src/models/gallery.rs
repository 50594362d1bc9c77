use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// One entry in the persisted gallery. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedImage {
    pub id: Uuid,
    pub url: String,
    pub prompt: String,
    pub timestamp: DateTime<Utc>,
}

impl GeneratedImage {
    pub fn new(prompt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            url: url.into(),
            prompt: prompt.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Optional target dimensions for a generation request. Both fields unset
/// means the service picks its own default.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl GenerationConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }
}

/// The fixed set of named aspect ratios offered by the picker, each bound to
/// a concrete pixel pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    /// 21:9
    Cinematic,
    /// 16:9
    Widescreen,
    /// 3:2
    Landscape,
    /// 4:3
    Standard,
    /// 1:1
    Square,
    /// 3:4
    Portrait,
    /// 2:3
    Tall,
    /// 9:16
    Vertical,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 8] = [
        AspectRatio::Cinematic,
        AspectRatio::Widescreen,
        AspectRatio::Landscape,
        AspectRatio::Standard,
        AspectRatio::Square,
        AspectRatio::Portrait,
        AspectRatio::Tall,
        AspectRatio::Vertical,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Cinematic => "21:9",
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Landscape => "3:2",
            AspectRatio::Standard => "4:3",
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait => "3:4",
            AspectRatio::Tall => "2:3",
            AspectRatio::Vertical => "9:16",
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            AspectRatio::Cinematic => (1536, 640),
            AspectRatio::Widescreen => (1344, 768),
            AspectRatio::Landscape => (1216, 832),
            AspectRatio::Standard => (1152, 896),
            AspectRatio::Square => (1024, 1024),
            AspectRatio::Portrait => (896, 1152),
            AspectRatio::Tall => (832, 1216),
            AspectRatio::Vertical => (768, 1344),
        }
    }

    pub fn config(&self) -> GenerationConfig {
        let (width, height) = self.dimensions();
        GenerationConfig::new(width, height)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AspectRatio {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        AspectRatio::ALL
            .iter()
            .find(|ratio| ratio.label() == s.trim())
            .copied()
            .ok_or_else(|| format!("unknown aspect ratio: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_table_is_complete() {
        for ratio in AspectRatio::ALL {
            let (width, height) = ratio.dimensions();
            assert!(width > 0 && height > 0, "{} has empty dimensions", ratio);
            let config = ratio.config();
            assert_eq!(config.width, Some(width));
            assert_eq!(config.height, Some(height));
        }
    }

    #[test]
    fn aspect_ratio_parses_from_label() {
        assert_eq!("16:9".parse::<AspectRatio>(), Ok(AspectRatio::Widescreen));
        assert_eq!(" 1:1 ".parse::<AspectRatio>(), Ok(AspectRatio::Square));
        assert!("5:4".parse::<AspectRatio>().is_err());
    }

    #[test]
    fn generation_config_omits_unset_fields() {
        let json = serde_json::to_string(&GenerationConfig::default()).unwrap();
        assert_eq!(json, "{}");

        let json = serde_json::to_string(&AspectRatio::Square.config()).unwrap();
        assert_eq!(json, r#"{"width":1024,"height":1024}"#);
    }

    #[test]
    fn generated_image_round_trips() {
        let record = GeneratedImage::new("a red fox", "https://x/1.png");
        let json = serde_json::to_string(&record).unwrap();
        let restored: GeneratedImage = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, record);
    }

    #[test]
    fn generated_image_ids_are_unique() {
        let a = GeneratedImage::new("p", "u");
        let b = GeneratedImage::new("p", "u");
        assert_ne!(a.id, b.id);
    }
}
