//! Typed content records produced by the discovery pipeline.
//!
//! The search backend answers in delimited free text; the parser turns that
//! into these records. Web answers skip parsing entirely and are assembled
//! from grounding sources instead.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content category a search targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentCategory {
    /// Mobile/desktop applications
    Apps,

    /// Videos
    Videos,

    /// Online courses and tutorials
    Courses,

    /// Plain web answer (summary + sources)
    Web,
}

impl std::fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentCategory::Apps => write!(f, "apps"),
            ContentCategory::Videos => write!(f, "videos"),
            ContentCategory::Courses => write!(f, "courses"),
            ContentCategory::Web => write!(f, "web"),
        }
    }
}

impl std::str::FromStr for ContentCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "apps" | "app" => Ok(ContentCategory::Apps),
            "videos" | "video" => Ok(ContentCategory::Videos),
            "courses" | "course" | "learn" => Ok(ContentCategory::Courses),
            "web" | "search" => Ok(ContentCategory::Web),
            _ => anyhow::bail!("Unknown content category: {}", s),
        }
    }
}

/// A single discovered content record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    /// An application
    App {
        name: String,
        developer: String,
        rating: f64,
        description: String,
        icon_url: String,
    },

    /// A video
    Video {
        title: String,
        channel: String,
        rating: f64,
        description: String,
        thumbnail_url: String,
    },

    /// A course or tutorial
    Course {
        title: String,
        instructor: String,
        rating: f64,
        description: String,
        image_url: String,
    },

    /// A web source surfaced for a summary answer
    Web {
        title: String,
        uri: String,
        description: String,
    },
}

impl ContentItem {
    /// Category this record belongs to
    pub fn category(&self) -> ContentCategory {
        match self {
            ContentItem::App { .. } => ContentCategory::Apps,
            ContentItem::Video { .. } => ContentCategory::Videos,
            ContentItem::Course { .. } => ContentCategory::Courses,
            ContentItem::Web { .. } => ContentCategory::Web,
        }
    }

    /// Display title (name for apps)
    pub fn title(&self) -> &str {
        match self {
            ContentItem::App { name, .. } => name,
            ContentItem::Video { title, .. }
            | ContentItem::Course { title, .. }
            | ContentItem::Web { title, .. } => title,
        }
    }

    /// Attribution line, if the record carries one
    pub fn attribution(&self) -> Option<&str> {
        match self {
            ContentItem::App { developer, .. } => Some(developer),
            ContentItem::Video { channel, .. } => Some(channel),
            ContentItem::Course { instructor, .. } => Some(instructor),
            ContentItem::Web { .. } => None,
        }
    }

    /// Rating out of 5, if the record carries one
    pub fn rating(&self) -> Option<f64> {
        match self {
            ContentItem::App { rating, .. }
            | ContentItem::Video { rating, .. }
            | ContentItem::Course { rating, .. } => Some(*rating),
            ContentItem::Web { .. } => None,
        }
    }

    /// Description text
    pub fn description(&self) -> &str {
        match self {
            ContentItem::App { description, .. }
            | ContentItem::Video { description, .. }
            | ContentItem::Course { description, .. }
            | ContentItem::Web { description, .. } => description,
        }
    }
}

/// Provenance of a web answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Source URL
    pub uri: String,

    /// Source page title
    pub title: String,
}

/// Everything one search produces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Parsed content records
    pub results: Vec<ContentItem>,

    /// Grounding sources (empty for web searches, which fold them into results)
    pub sources: Vec<Source>,

    /// Summary paragraph (web searches only)
    pub summary: Option<String>,
}

/// Derive a stable image seed from a title (SHA256, first 8 bytes as hex)
///
/// The same title always maps to the same placeholder image.
pub fn image_seed(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let digest = hasher.finalize();
    hex::encode(&digest[..8])
}

/// Placeholder icon URL for an app (128x128)
pub fn icon_url(seed_input: &str) -> String {
    format!("https://picsum.photos/seed/{}/128", image_seed(seed_input))
}

/// Placeholder banner URL for a video or course (400x225)
pub fn banner_url(seed_input: &str) -> String {
    format!("https://picsum.photos/seed/{}/400/225", image_seed(seed_input))
}
