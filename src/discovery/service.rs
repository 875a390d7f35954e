//! Discovery service: prompt -> backend -> typed records.
//!
//! Owns the degraded-result policy: a backend answer that parses to nothing
//! still comes back as a single fallback record carrying the raw text, so
//! the caller always has something to show.

use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::SearchBackend;
use crate::domain::{banner_url, icon_url, ContentCategory, ContentItem, SearchOutcome, Source};

use super::parser::parse_items;
use super::prompt::build_prompt;

/// Raw answers shorter than this are not worth a fallback record
const FALLBACK_MIN_LEN: usize = 10;

/// Content search over an injected backend
pub struct DiscoveryService {
    backend: Box<dyn SearchBackend>,
}

impl DiscoveryService {
    /// Create a service over a backend
    pub fn new(backend: Box<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    /// Run one search for a query and category
    ///
    /// Only backend transport failures surface as errors; everything about
    /// the answer's shape degrades instead.
    pub async fn search(&self, query: &str, category: ContentCategory) -> Result<SearchOutcome> {
        let prompt = build_prompt(query, category);

        info!("Searching {} for \"{}\"", category, query);
        let response = self
            .backend
            .generate(&prompt)
            .await
            .with_context(|| format!("Search backend '{}' failed", self.backend.name()))?;

        if category == ContentCategory::Web {
            let results = response.sources.iter().map(web_record).collect();
            return Ok(SearchOutcome {
                results,
                sources: Vec::new(),
                summary: Some(response.text),
            });
        }

        let mut results = parse_items(&response.text, category);
        if results.is_empty() && response.text.len() > FALLBACK_MIN_LEN {
            results.push(fallback_item(query, category, &response.text));
        }

        Ok(SearchOutcome {
            results,
            sources: response.sources,
            summary: None,
        })
    }

    /// Check the backend is reachable
    pub async fn health_check(&self) -> Result<()> {
        self.backend.health_check().await
    }
}

/// Turn one grounding source into a web record
///
/// The description is the source hostname; a uri that does not parse keeps
/// the raw uri instead of failing the search.
fn web_record(source: &Source) -> ContentItem {
    let description = reqwest::Url::parse(&source.uri)
        .ok()
        .and_then(|url| url.host_str().map(str::to_owned))
        .unwrap_or_else(|| source.uri.clone());

    ContentItem::Web {
        title: source.title.clone(),
        uri: source.uri.clone(),
        description,
    }
}

/// The single record emitted when an answer parses to nothing
fn fallback_item(query: &str, category: ContentCategory, raw: &str) -> ContentItem {
    let description = raw.to_string();

    match category {
        ContentCategory::Apps => ContentItem::App {
            name: query.to_string(),
            developer: "N/A".to_string(),
            rating: 0.0,
            description,
            icon_url: icon_url("default"),
        },
        ContentCategory::Videos => ContentItem::Video {
            title: query.to_string(),
            channel: "N/A".to_string(),
            rating: 0.0,
            description,
            thumbnail_url: banner_url("default"),
        },
        ContentCategory::Courses => ContentItem::Course {
            title: query.to_string(),
            instructor: "N/A".to_string(),
            rating: 0.0,
            description,
            image_url: banner_url("default"),
        },
        // Web answers never reach the fallback path
        ContentCategory::Web => ContentItem::Web {
            title: query.to_string(),
            uri: String::new(),
            description,
        },
    }
}
