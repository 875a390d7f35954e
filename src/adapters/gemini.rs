//! Gemini REST backend with Google Search grounding.
//!
//! Calls `models/<model>:generateContent` directly over HTTP. The
//! `googleSearch` tool is always attached so answers come back with
//! grounding chunks, which map onto [`Source`] records.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::Source;

use super::{BackendResponse, SearchBackend};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Search backend over the Gemini HTTP API
pub struct GeminiBackend {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiBackend {
    /// Create a backend with the given API key and model
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Create a backend from the `GEMINI_API_KEY` environment variable
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .context("GEMINI_API_KEY environment variable required")?;
        Ok(Self::new(api_key, DEFAULT_MODEL))
    }

    /// Override the model after construction
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl SearchBackend for GeminiBackend {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<BackendResponse> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            BASE_URL, self.model, self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            tools: vec![Tool {
                google_search: GoogleSearch {},
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Gemini API request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API error ({}): {}", status, body.trim());
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse Gemini response")?;

        let candidate = parsed
            .candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .context("Gemini API returned no candidates")?;

        let text = candidate
            .content
            .and_then(|content| content.parts)
            .map(|parts| {
                parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        let sources = candidate
            .grounding_metadata
            .map(|metadata| {
                metadata
                    .grounding_chunks
                    .into_iter()
                    .filter_map(|chunk| chunk.web)
                    .filter_map(|web| {
                        web.uri.map(|uri| Source {
                            uri,
                            title: web
                                .title
                                .unwrap_or_else(|| "Untitled Source".to_string()),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(BackendResponse { text, sources })
    }

    async fn health_check(&self) -> Result<()> {
        let url = format!("{}?key={}", BASE_URL, self.api_key);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Gemini health check request failed")?;

        if !response.status().is_success() {
            anyhow::bail!("Gemini health check failed: {}", response.status());
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    tools: Vec<Tool>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct Tool {
    #[serde(rename = "googleSearch")]
    google_search: GoogleSearch,
}

#[derive(Serialize)]
struct GoogleSearch {}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "groundingMetadata")]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct GroundingMetadata {
    #[serde(rename = "groundingChunks", default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Deserialize)]
struct GroundingChunk {
    web: Option<WebChunk>,
}

#[derive(Deserialize)]
struct WebChunk {
    uri: Option<String>,
    title: Option<String>,
}
