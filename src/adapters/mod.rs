//! Search backend interfaces.
//!
//! Backends provide a unified interface over external generative search
//! services. The discovery service only ever sees [`SearchBackend`], so tests
//! can substitute a canned implementation.

pub mod gemini;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::Source;

// Re-export the Gemini backend
pub use gemini::GeminiBackend;

/// Answer returned by a search backend
#[derive(Debug, Clone)]
pub struct BackendResponse {
    /// The generated free-text answer
    pub text: String,

    /// Grounding sources, when the backend reports them
    pub sources: Vec<Source>,
}

impl BackendResponse {
    /// Create a response with just text
    pub fn new(text: String) -> Self {
        Self {
            text,
            sources: Vec::new(),
        }
    }
}

/// Trait for generative search backends
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Human-readable backend name
    fn name(&self) -> &str;

    /// Generate an answer for a prompt
    async fn generate(&self, prompt: &str) -> Result<BackendResponse>;

    /// Health check (connectivity and credentials)
    async fn health_check(&self) -> Result<()>;
}
