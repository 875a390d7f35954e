//! Discovery Service Integration Tests
//!
//! End-to-end prompt -> backend -> parse over a canned backend: typed items
//! for the block categories, the source-driven web branch, and the
//! single-fallback-item policy for unparseable answers.

use anyhow::Result;
use async_trait::async_trait;

use scout::adapters::{BackendResponse, SearchBackend};
use scout::discovery::DiscoveryService;
use scout::domain::{ContentCategory, ContentItem, Source};

/// Backend returning a fixed answer, recording nothing
struct CannedBackend {
    text: String,
    sources: Vec<Source>,
}

impl CannedBackend {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            sources: Vec::new(),
        }
    }

    fn with_sources(mut self, sources: Vec<Source>) -> Self {
        self.sources = sources;
        self
    }

    fn into_service(self) -> DiscoveryService {
        DiscoveryService::new(Box::new(self))
    }
}

#[async_trait]
impl SearchBackend for CannedBackend {
    fn name(&self) -> &str {
        "canned"
    }

    async fn generate(&self, _prompt: &str) -> Result<BackendResponse> {
        Ok(BackendResponse {
            text: self.text.clone(),
            sources: self.sources.clone(),
        })
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}

/// Backend whose transport always fails
struct BrokenBackend;

#[async_trait]
impl SearchBackend for BrokenBackend {
    fn name(&self) -> &str {
        "broken"
    }

    async fn generate(&self, _prompt: &str) -> Result<BackendResponse> {
        anyhow::bail!("connection refused")
    }

    async fn health_check(&self) -> Result<()> {
        anyhow::bail!("connection refused")
    }
}

#[tokio::test]
async fn test_blocks_become_typed_items() {
    let answer = "NAME: Photo Editor Pro\nDEVELOPER: Acme Labs\nRATING: 4.6\nDESCRIPTION: Edit photos fast.\n---\nNAME: Sketchbook\nCREATOR: Inkline\nRATING: 4.2\nDESCRIPTION: Draw anywhere.";
    let service = CannedBackend::new(answer).into_service();

    let outcome = service
        .search("photo editors", ContentCategory::Apps)
        .await
        .unwrap();

    assert_eq!(outcome.results.len(), 2);
    assert!(outcome.summary.is_none());
    assert_eq!(outcome.results[0].title(), "Photo Editor Pro");
    assert_eq!(outcome.results[1].attribution(), Some("Inkline"));
}

#[tokio::test]
async fn test_sources_pass_through_for_item_categories() {
    let answer = "TITLE: Intro to Rust\nINSTRUCTOR: Grace\nRATING: 4.8\nDESCRIPTION: Basics.";
    let sources = vec![Source {
        uri: "https://example.com/courses".to_string(),
        title: "Example Courses".to_string(),
    }];
    let service = CannedBackend::new(answer).with_sources(sources).into_service();

    let outcome = service
        .search("rust", ContentCategory::Courses)
        .await
        .unwrap();

    assert_eq!(outcome.sources.len(), 1);
    assert_eq!(outcome.sources[0].title, "Example Courses");
}

#[tokio::test]
async fn test_web_search_folds_sources_into_results() {
    let sources = vec![
        Source {
            uri: "https://docs.example.com/wasm".to_string(),
            title: "Wasm Docs".to_string(),
        },
        Source {
            uri: "not a url".to_string(),
            title: "Odd Source".to_string(),
        },
    ];
    let service = CannedBackend::new("Wasm is a portable binary format.")
        .with_sources(sources)
        .into_service();

    let outcome = service
        .search("what is wasm", ContentCategory::Web)
        .await
        .unwrap();

    assert_eq!(
        outcome.summary.as_deref(),
        Some("Wasm is a portable binary format.")
    );
    assert!(outcome.sources.is_empty());
    assert_eq!(outcome.results.len(), 2);

    match &outcome.results[0] {
        ContentItem::Web {
            title,
            uri,
            description,
        } => {
            assert_eq!(title, "Wasm Docs");
            assert_eq!(uri, "https://docs.example.com/wasm");
            assert_eq!(description, "docs.example.com");
        }
        other => panic!("Expected a web record, got {:?}", other),
    }

    // An unparseable uri degrades to itself instead of failing the search
    assert_eq!(outcome.results[1].description(), "not a url");
}

#[tokio::test]
async fn test_unparseable_answer_yields_one_fallback_item() {
    let answer = "The model rambled on without any structure at all.";
    let service = CannedBackend::new(answer).into_service();

    let outcome = service
        .search("note apps", ContentCategory::Apps)
        .await
        .unwrap();

    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].title(), "note apps");
    assert_eq!(outcome.results[0].description(), answer);
    assert_eq!(outcome.results[0].rating(), Some(0.0));
}

#[tokio::test]
async fn test_short_unparseable_answer_yields_nothing() {
    let service = CannedBackend::new("nope").into_service();

    let outcome = service
        .search("note apps", ContentCategory::Apps)
        .await
        .unwrap();

    assert!(outcome.results.is_empty());
}

#[tokio::test]
async fn test_backend_transport_error_propagates() {
    let service = DiscoveryService::new(Box::new(BrokenBackend));

    let err = service
        .search("anything", ContentCategory::Videos)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("broken"));
    assert!(service.health_check().await.is_err());
}
