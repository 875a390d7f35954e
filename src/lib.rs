//! scout - AI-powered content discovery engine
//!
//! Queries a generative search backend for apps, videos, courses, and web
//! summaries, parses the model's delimited free-text answers into typed
//! records, and keeps a mock key-value-backed auth/session store.
//!
//! # Architecture
//!
//! - Backend answers are free text; the parser never fails, it degrades:
//!   missing fields become placeholders, an unparseable answer becomes one
//!   fallback record carrying the raw text
//! - All persistence goes through an injectable key-value seam so tests run
//!   against an in-memory store
//! - The auth store rewrites its table wholesale per operation: sequential
//!   calls observe each other, concurrent processes race last-writer-wins
//!
//! # Modules
//!
//! - `adapters`: Search backends (Gemini REST with Google Search grounding)
//! - `discovery`: Prompt templates, response parser, search service
//! - `auth`: Mock login/register/logout/update over the store seam
//! - `store`: Key-value persistence (JSON files, in-memory fake)
//! - `domain`: Data structures (ContentItem, Source, User)
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Search for apps
//! scout search apps "photo editors"
//!
//! # Ask for a web summary
//! scout search web "what is wasm"
//!
//! # Drive the mock auth store
//! scout register "Ada" ada ada@example.com
//! scout whoami
//! ```

pub mod adapters;
pub mod auth;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod domain;
pub mod store;

// Re-export main types at crate root for convenience
pub use adapters::{BackendResponse, GeminiBackend, SearchBackend};
pub use auth::{AuthError, AuthStore};
pub use discovery::DiscoveryService;
pub use domain::{ContentCategory, ContentItem, SearchOutcome, Source, User};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
