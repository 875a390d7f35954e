//! Content discovery: prompts, parsing, and the search service.
//!
//! This module contains:
//! - Prompt: per-category templates sent to the backend
//! - Parser: delimited free text -> typed records, never failing
//! - Service: orchestration and the degraded-result policy

pub mod parser;
pub mod prompt;
pub mod service;

// Re-export commonly used items
pub use parser::parse_items;
pub use prompt::{build_prompt, BLOCK_SEPARATOR};
pub use service::DiscoveryService;
