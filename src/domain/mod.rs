//! Domain types for the discovery engine.
//!
//! This module contains the core data structures:
//! - Content: typed records parsed from backend answers
//! - User: accounts held by the mock auth store

pub mod content;
pub mod user;

// Re-export commonly used types
pub use content::{
    banner_url, icon_url, image_seed, ContentCategory, ContentItem, SearchOutcome, Source,
};
pub use user::User;
