//! Free-text response parser.
//!
//! Backend answers arrive as `---`-separated blocks of `FIELD: value` lines.
//! Parsing never fails: unknown lines are ignored, missing fields degrade to
//! placeholders, and a block that yields nothing is skipped.

use std::collections::HashMap;

use rand::Rng;
use tracing::debug;

use crate::domain::{banner_url, icon_url, ContentCategory, ContentItem};

use super::prompt::BLOCK_SEPARATOR;

/// Placeholder description for blocks without one
pub const NO_DESCRIPTION: &str = "No description available.";

/// Field names the parser recognizes across all categories
const KNOWN_FIELDS: [&str; 8] = [
    "NAME",
    "TITLE",
    "DEVELOPER",
    "CHANNEL",
    "INSTRUCTOR",
    "CREATOR",
    "RATING",
    "DESCRIPTION",
];

/// Parse a raw backend answer into typed records
///
/// The web category is assembled from sources instead and never produces
/// items here.
pub fn parse_items(raw: &str, category: ContentCategory) -> Vec<ContentItem> {
    let items: Vec<ContentItem> = raw
        .split(BLOCK_SEPARATOR)
        .filter(|block| !block.trim().is_empty())
        .filter_map(|block| build_item(block, category))
        .collect();

    debug!(
        "Parsed {} item(s) from {} byte answer",
        items.len(),
        raw.len()
    );
    items
}

/// Split a block into upper-cased field names and trimmed values
///
/// Only the first colon on a line separates name from value, so values may
/// themselves contain colons. Lines without a colon are ignored.
fn parse_fields(block: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();

    for line in block.trim().lines() {
        if let Some((name, value)) = line.split_once(':') {
            fields.insert(name.trim().to_uppercase(), value.trim().to_string());
        }
    }

    fields
}

/// Look up a field, treating an empty value as absent
fn field<'a>(fields: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    fields
        .get(name)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

fn build_item(block: &str, category: ContentCategory) -> Option<ContentItem> {
    let fields = parse_fields(block);

    // A block carrying none of the known fields is prose, not an item
    if !KNOWN_FIELDS.iter().any(|name| field(&fields, name).is_some()) {
        return None;
    }

    let rating = field(&fields, "RATING")
        .and_then(leading_f64)
        .filter(|r| *r != 0.0)
        .unwrap_or_else(fallback_rating);
    let description = field(&fields, "DESCRIPTION")
        .unwrap_or(NO_DESCRIPTION)
        .to_string();

    match category {
        ContentCategory::Apps => {
            let icon_url = icon_url(field(&fields, "NAME").unwrap_or("app"));
            Some(ContentItem::App {
                name: field(&fields, "NAME").unwrap_or("Untitled App").to_string(),
                developer: field(&fields, "DEVELOPER")
                    .or_else(|| field(&fields, "CREATOR"))
                    .unwrap_or("Unknown Developer")
                    .to_string(),
                rating,
                description,
                icon_url,
            })
        }
        ContentCategory::Videos => {
            let thumbnail_url = banner_url(field(&fields, "TITLE").unwrap_or("video"));
            Some(ContentItem::Video {
                title: field(&fields, "TITLE")
                    .or_else(|| field(&fields, "NAME"))
                    .unwrap_or("Untitled Video")
                    .to_string(),
                channel: field(&fields, "CHANNEL")
                    .or_else(|| field(&fields, "CREATOR"))
                    .unwrap_or("Unknown Channel")
                    .to_string(),
                rating,
                description,
                thumbnail_url,
            })
        }
        ContentCategory::Courses => {
            let image_url = banner_url(field(&fields, "TITLE").unwrap_or("course"));
            Some(ContentItem::Course {
                title: field(&fields, "TITLE")
                    .or_else(|| field(&fields, "NAME"))
                    .unwrap_or("Untitled Course")
                    .to_string(),
                instructor: field(&fields, "INSTRUCTOR")
                    .or_else(|| field(&fields, "CREATOR"))
                    .unwrap_or("Unknown Instructor")
                    .to_string(),
                rating,
                description,
                image_url,
            })
        }
        ContentCategory::Web => None,
    }
}

/// Parse the leading numeric prefix of a rating value
///
/// Accepts forms like `4.5`, `4.5/5`, or `4.5 stars`; returns `None` when no
/// prefix parses.
fn leading_f64(value: &str) -> Option<f64> {
    let numeric: String = value
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == '-' || *c == '+')
        .collect();

    for end in (1..=numeric.len()).rev() {
        if let Ok(parsed) = numeric[..end].parse::<f64>() {
            return Some(parsed);
        }
    }

    None
}

/// Random fallback rating in [3, 5)
fn fallback_rating() -> f64 {
    rand::thread_rng().gen_range(3.0..5.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_block_preserves_values() {
        let raw = "NAME: Photo Editor Pro\nDEVELOPER: Acme Labs\nRATING: 4.6\nDESCRIPTION: Edit photos fast.";

        let items = parse_items(raw, ContentCategory::Apps);
        assert_eq!(items.len(), 1);

        match &items[0] {
            ContentItem::App {
                name,
                developer,
                rating,
                description,
                ..
            } => {
                assert_eq!(name, "Photo Editor Pro");
                assert_eq!(developer, "Acme Labs");
                assert_eq!(*rating, 4.6);
                assert_eq!(description, "Edit photos fast.");
            }
            other => panic!("Expected an app, got {:?}", other),
        }
    }

    #[test]
    fn test_blocks_split_on_separator() {
        let raw = "NAME: One\nRATING: 4\n---\nNAME: Two\nRATING: 5\n---\n   \n";
        let items = parse_items(raw, ContentCategory::Apps);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_creator_alias_fills_attribution() {
        let raw = "TITLE: Intro to Rust\nCREATOR: systems_dev\nRATING: 4.8\nDESCRIPTION: Basics.";

        let items = parse_items(raw, ContentCategory::Videos);
        assert_eq!(items[0].attribution(), Some("systems_dev"));
    }

    #[test]
    fn test_values_keep_later_colons() {
        let raw = "TITLE: Rust: The Basics\nCHANNEL: LearnIt\nRATING: 4.2";

        let items = parse_items(raw, ContentCategory::Videos);
        assert_eq!(items[0].title(), "Rust: The Basics");
    }

    #[test]
    fn test_missing_rating_falls_back_in_range() {
        let raw = "NAME: Notes\nDEVELOPER: Acme";

        for _ in 0..50 {
            let items = parse_items(raw, ContentCategory::Apps);
            let rating = items[0].rating().unwrap();
            assert!((3.0..5.0).contains(&rating), "rating {} out of range", rating);
        }
    }

    #[test]
    fn test_zero_rating_counts_as_missing() {
        let raw = "NAME: Notes\nRATING: 0";

        let items = parse_items(raw, ContentCategory::Apps);
        assert!(items[0].rating().unwrap() >= 3.0);
    }

    #[test]
    fn test_rating_prefix_parse() {
        assert_eq!(leading_f64("4.5/5"), Some(4.5));
        assert_eq!(leading_f64("4.5 stars"), Some(4.5));
        assert_eq!(leading_f64(" 3"), Some(3.0));
        assert_eq!(leading_f64("4.5.3"), Some(4.5));
        assert_eq!(leading_f64("five"), None);
        assert_eq!(leading_f64(""), None);
    }

    #[test]
    fn test_empty_fields_degrade_to_placeholders() {
        let raw = "NAME:\nDESCRIPTION:\nRATING: 4.0";

        let items = parse_items(raw, ContentCategory::Apps);
        assert_eq!(items[0].title(), "Untitled App");
        assert_eq!(items[0].description(), NO_DESCRIPTION);
        assert_eq!(items[0].attribution(), Some("Unknown Developer"));
    }

    #[test]
    fn test_video_seed_uses_title_field_only() {
        // A video block carrying only NAME titles the item from NAME but
        // seeds the thumbnail from the generic word.
        let raw = "NAME: Some Video\nRATING: 4";

        let items = parse_items(raw, ContentCategory::Videos);
        match &items[0] {
            ContentItem::Video {
                title,
                thumbnail_url,
                ..
            } => {
                assert_eq!(title, "Some Video");
                assert_eq!(thumbnail_url, &banner_url("video"));
            }
            other => panic!("Expected a video, got {:?}", other),
        }
    }

    #[test]
    fn test_prose_blocks_are_skipped() {
        let raw = "Here are some options you might like.\n---\nNAME: Notes\nRATING: 4.1";

        let items = parse_items(raw, ContentCategory::Apps);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title(), "Notes");

        // A colon in prose is not enough to make a block an item
        let raw = "Note: I could not find anything relevant to that query.";
        assert!(parse_items(raw, ContentCategory::Apps).is_empty());
    }

    #[test]
    fn test_web_category_yields_nothing() {
        let raw = "NAME: Something\nRATING: 4";
        assert!(parse_items(raw, ContentCategory::Web).is_empty());
    }
}
