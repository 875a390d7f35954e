//! Prompt templates for the search backend.
//!
//! Item categories ask for delimited field blocks the parser understands;
//! the web category asks for a single paragraph with no lists.

use crate::domain::ContentCategory;

/// Literal token separating item blocks in backend answers
pub const BLOCK_SEPARATOR: &str = "---";

const COMMON_FORMAT: &str = "For each item, provide its NAME (or TITLE), CREATOR (developer, \
     channel, or instructor), RATING (out of 5), and a short DESCRIPTION. Format each item as a \
     distinct block separated by \"---\". Ensure rating is a number.";

/// Build the search prompt for a query and category
pub fn build_prompt(query: &str, category: ContentCategory) -> String {
    match category {
        ContentCategory::Apps => format!(
            "Based on the latest information from Google Search, find popular and highly-rated \
             apps related to \"{}\". {}",
            query, COMMON_FORMAT
        ),
        ContentCategory::Videos => format!(
            "Based on the latest information from Google Search, find popular and highly-rated \
             videos related to \"{}\". {}",
            query, COMMON_FORMAT
        ),
        ContentCategory::Courses => format!(
            "Based on the latest information from Google Search, find popular and highly-rated \
             online courses or tutorials related to \"{}\". {}",
            query, COMMON_FORMAT
        ),
        ContentCategory::Web => format!(
            "Based on the latest information from Google Search, provide a concise, \
             one-paragraph summary to answer the query: \"{}\". Do not list websites, URLs, or \
             any kind of list in your summary. Just provide the paragraph.",
            query
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_prompts_request_delimited_blocks() {
        for category in [
            ContentCategory::Apps,
            ContentCategory::Videos,
            ContentCategory::Courses,
        ] {
            let prompt = build_prompt("rust tutorials", category);
            assert!(prompt.contains("rust tutorials"));
            assert!(prompt.contains("RATING"));
            assert!(prompt.contains(BLOCK_SEPARATOR));
        }
    }

    #[test]
    fn test_web_prompt_requests_a_paragraph() {
        let prompt = build_prompt("what is rust", ContentCategory::Web);
        assert!(prompt.contains("one-paragraph summary"));
        assert!(!prompt.contains("RATING"));
    }
}
