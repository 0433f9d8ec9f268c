//! Seed Data
//!
//! News and staff lists embedded at compile time from `data/*.json`.

use serde::de::DeserializeOwned;

use crate::error::SeedError;
use crate::models::{NewsItem, StaffMember};

const NEWS_JSON: &str = include_str!("../data/news.json");
const STAFF_JSON: &str = include_str!("../data/staff.json");

fn parse<T: DeserializeOwned>(list: &'static str, raw: &str) -> Result<Vec<T>, SeedError> {
    serde_json::from_str(raw).map_err(|source| SeedError::Parse { list, source })
}

pub fn parse_news(raw: &str) -> Result<Vec<NewsItem>, SeedError> {
    parse("news", raw)
}

pub fn parse_staff(raw: &str) -> Result<Vec<StaffMember>, SeedError> {
    parse("staff", raw)
}

/// Initial news items. Falls back to an empty list if the seed is broken.
pub fn news() -> Vec<NewsItem> {
    parse_news(NEWS_JSON).unwrap_or_else(|e| {
        log::error!("{}", e);
        Vec::new()
    })
}

/// Staff roster in display order. Falls back to an empty list if the seed is broken.
pub fn staff() -> Vec<StaffMember> {
    parse_staff(STAFF_JSON).unwrap_or_else(|e| {
        log::error!("{}", e);
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StaffRole;

    #[test]
    fn test_embedded_seeds_parse() {
        let news = parse_news(NEWS_JSON).unwrap();
        assert!(!news.is_empty());
        assert_eq!(news[0].id, 1);

        let staff = parse_staff(STAFF_JSON).unwrap();
        assert_eq!(staff.len(), 15);
        assert_eq!(staff[0].role, StaffRole::Owner);
        assert_eq!(staff[1].role, StaffRole::CoOwner);
    }

    #[test]
    fn test_missing_image_defaults_to_empty() {
        let raw = r#"[{"id": 3, "title": "t", "summary": "s", "body": "b",
                      "author": "a", "published_date": ""}]"#;
        let news = parse_news(raw).unwrap();
        assert_eq!(news[0].image_ref, "");
    }

    #[test]
    fn test_parse_error_names_list() {
        let err = parse_staff("[{\"name\": 1}]").unwrap_err();
        assert!(err.to_string().starts_with("invalid staff seed"));
    }
}
