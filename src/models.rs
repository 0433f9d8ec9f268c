//! Frontend Models
//!
//! News items, their drafts/patches, and staff members.

use serde::{Deserialize, Serialize};

/// News item identifier
pub type NewsId = u64;

/// One news/announcement entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: NewsId,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub author: String,
    pub published_date: String,
    #[serde(default)]
    pub image_ref: String,
}

/// Fields of a news item before an id is assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsDraft {
    pub title: String,
    pub summary: String,
    pub body: String,
    pub author: String,
    pub published_date: String,
    pub image_ref: String,
}

impl NewsDraft {
    /// Placeholder draft used by the "Add News" button, dated `published_date`
    pub fn placeholder(published_date: impl Into<String>) -> Self {
        Self {
            title: "New Title".to_string(),
            summary: "Short summary".to_string(),
            body: "Full content".to_string(),
            author: "Author Name".to_string(),
            published_date: published_date.into(),
            image_ref: String::new(),
        }
    }

    pub fn into_item(self, id: NewsId) -> NewsItem {
        NewsItem {
            id,
            title: self.title,
            summary: self.summary,
            body: self.body,
            author: self.author,
            published_date: self.published_date,
            image_ref: self.image_ref,
        }
    }
}

/// Partial update; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsPatch {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub author: Option<String>,
    pub published_date: Option<String>,
    pub image_ref: Option<String>,
}

impl NewsPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Apply present fields to `item`. The id is never touched.
    pub fn apply_to(&self, item: &mut NewsItem) {
        fn set(field: &mut String, value: &Option<String>) {
            if let Some(v) = value {
                field.clone_from(v);
            }
        }
        set(&mut item.title, &self.title);
        set(&mut item.summary, &self.summary);
        set(&mut item.body, &self.body);
        set(&mut item.author, &self.author);
        set(&mut item.published_date, &self.published_date);
        set(&mut item.image_ref, &self.image_ref);
    }
}

/// Staff rank, in roster order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaffRole {
    Owner,
    #[serde(rename = "Co Owner")]
    CoOwner,
    Manager,
    Developer,
    #[serde(rename = "SR Admin")]
    SrAdmin,
    Admin,
    Helper,
}

/// Staff roster entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub name: String,
    pub role: StaffRole,
    pub description: String,
    #[serde(default)]
    pub avatar: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewsItem {
        NewsDraft::placeholder("2024-10-15").into_item(7)
    }

    #[test]
    fn test_patch_only_touches_present_fields() {
        let mut item = sample();
        let patch = NewsPatch {
            title: Some("Launch".to_string()),
            ..Default::default()
        };
        patch.apply_to(&mut item);

        assert_eq!(item.id, 7);
        assert_eq!(item.title, "Launch");
        assert_eq!(item.summary, "Short summary");
        assert_eq!(item.published_date, "2024-10-15");
    }

    #[test]
    fn test_empty_patch() {
        assert!(NewsPatch::default().is_empty());
        let patch = NewsPatch { author: Some(String::new()), ..Default::default() };
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_staff_role_names() {
        let role: StaffRole = serde_json::from_str("\"Co Owner\"").unwrap();
        assert_eq!(role, StaffRole::CoOwner);
        assert_eq!(serde_json::to_string(&StaffRole::SrAdmin).unwrap(), "\"SR Admin\"");
    }
}
