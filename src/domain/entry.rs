use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// RSS guid / Atom id for an entry. `permalink` is true when the value is
/// itself a resolvable URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guid {
    pub value: String,
    pub permalink: bool,
}

/// Attached media (RSS enclosure / Atom link rel="enclosure").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enclosure {
    pub url: String,
    pub mime_type: Option<String>,
    pub length: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub summary: Option<String>,
    pub author: Option<String>,
    pub published: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub categories: Vec<String>,
    pub guid: Option<Guid>,
    pub enclosure: Option<Enclosure>,
}

impl Entry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn with_link(mut self, link: Option<String>) -> Self {
        self.link = link;
        self
    }

    pub fn with_summary(mut self, summary: Option<String>) -> Self {
        self.summary = summary;
        self
    }

    pub fn with_author(mut self, author: Option<String>) -> Self {
        self.author = author;
        self
    }

    pub fn with_published(mut self, published: Option<DateTime<Utc>>) -> Self {
        self.published = published;
        self
    }

    pub fn with_updated(mut self, updated: Option<DateTime<Utc>>) -> Self {
        self.updated = updated;
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_guid(mut self, guid: Option<Guid>) -> Self {
        self.guid = guid;
        self
    }

    pub fn with_enclosure(mut self, enclosure: Option<Enclosure>) -> Self {
        self.enclosure = enclosure;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_has_no_fields() {
        let entry = Entry::new();
        assert!(entry.title.is_none());
        assert!(entry.link.is_none());
        assert!(entry.summary.is_none());
        assert!(entry.author.is_none());
        assert!(entry.published.is_none());
        assert!(entry.categories.is_empty());
        assert!(entry.guid.is_none());
        assert!(entry.enclosure.is_none());
    }

    #[test]
    fn test_builder_sets_fields() {
        let entry = Entry::new()
            .with_title(Some("A".to_string()))
            .with_link(Some("http://x/1".to_string()))
            .with_summary(Some("d1".to_string()))
            .with_categories(vec!["news".to_string(), "local".to_string()])
            .with_guid(Some(Guid {
                value: "http://x/1".to_string(),
                permalink: true,
            }));

        assert_eq!(entry.title.as_deref(), Some("A"));
        assert_eq!(entry.link.as_deref(), Some("http://x/1"));
        assert_eq!(entry.summary.as_deref(), Some("d1"));
        assert_eq!(entry.categories, vec!["news", "local"]);
        assert!(entry.guid.unwrap().permalink);
    }
}
