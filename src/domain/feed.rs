use serde::{Deserialize, Serialize};

use super::Entry;

/// Format the parser detected for the document. Serialized lowercase in
/// JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedType {
    Rss,
    Atom,
    Json,
}

/// A parsed feed document. Entries keep the order the parser produced,
/// which matches document order. Not persisted; built per fetch and
/// discarded after rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feed {
    pub title: Option<String>,
    pub feed_type: FeedType,
    pub entries: Vec<Entry>,
}

impl Feed {
    pub fn new(title: Option<String>, feed_type: FeedType, entries: Vec<Entry>) -> Self {
        Self {
            title,
            feed_type,
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_type_serializes_lowercase() {
        let json = serde_json::to_string(&FeedType::Atom).unwrap();
        assert_eq!(json, "\"atom\"");
    }

    #[test]
    fn test_empty_feed() {
        let feed = Feed::new(None, FeedType::Rss, Vec::new());
        assert!(feed.is_empty());
        assert_eq!(feed.len(), 0);
    }
}
