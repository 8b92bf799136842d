use feed_rs::parser;
use reqwest::blocking::Client;
use url::Url;

use crate::domain::{Enclosure, Entry, Feed, FeedType, Guid};
use crate::errors::{FinderError, FinderResult};
use crate::sources::traits::FeedSource;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub struct RssAtomSource {
    client: Client,
}

impl RssAtomSource {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    fn fetch_and_parse(&self, url: &str) -> FinderResult<Feed> {
        let response = self.client.get(url).send()?;
        let bytes = response.bytes()?;

        Self::feed_from_bytes(&bytes)
    }

    fn feed_from_bytes(bytes: &[u8]) -> FinderResult<Feed> {
        let parsed = parser::parse(bytes).map_err(|e| FinderError::FeedParse(e.to_string()))?;

        let feed_type = Self::determine_feed_type(&parsed);
        let title = parsed.title.map(|t| t.content);

        let entries: Vec<Entry> = parsed.entries.into_iter().map(Self::normalize_entry).collect();

        Ok(Feed::new(title, feed_type, entries))
    }

    /// Convert one loosely-typed parser entry into the strict entry model.
    /// All defaulting happens at this boundary, not at the print site.
    fn normalize_entry(entry: feed_rs::model::Entry) -> Entry {
        let title = entry.title.map(|t| t.content);
        let link = Self::primary_link(&entry.links);
        let summary = entry.summary.map(|s| s.content);
        let author = entry
            .authors
            .into_iter()
            .next()
            .map(|p| p.name)
            .filter(|n| !n.is_empty());

        let categories: Vec<String> = entry.categories.into_iter().map(|c| c.term).collect();

        let guid = if entry.id.is_empty() {
            None
        } else {
            let permalink = Self::is_permalink(&entry.id);
            Some(Guid {
                value: entry.id,
                permalink,
            })
        };

        let enclosure = Self::first_enclosure(entry.media);

        Entry::new()
            .with_title(title)
            .with_link(link)
            .with_summary(summary)
            .with_author(author)
            .with_published(entry.published)
            .with_updated(entry.updated)
            .with_categories(categories)
            .with_guid(guid)
            .with_enclosure(enclosure)
    }

    /// Prefer the alternate link (the article itself); fall back to the
    /// first link of any relation.
    fn primary_link(links: &[feed_rs::model::Link]) -> Option<String> {
        links
            .iter()
            .find(|l| matches!(l.rel.as_deref(), None | Some("alternate")))
            .or_else(|| links.first())
            .map(|l| l.href.clone())
    }

    // RSS guids carry an isPermaLink attribute the parser erases, so
    // recover the flag from the value shape.
    fn is_permalink(id: &str) -> bool {
        Url::parse(id)
            .map(|u| matches!(u.scheme(), "http" | "https"))
            .unwrap_or(false)
    }

    fn first_enclosure(media: Vec<feed_rs::model::MediaObject>) -> Option<Enclosure> {
        media
            .into_iter()
            .flat_map(|m| m.content)
            .find_map(|content| {
                content.url.map(|url| Enclosure {
                    url: url.to_string(),
                    mime_type: content.content_type.map(|m| m.to_string()),
                    length: content.size,
                })
            })
    }

    fn determine_feed_type(feed: &feed_rs::model::Feed) -> FeedType {
        match feed.feed_type {
            feed_rs::model::FeedType::Atom => FeedType::Atom,
            feed_rs::model::FeedType::JSON => FeedType::Json,
            _ => FeedType::Rss,
        }
    }
}

impl Default for RssAtomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedSource for RssAtomSource {
    fn fetch(&self, url: &str) -> FinderResult<Feed> {
        self.fetch_and_parse(url)
    }
}
