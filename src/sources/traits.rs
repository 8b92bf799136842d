use crate::domain::Feed;
use crate::errors::FinderResult;

/// "Parse feed at URL" capability. Transport, XML handling, and format
/// normalization (RSS 2.0 / Atom / RDF) live behind this seam.
#[cfg_attr(test, mockall::automock)]
pub trait FeedSource: Send + Sync {
    /// Retrieve the document at `url` and parse it into a feed.
    fn fetch(&self, url: &str) -> FinderResult<Feed>;
}
