use std::io::Write;

use crate::errors::FinderResult;
use crate::render::{render_feed, OutputFormat};
use crate::sources::FeedSource;

pub struct FindService<S: FeedSource> {
    source: S,
}

impl<S: FeedSource> FindService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch the feed at `url` and render every entry to `out`.
    /// Nothing is written until the fetch and parse have fully succeeded,
    /// so a failed fetch never leaves partial output behind.
    /// Returns the number of entries rendered.
    pub fn find_feed<W: Write>(
        &self,
        url: &str,
        out: &mut W,
        format: OutputFormat,
    ) -> FinderResult<usize> {
        let feed = self.source.fetch(url)?;

        render_feed(&feed, out, format)?;

        Ok(feed.len())
    }
}
