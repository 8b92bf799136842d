pub mod entry;
pub mod feed;

pub use entry::{Enclosure, Entry, Guid};
pub use feed::{Feed, FeedType};
