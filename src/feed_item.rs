//! The domain value produced by a feed load.
//!
//! `FeedItem` is what callers of [`RemoteFeedLoader`](crate::RemoteFeedLoader)
//! receive.  It carries no wire-format details: the JSON shape lives in the
//! mapper, and a change to the API payload should never leak into this type.

use url::Url;
use uuid::Uuid;

/// A single entry of the remote feed.
///
/// Values are immutable once built.  Equality is structural, which is what
/// lets a whole `LoadResult` be compared in one `assert_eq!`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct FeedItem {
    /// Identifier assigned by the server.  Not guaranteed to be unique
    /// within one batch.
    pub id: Uuid,

    /// Optional caption text.
    pub description: Option<String>,

    /// Optional human-readable place name.
    pub location: Option<String>,

    /// Absolute URL of the item's image.
    pub image_url: Url,
}

impl FeedItem {
    /// Build an item; absent `description`/`location` are `None`.
    pub fn new(
        id: Uuid,
        description: Option<String>,
        location: Option<String>,
        image_url: Url,
    ) -> Self {
        Self {
            id,
            description,
            location,
            image_url,
        }
    }
}
