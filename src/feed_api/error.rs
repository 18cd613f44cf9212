use thiserror::Error;

use crate::feed_item::FeedItem;

/// Why a feed load failed.
///
/// Flat on purpose: callers branch on the kind, and the underlying cause is
/// only logged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadError {
    /// The transport produced no response.
    #[error("could not reach the feed endpoint")]
    Connectivity,

    /// A response arrived but its status or body is unusable.
    #[error("feed endpoint returned invalid data")]
    InvalidData,
}

/// Outcome of one load: the decoded items in server order, or an error.
pub type LoadResult<E = LoadError> = Result<Vec<FeedItem>, E>;
