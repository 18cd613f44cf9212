//! Translation from a raw HTTP response into [`FeedItem`]s.
//!
//! This is a pure function (no I/O) so that tests can exercise every decoding
//! rule without a transport.  The wire structs are private: nothing outside
//! this file should depend on the JSON shape.

use serde::{de, Deserialize, Deserializer};
use tracing::warn;
use url::Url;
use uuid::Uuid;

use super::LoadError;
use crate::feed_item::FeedItem;

const OK_200: u16 = 200;

#[derive(Deserialize)]
struct Root {
    items: Vec<RemoteFeedItem>,
}

#[derive(Deserialize)]
struct RemoteFeedItem {
    #[serde(deserialize_with = "hyphenated_uuid")]
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

/// Accept only the 8-4-4-4-12 hyphenated layout (either case). The simple,
/// braced and `urn:uuid:` forms `Uuid` would otherwise take are rejected.
fn hyphenated_uuid<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let hyphenated = raw.len() == 36
        && raw
            .char_indices()
            .all(|(i, c)| matches!(i, 8 | 13 | 18 | 23) == (c == '-'));
    if !hyphenated {
        return Err(de::Error::custom(format!("`{raw}` is not a hyphenated UUID")));
    }
    Uuid::try_parse(&raw).map_err(de::Error::custom)
}

impl From<RemoteFeedItem> for FeedItem {
    fn from(item: RemoteFeedItem) -> Self {
        FeedItem::new(item.id, item.description, item.location, item.image)
    }
}

/// Decode a feed response.
///
/// Anything but status 200 is rejected without looking at the body.  A 200
/// body must decode completely: one bad item fails the whole batch.  Item
/// order is preserved.
pub fn map(body: &[u8], status: u16) -> Result<Vec<FeedItem>, LoadError> {
    if status != OK_200 {
        warn!(status, "unexpected status code");
        return Err(LoadError::InvalidData);
    }

    let root: Root = serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, "failed to decode feed body");
        LoadError::InvalidData
    })?;

    Ok(root.items.into_iter().map(FeedItem::from).collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
