//! Loads feed items from a remote endpoint through an injected [`HttpClient`].

use std::sync::{Arc, Weak};

use tracing::{debug, warn};
use url::Url;

use super::{feed_items_mapper, LoadError, LoadResult};
use crate::http::{HttpClient, HttpClientResult};

/// Fetches and decodes the feed at a fixed URL.
///
/// The loader holds no mutable state.  Every [`load`](Self::load) is an
/// independent request, and several loaders may share one client.
///
/// Dropping the loader silences any request still in flight: its completion
/// is never called.
pub struct RemoteFeedLoader {
    url: Url,
    client: Arc<dyn HttpClient>,
    /// Only this loader owns a strong reference.  In-flight requests hold a
    /// `Weak` and check it before delivering.
    alive: Arc<()>,
}

impl RemoteFeedLoader {
    /// Create a loader.  No request is made until [`load`](Self::load).
    pub fn new(url: Url, client: Arc<dyn HttpClient>) -> Self {
        Self {
            url,
            client,
            alive: Arc::new(()),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Request the feed and report the outcome to `completion`.
    ///
    /// Returns immediately.  `completion` runs once, on whichever thread the
    /// client delivers its result, unless this loader has been dropped by
    /// then.
    pub fn load<F>(&self, completion: F)
    where
        F: FnOnce(LoadResult) + Send + 'static,
    {
        let alive: Weak<()> = Arc::downgrade(&self.alive);
        let url = self.url.clone();
        debug!(%url, "loading feed");

        self.client.get(
            &self.url,
            Box::new(move |result| {
                if alive.upgrade().is_none() {
                    debug!(%url, "loader dropped, discarding result");
                    return;
                }
                completion(Self::map(result));
            }),
        );
    }

    fn map(result: HttpClientResult) -> LoadResult {
        match result {
            HttpClientResult::Success { body, response } => {
                feed_items_mapper::map(&body, response.status)
            }
            HttpClientResult::Failure(e) => {
                warn!(error = %format!("{e:#}"), "feed request failed");
                Err(LoadError::Connectivity)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
