//! feed-loader — fetch a remote JSON feed and decode it into typed items.
//!
//! ## Architecture overview
//!
//! ```text
//! caller ──load()──► RemoteFeedLoader ──get()──► HttpClient
//!   ▲                     │                          │
//!   │                     ▼                          │ HttpClientResult
//!   └──LoadResult── feed_items_mapper ◄──────────────┘
//! ```
//!
//! * **`http`** — the [`HttpClient`] trait the loader depends on, and the
//!   `reqwest`-backed implementation.
//! * **`feed_api`** — the loader, the response mapper and the error type.
//! * **`feed_item`** — the [`FeedItem`] domain value.

pub mod feed_api;
mod feed_item;
pub mod http;

#[cfg(test)]
mod test_support;

pub use feed_api::{LoadError, LoadResult, RemoteFeedLoader};
pub use feed_item::FeedItem;
pub use http::{HttpClient, HttpClientResult, HttpResponse, ReqwestHttpClient};
