//! Remote feed loading.
//!
//! [`RemoteFeedLoader`] issues the request through an [`HttpClient`](crate::http::HttpClient),
//! and [`feed_items_mapper`] turns the response into [`FeedItem`](crate::FeedItem)s.
//! Every failure reaches the caller as a [`LoadError`] value.

mod error;
pub mod feed_items_mapper;
mod remote_feed_loader;

pub use error::{LoadError, LoadResult};
pub use remote_feed_loader::RemoteFeedLoader;
