//! Transport abstraction layer.
//!
//! This module defines the [`HttpClient`] trait the feed loader depends on,
//! and the [`HttpClientResult`] it hands back.  The loader never talks to a
//! network stack directly; the only concrete implementation shipped here is
//! [`ReqwestHttpClient`], and tests substitute a recording spy.
//!
//! ## For contributors — adding a transport
//!
//! 1. Create a new file in this directory (e.g. `ureq_client.rs`).
//! 2. Define a struct holding whatever the stack needs and implement
//!    [`HttpClient`] for it.
//! 3. Add `mod ureq_client;` below and re-export the struct.
//!
//! Timeouts, retries and proxies are the transport's own business.  The
//! loader only sees the single outcome delivered to the completion.

mod reqwest_client;

pub use reqwest_client::ReqwestHttpClient;

use url::Url;

/// Response metadata delivered alongside the body.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HttpResponse {
    /// Final URL after redirects.
    pub url: Url,
    /// HTTP status code.
    pub status: u16,
}

/// The raw outcome of one transport attempt.
#[derive(Debug)]
pub enum HttpClientResult {
    /// A response was obtained.  Says nothing about whether it is usable.
    Success { body: Vec<u8>, response: HttpResponse },
    /// No response was obtained (unreachable host, TLS failure, timeout...).
    Failure(anyhow::Error),
}

/// Callback invoked with the outcome of a [`HttpClient::get`] call.
pub type Completion = Box<dyn FnOnce(HttpClientResult) + Send + 'static>;

/// Capability to fetch a URL.
///
/// One client may be shared by any number of loaders, so `get` can be called
/// concurrently from several threads.
///
/// ## Contract
///
/// * `get` returns without waiting for the network.
/// * `completion` is invoked at most once, on whatever thread the
///   implementation likes.
/// * Failures are reported through `completion`, never by panicking.
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &Url, completion: Completion);
}
