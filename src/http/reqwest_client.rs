//! [`HttpClient`] backed by `reqwest`'s blocking API.
//!
//! Each request runs on its own short-lived thread so that
//! [`get`](HttpClient::get) never blocks the caller.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;
use url::Url;

use super::{Completion, HttpClient, HttpClientResult, HttpResponse};

/// Transport that performs real HTTP requests.
#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::blocking::Client,
}

impl ReqwestHttpClient {
    /// Build a client whose requests give up after `timeout`.
    ///
    /// The timeout covers the whole exchange, body included.  An expired
    /// timeout is reported as [`HttpClientResult::Failure`].
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client })
    }

    /// Perform the request synchronously.  Any status code counts as a
    /// response; only the absence of one is an error.
    fn fetch(client: &reqwest::blocking::Client, url: Url) -> Result<(Vec<u8>, HttpResponse)> {
        let response = client
            .get(url.clone())
            .send()
            .with_context(|| format!("GET {url} failed"))?;
        let meta = HttpResponse {
            url: response.url().clone(),
            status: response.status().as_u16(),
        };
        let body = response
            .bytes()
            .with_context(|| format!("reading body of {url} failed"))?;
        Ok((body.to_vec(), meta))
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &Url, completion: Completion) {
        let client = self.client.clone();
        let url = url.clone();

        thread::spawn(move || {
            debug!(%url, "sending request");
            let result = match Self::fetch(&client, url) {
                Ok((body, response)) => {
                    debug!(status = response.status, bytes = body.len(), "response received");
                    HttpClientResult::Success { body, response }
                }
                Err(e) => HttpClientResult::Failure(e),
            };
            completion(result);
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
