//! Command-line configuration.

use std::time::Duration;

use clap::Parser;
use url::Url;

/// Fetch a feed once and print its items.
#[derive(Debug, Parser)]
#[command(name = "feed-loader", version, about)]
pub struct Cli {
    /// Feed endpoint to fetch.
    #[arg(env = "FEED_URL")]
    pub url: Url,

    /// Give up on the request after this many seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

impl Cli {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
