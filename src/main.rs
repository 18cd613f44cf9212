//! feed-loader — fetch a remote feed once and print its items.
//!
//! Wires the library together: parse args, set up logging, build the
//! `reqwest` transport and a [`RemoteFeedLoader`], then wait for the single
//! result on a channel.

mod config;

use std::process::ExitCode;
use std::sync::{mpsc, Arc};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::Cli;
use feed_loader::{FeedItem, RemoteFeedLoader, ReqwestHttpClient};

fn main() -> Result<ExitCode> {
    // Logs go to stderr so stdout carries only items.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!(url = %cli.url, timeout_secs = cli.timeout, "feed-loader starting");

    let client = ReqwestHttpClient::new(cli.timeout())?;
    let loader = RemoteFeedLoader::new(cli.url.clone(), Arc::new(client));

    let (tx, rx) = mpsc::channel();
    loader.load(move |result| {
        // The receiver only goes away if main has already returned.
        let _ = tx.send(result);
    });
    let result = rx.recv().context("transport dropped the request")?;

    match result {
        Ok(items) => {
            info!(count = items.len(), "feed loaded");
            for item in &items {
                println!("{}", format_item(item));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!(url = %loader.url(), "{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// One tab-separated line per item; absent fields print as `-`.
fn format_item(item: &FeedItem) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        item.id,
        item.image_url,
        item.description.as_deref().unwrap_or("-"),
        item.location.as_deref().unwrap_or("-"),
    )
}
