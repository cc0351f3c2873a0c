//! Retrieval and normalization of public YouTube channel and live-stream statistics.
//!
//! A presentation layer (the bundled CLI, or anything else) builds one client with
//! [`create_client`] and then calls the fetchers in [`fetch`] once per user action:
//!
//! - [`search_channels`] finds channels by free text.
//! - [`get_channel_statistics`] compares subscriber, view, and video counts across channels.
//! - [`get_latest_live_stream_stats`] reports on a channel's latest broadcast.
//!
//! Results come back as the flat records in [`records`]. Failures come back as a
//! [`FetchError`], after having been logged once through `tracing`.

pub mod config;
pub mod error;
pub mod fetch;
pub mod records;
pub mod youtube_api;

pub use config::ClientConfig;
pub use error::{ErrorKind, FetchError};
pub use fetch::{
    DEFAULT_SEARCH_RESULTS, get_channel_statistics, get_latest_live_stream_stats, search_channels,
};
pub use records::{ChannelStatistics, ChannelSummary, ChannelTable, LiveStreamStatistics};
pub use youtube_api::{ApiKey, YouTubeClient};

/// Builds a client for the public YouTube Data API v3 authorized by `credential`.
///
/// Fails with [`FetchError::Configuration`] if the credential is blank or the HTTP client
/// cannot be set up. No request is made, so a key YouTube rejects is only noticed on first use.
pub fn create_client(credential: &str) -> Result<YouTubeClient, FetchError> {
    create_client_with_config(credential, &ClientConfig::default())
}

/// Like [`create_client`], with a non-default API root or timeout.
pub fn create_client_with_config(
    credential: &str,
    config: &ClientConfig,
) -> Result<YouTubeClient, FetchError> {
    let api_key = ApiKey::new(credential)?;
    let http = YouTubeClient::http_client(config.timeout)?;
    tracing::debug!(base_url = %config.base_url, timeout = ?config.timeout, "created YouTube client");
    Ok(YouTubeClient::with_base_url(api_key, http, &config.base_url))
}
