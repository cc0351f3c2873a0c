//! Core YouTube API client functionality and API key handling.

use crate::error::FetchError;
use crate::youtube_api::{
    channels::ChannelListResponse,
    search::{SearchListResponse, SearchRequest},
    videos::{Video, VideoListResponse},
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

/// Root of the YouTube Data API v3.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// How long a single request may take before it is abandoned.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A YouTube Data API key.
///
/// The key is only checked for being non-empty here. Whether YouTube accepts it is only
/// discovered on the first request.
#[derive(Clone)]
pub struct ApiKey(Arc<str>);

impl ApiKey {
    /// Wraps `key`, rejecting empty and whitespace-only values.
    pub fn new(key: &str) -> Result<Self, FetchError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(FetchError::Configuration(
                "YouTube Data API key is empty".to_string(),
            ));
        }
        Ok(Self(Arc::from(key)))
    }

    pub(crate) fn secret(&self) -> &str {
        &self.0
    }
}

// Keep the key out of logs and panic messages.
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Client for the read-only parts of the YouTube Data API v3.
///
/// Every request is authorized by a bare API key passed as the `key` query parameter, so only
/// public data is reachable. The client is cheap to clone; clones share the underlying
/// connection pool.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    api_key: ApiKey,
    /// API root without a trailing slash.
    base_url: Arc<str>,
    /// HTTP client for API requests
    client: reqwest::Client,
}

impl YouTubeClient {
    /// Creates a client that talks to the public YouTube API.
    pub fn new(api_key: ApiKey, client: reqwest::Client) -> Self {
        Self::with_base_url(api_key, client, DEFAULT_BASE_URL)
    }

    /// Creates a client that talks to an API-compatible server rooted at `base_url`.
    ///
    /// The endpoint name is appended to `base_url`, so for the real API this is
    /// `https://www.googleapis.com/youtube/v3`.
    pub fn with_base_url(api_key: ApiKey, client: reqwest::Client, base_url: &str) -> Self {
        Self {
            api_key,
            base_url: Arc::from(base_url.trim_end_matches('/')),
            client,
        }
    }

    /// Builds the HTTP client that [`YouTubeClient`]s are constructed around.
    pub fn http_client(timeout: Duration) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Configuration(format!("build HTTP client: {e}")))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Makes a keyed GET request to the YouTube API and decodes the JSON response.
    ///
    /// This method consolidates the shared logic across all YouTube API requests:
    /// - URL building from the endpoint name
    /// - API key query parameter
    /// - Status code validation, keeping the raw error body for the caller
    /// - JSON decoding
    ///
    /// The key is stripped from any transport error so it never ends up in a log line.
    #[instrument(skip(self, query_params), level = tracing::Level::TRACE)]
    async fn get_json<Q, T>(&self, endpoint: &'static str, query_params: &Q) -> Result<T, FetchError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .query(query_params)
            .query(&[("key", self.api_key.secret())])
            .send()
            .await
            .map_err(|source| FetchError::Request {
                endpoint,
                source: source.without_url(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(FetchError::Http {
                endpoint,
                status,
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|source| FetchError::Decode {
                endpoint,
                source: source.without_url(),
            })
    }

    /// Runs a single page of `search.list`.
    ///
    /// # Arguments
    ///
    /// * `request` - What to search for; see [`SearchRequest::channels`] and
    ///   [`SearchRequest::latest_broadcast`]
    ///
    /// # Quota
    ///
    /// Every search costs 100 units, against a default daily quota of 10,000.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/search/list>
    #[instrument(skip(self))]
    pub async fn search(&self, request: &SearchRequest<'_>) -> Result<SearchListResponse, FetchError> {
        let response: SearchListResponse =
            self.get_json("search", &request.query_params()).await?;

        tracing::debug!(
            total_results = response.page_info.total_results,
            returned_items = response.items.len(),
            "fetched search results"
        );

        Ok(response)
    }

    /// Gets snippet and statistics for a batch of channels in one `channels.list` call.
    ///
    /// IDs YouTube does not recognize are silently left out of the response, and the response
    /// order is YouTube's, not the order of `channel_ids`.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/channels/list>
    #[instrument(skip(self))]
    pub async fn list_channels(
        &self,
        channel_ids: &[&str],
    ) -> Result<ChannelListResponse, FetchError> {
        let ids = channel_ids.join(",");
        let query_params = [("part", "snippet,statistics"), ("id", ids.as_str())];

        let channels: ChannelListResponse = self.get_json("channels", &query_params).await?;

        tracing::debug!(
            requested = channel_ids.len(),
            returned_items = channels.items.len(),
            "fetched channels"
        );

        Ok(channels)
    }

    /// Gets statistics and live streaming details for a single YouTube video by its ID.
    ///
    /// # Returns
    ///
    /// The [`Video`], or [`FetchError::NotFound`] if YouTube returned no item for `video_id`
    /// (deleted, made private, or never existed).
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/videos/list>
    #[instrument(skip(self))]
    pub async fn get_video_statistics(&self, video_id: &str) -> Result<Video, FetchError> {
        let query_params = [("part", "statistics,liveStreamingDetails"), ("id", video_id)];

        let videos: VideoListResponse = self.get_json("videos", &query_params).await?;

        tracing::debug!(
            video_id,
            returned_items = videos.items.len(),
            "fetched video statistics"
        );

        videos
            .items
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::NotFound(format!("video {video_id}")))
    }
}
