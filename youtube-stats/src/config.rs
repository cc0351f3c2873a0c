//! Settings for building a [`YouTubeClient`](crate::youtube_api::YouTubeClient).

use crate::youtube_api::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use std::time::Duration;

/// Environment variable the API key is read from when it is not given explicitly.
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";

/// Environment variable that points the client at an API-compatible server.
pub const BASE_URL_ENV: &str = "YOUTUBE_API_BASE_URL";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, e.g. `https://www.googleapis.com/youtube/v3`.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
