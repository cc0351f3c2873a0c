//! YouTube Data API v3 client library.
//!
//! This module provides a small, read-only client for the parts of the YouTube Data API v3
//! that expose public statistics. Three endpoints are used:
//!
//! - `search.list` ([`YouTubeClient::search`]) to find channels by free text, and to find the
//!   newest broadcast of a channel in a given broadcast state.
//! - `channels.list` ([`YouTubeClient::list_channels`]) to get channel snippets and
//!   statistics for a comma-joined batch of IDs.
//! - `videos.list` ([`YouTubeClient::get_video_statistics`]) to get the statistics and
//!   live-streaming details of one video.
//!
//! The types here mirror the API's JSON documents. Flattening them into presentation
//! records happens in [`crate::fetch`].
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use youtube_stats::youtube_api::{ApiKey, YouTubeClient};
//! use youtube_stats::youtube_api::client::DEFAULT_TIMEOUT;
//!
//! # async fn example() -> Result<(), youtube_stats::FetchError> {
//! let key = ApiKey::new("AIza...")?;
//! let client = YouTubeClient::new(key, YouTubeClient::http_client(DEFAULT_TIMEOUT)?);
//!
//! let channels = client.list_channels(&["UC16niRr50-MSBwiO3YDb3RA"]).await?;
//! for channel in channels.items {
//!     println!("{}: {:?} subscribers", channel.snippet.title, channel.statistics.subscriber_count);
//! }
//! # Ok(())
//! # }
//! ```

pub mod channels;
pub mod client;
pub mod search;
pub mod types;
pub mod videos;

// Re-export main types for convenience
pub use client::{ApiKey, YouTubeClient};
pub use types::{PageInfo, Thumbnail, Thumbnails};

pub use channels::{Channel, ChannelSnippet};
pub use search::{BroadcastEventType, SearchRequest, SearchResult};
pub use videos::{LiveStreamingDetails, Video, VideoStatistics};
