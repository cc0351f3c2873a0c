//! YouTube Videos API types.

use crate::youtube_api::types::PageInfo;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `videos.list` API call.
///
/// Contains a list of [`Video`] resources that match the request criteria,
/// along with pagination information in [`PageInfo`].
///
/// See: <https://developers.google.com/youtube/v3/docs/videos/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#videoListResponse`.
    pub kind: String,
    /// A list of videos that match the request criteria.
    #[serde(default)]
    pub items: VecDeque<Video>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
}

/// A `video` resource represents a YouTube video.
///
/// Contains statistics about the video, and live-streaming details if the video is or was a
/// live broadcast.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Video {
    /// The ID that YouTube uses to uniquely identify the video.
    pub id: String,
    /// Contains statistics about the video.
    #[serde(default)]
    pub statistics: VideoStatistics,
    /// Metadata about a live video broadcast.
    ///
    /// Only present for videos that are upcoming, live, or completed live broadcasts.
    #[serde(rename = "liveStreamingDetails")]
    pub live_streaming_details: Option<LiveStreamingDetails>,
}

/// Statistics about the video.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#statistics>
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct VideoStatistics {
    /// The number of times the video has been viewed.
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
    /// The number of users who have indicated that they liked the video.
    #[serde(rename = "likeCount")]
    pub like_count: Option<String>,
    /// The number of users who currently have the video marked as a favorite video.
    /// Note: This property is deprecated and always returns 0.
    #[serde(rename = "favoriteCount")]
    pub favorite_count: Option<String>,
    /// The number of comments for the video.
    ///
    /// Missing when comments are disabled.
    #[serde(rename = "commentCount")]
    pub comment_count: Option<String>,
}

/// Live-streaming metadata for a video.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#liveStreamingDetails>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LiveStreamingDetails {
    /// The time that the broadcast actually started.
    #[serde(rename = "actualStartTime")]
    pub actual_start_time: Option<Timestamp>,
    /// The time that the broadcast actually ended.
    ///
    /// Not present until the broadcast is over.
    #[serde(rename = "actualEndTime")]
    pub actual_end_time: Option<Timestamp>,
    /// The time that the broadcast is scheduled to begin.
    #[serde(rename = "scheduledStartTime")]
    pub scheduled_start_time: Option<Timestamp>,
    /// The number of viewers currently watching the broadcast.
    ///
    /// Only present while the broadcast is live; YouTube sends it as a string.
    #[serde(rename = "concurrentViewers")]
    pub concurrent_viewers: Option<String>,
}
