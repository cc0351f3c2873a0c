//! YouTube Channels API types.

use crate::youtube_api::types::{PageInfo, Thumbnails};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `channels.list` API call.
///
/// Contains a list of [`Channel`] resources that match the request criteria,
/// along with pagination information in [`PageInfo`].
///
/// Channel IDs that YouTube does not recognize are simply absent from `items`.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#channelListResponse`.
    pub kind: String,
    /// A list of channels that match the request criteria.
    ///
    /// YouTube leaves this key out entirely when nothing matched.
    #[serde(default)]
    pub items: VecDeque<Channel>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
}

/// A `channel` resource contains information about a YouTube channel.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Channel {
    /// The ID that YouTube uses to uniquely identify the channel.
    pub id: String,
    /// Contains basic details about the channel.
    pub snippet: ChannelSnippet,
    /// Contains statistics for the channel.
    ///
    /// Only present when `statistics` was requested in `part`.
    #[serde(default)]
    pub statistics: ChannelStatistics,
}

/// The snippet object contains basic details about the channel.
///
/// This is a subset of the full snippet data available from the YouTube API,
/// containing only the fields currently needed by this implementation.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#snippet>
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelSnippet {
    /// The channel's title.
    pub title: String,
    /// The channel's description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Thumbnail images for the channel.
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

/// Statistics about the channel.
///
/// YouTube encodes every counter as a decimal string. Any of them may be missing, most
/// commonly `subscriberCount` when the owner hides it.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#statistics>
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ChannelStatistics {
    /// The number of times the channel has been viewed.
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
    /// The number of subscribers that the channel has, rounded down to three significant figures.
    #[serde(rename = "subscriberCount")]
    pub subscriber_count: Option<String>,
    /// Indicates whether the channel's subscriber count is publicly visible.
    #[serde(rename = "hiddenSubscriberCount", default)]
    pub hidden_subscriber_count: bool,
    /// The number of public videos uploaded to the channel.
    #[serde(rename = "videoCount")]
    pub video_count: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_list_without_items() {
        let response: ChannelListResponse = serde_json::from_value(serde_json::json!({
            "kind": "youtube#channelListResponse",
            "etag": "abc",
            "pageInfo": { "totalResults": 0, "resultsPerPage": 5 }
        }))
        .unwrap();
        assert!(response.items.is_empty());
        assert_eq!(response.page_info.total_results, 0);
    }

    #[test]
    fn test_channel_with_hidden_subscribers() {
        let channel: Channel = serde_json::from_value(serde_json::json!({
            "kind": "youtube#channel",
            "id": "UC16niRr50-MSBwiO3YDb3RA",
            "snippet": {
                "title": "BBC News",
                "description": "Welcome to BBC News",
                "thumbnails": { "default": { "url": "x" } }
            },
            "statistics": {
                "viewCount": "200",
                "hiddenSubscriberCount": true,
                "videoCount": "3"
            }
        }))
        .unwrap();
        assert_eq!(channel.snippet.title, "BBC News");
        assert!(channel.statistics.hidden_subscriber_count);
        assert_eq!(channel.statistics.subscriber_count, None);
        assert_eq!(channel.statistics.view_count.as_deref(), Some("200"));
        assert_eq!(channel.snippet.thumbnails.default_url(), "x");
    }
}
