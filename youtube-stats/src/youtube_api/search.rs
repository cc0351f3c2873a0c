//! YouTube Search API types.
//!
//! `search.list` is the only endpoint that can find resources by free text or by broadcast
//! state, so both channel search and the "latest broadcast" lookup go through it.

use crate::youtube_api::types::{PageInfo, Thumbnails};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// The most results `search.list` will return for one page.
pub const MAX_SEARCH_RESULTS: u32 = 50;

/// Response structure for the `search.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/search/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#searchListResponse`.
    pub kind: String,
    /// A list of results that match the search criteria.
    #[serde(default)]
    pub items: VecDeque<SearchResult>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
}

/// A search result contains information about a YouTube video, channel, or playlist that
/// matches the search parameters.
///
/// See: <https://developers.google.com/youtube/v3/docs/search#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResult {
    /// Identifies the resource that matched the search request.
    pub id: SearchResultId,
    pub snippet: SearchResultSnippet,
}

/// Identifies the resource behind a [`SearchResult`].
///
/// Exactly one of the id fields is set, matching `kind`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResultId {
    /// The type of the API resource, e.g. `youtube#channel` or `youtube#video`.
    pub kind: String,
    #[serde(rename = "videoId", skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(rename = "channelId", skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(rename = "playlistId", skip_serializing_if = "Option::is_none")]
    pub playlist_id: Option<String>,
}

/// Basic details about a search result.
///
/// See: <https://developers.google.com/youtube/v3/docs/search#snippet>
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResultSnippet {
    /// The creation date and time of the resource that the search result identifies.
    ///
    /// For a broadcast this is when the broadcast was created, not when it went live.
    #[serde(rename = "publishedAt")]
    pub published_at: Timestamp,
    /// The ID of the channel that published the resource.
    #[serde(rename = "channelId", default)]
    pub channel_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
    /// The title of the channel that published the resource.
    #[serde(rename = "channelTitle", default)]
    pub channel_title: String,
    /// Whether the resource is an upcoming or active live broadcast (`"none"` otherwise).
    #[serde(rename = "liveBroadcastContent", default)]
    pub live_broadcast_content: String,
}

/// Restricts a search to one type of resource (`type` parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Channel,
    Playlist,
    Video,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Channel => "channel",
            SearchType::Playlist => "playlist",
            SearchType::Video => "video",
        }
    }
}

/// Restricts a video search to broadcast events (`eventType` parameter).
///
/// YouTube only honors this when the search type is [`SearchType::Video`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BroadcastEventType {
    /// Broadcasts that have ended.
    Completed,
    /// Broadcasts that are in progress right now.
    Live,
    /// Broadcasts that have been scheduled but not started.
    Upcoming,
}

impl BroadcastEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BroadcastEventType::Completed => "completed",
            BroadcastEventType::Live => "live",
            BroadcastEventType::Upcoming => "upcoming",
        }
    }
}

impl fmt::Display for BroadcastEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result ordering for a search (`order` parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchOrder {
    /// Reverse chronological order by creation date.
    Date,
    /// YouTube's relevance ranking; the API default.
    #[default]
    Relevance,
    ViewCount,
}

impl SearchOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchOrder::Date => "date",
            SearchOrder::Relevance => "relevance",
            SearchOrder::ViewCount => "viewCount",
        }
    }
}

/// Parameters for a single `search.list` call.
///
/// Only `part=snippet` is ever requested, and only the first page is fetched.
#[derive(Debug, Clone)]
pub struct SearchRequest<'a> {
    pub query: Option<&'a str>,
    pub channel_id: Option<&'a str>,
    pub search_type: SearchType,
    pub event_type: Option<BroadcastEventType>,
    pub order: SearchOrder,
    /// Clamped to [`MAX_SEARCH_RESULTS`] when the request is built.
    pub max_results: u32,
}

impl<'a> SearchRequest<'a> {
    /// Free-text search for channels.
    pub fn channels(query: &'a str, max_results: u32) -> Self {
        Self {
            query: Some(query),
            channel_id: None,
            search_type: SearchType::Channel,
            event_type: None,
            order: SearchOrder::Relevance,
            max_results,
        }
    }

    /// The newest broadcast of `channel_id` in the given broadcast state.
    pub fn latest_broadcast(channel_id: &'a str, event_type: BroadcastEventType) -> Self {
        Self {
            query: None,
            channel_id: Some(channel_id),
            search_type: SearchType::Video,
            event_type: Some(event_type),
            order: SearchOrder::Date,
            max_results: 1,
        }
    }

    /// Renders the request as `search.list` query parameters.
    pub(crate) fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("part", "snippet".to_string()),
            ("type", self.search_type.as_str().to_string()),
            (
                "maxResults",
                self.max_results.min(MAX_SEARCH_RESULTS).to_string(),
            ),
        ];
        if let Some(query) = self.query {
            params.push(("q", query.to_string()));
        }
        if let Some(channel_id) = self.channel_id {
            params.push(("channelId", channel_id.to_string()));
        }
        if let Some(event_type) = self.event_type {
            params.push(("eventType", event_type.as_str().to_string()));
        }
        if self.order != SearchOrder::Relevance {
            params.push(("order", self.order.as_str().to_string()));
        }
        params
    }
}
