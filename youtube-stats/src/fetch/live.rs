use crate::error::FetchError;
use crate::records::LiveStreamStatistics;
use crate::youtube_api::YouTubeClient;
use crate::youtube_api::search::{BroadcastEventType, SearchRequest, SearchResult};
use crate::youtube_api::types::parse_count;
use tracing::instrument;

/// Broadcast states to look for, most preferred first.
///
/// A finished broadcast has settled engagement numbers, so it wins over one that just started.
const LOOKUP_ORDER: [BroadcastEventType; 2] =
    [BroadcastEventType::Completed, BroadcastEventType::Live];

/// Fetches engagement statistics for the latest broadcast of `channel_id`.
///
/// The most recent completed broadcast is preferred. Only if the channel has none is the
/// currently live broadcast used instead. `Ok(None)` means the channel has neither (or
/// `channel_id` was blank, in which case no request is made).
///
/// This costs two or three requests: one or two searches, then a `videos.list` for the match.
#[instrument(skip(client))]
pub async fn get_latest_live_stream_stats(
    client: &YouTubeClient,
    channel_id: &str,
) -> Result<Option<LiveStreamStatistics>, FetchError> {
    let channel_id = channel_id.trim();
    if channel_id.is_empty() {
        return Ok(None);
    }

    latest_live_stream(client, channel_id)
        .await
        .inspect_err(|e| super::log_failure("get latest live stream statistics", e))
}

async fn latest_live_stream(
    client: &YouTubeClient,
    channel_id: &str,
) -> Result<Option<LiveStreamStatistics>, FetchError> {
    let Some((broadcast, result, video_id)) = find_latest_broadcast(client, channel_id).await?
    else {
        tracing::debug!(channel_id, "channel has no completed or live broadcast");
        return Ok(None);
    };

    let video = client.get_video_statistics(&video_id).await?;
    let stats = video.statistics;
    let details = video.live_streaming_details.unwrap_or_default();
    let snippet = result.snippet;

    Ok(Some(LiveStreamStatistics {
        views: parse_count("viewCount", stats.view_count.as_deref()),
        likes: parse_count("likeCount", stats.like_count.as_deref()),
        comments: parse_count("commentCount", stats.comment_count.as_deref()),
        thumbnail_url: snippet.thumbnails.high_url(),
        title: snippet.title,
        published_at: snippet.published_at,
        video_id,
        broadcast,
        actual_start_time: details.actual_start_time,
        actual_end_time: details.actual_end_time,
        concurrent_viewers: details
            .concurrent_viewers
            .as_deref()
            .and_then(|v| v.parse().ok()),
    }))
}

/// Runs the searches in [`LOOKUP_ORDER`], stopping at the first one that returns a video.
async fn find_latest_broadcast(
    client: &YouTubeClient,
    channel_id: &str,
) -> Result<Option<(BroadcastEventType, SearchResult, String)>, FetchError> {
    for event_type in LOOKUP_ORDER {
        let response = client
            .search(&SearchRequest::latest_broadcast(channel_id, event_type))
            .await?;

        for mut result in response.items {
            if let Some(video_id) = result.id.video_id.take() {
                tracing::debug!(
                    channel_id,
                    %event_type,
                    video_id = %video_id,
                    title = %result.snippet.title,
                    "found latest broadcast"
                );
                return Ok(Some((event_type, result, video_id)));
            }
        }

        tracing::trace!(channel_id, %event_type, "no broadcast in this state");
    }
    Ok(None)
}
