use crate::error::FetchError;
use crate::records::ChannelStatistics;
use crate::youtube_api::YouTubeClient;
use crate::youtube_api::types::parse_count;
use std::collections::HashSet;
use tracing::instrument;

/// Fetches subscriber, view, and video counts for a set of channels.
///
/// All channels are requested in a single batched `channels.list` call. Blank IDs are dropped
/// and repeated IDs are only requested once; if nothing is left, no request is made.
///
/// The returned records follow YouTube's response order, not the order of `channel_ids`, and
/// channels YouTube does not recognize are silently absent. Use
/// [`ChannelStatistics::channel_id`] to match records back to inputs. Counters YouTube does
/// not report (for example a hidden subscriber count) read as zero.
#[instrument(skip(client, channel_ids), fields(requested = channel_ids.len()))]
pub async fn get_channel_statistics<S: AsRef<str>>(
    client: &YouTubeClient,
    channel_ids: &[S],
) -> Result<Vec<ChannelStatistics>, FetchError> {
    let mut seen = HashSet::new();
    let ids: Vec<&str> = channel_ids
        .iter()
        .map(|id| id.as_ref().trim())
        .filter(|id| !id.is_empty() && seen.insert(*id))
        .collect();
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let response = client
        .list_channels(&ids)
        .await
        .inspect_err(|e| super::log_failure("get channel statistics", e))?;

    if response.items.len() < ids.len() {
        tracing::debug!(
            requested = ids.len(),
            returned = response.items.len(),
            "some channel ids were not recognized"
        );
    }

    Ok(response
        .items
        .into_iter()
        .map(|channel| {
            let stats = channel.statistics;
            ChannelStatistics {
                subscribers: parse_count("subscriberCount", stats.subscriber_count.as_deref()),
                total_views: parse_count("viewCount", stats.view_count.as_deref()),
                video_count: parse_count("videoCount", stats.video_count.as_deref()),
                thumbnail_url: channel.snippet.thumbnails.default_url(),
                channel_name: channel.snippet.title,
                channel_id: channel.id,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::test_support::{capture_warnings, mock_client};
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const BBC_NEWS: &str = "UC16niRr50-MSBwiO3YDb3RA";
    const CNN: &str = "UCupvZG-5ko_eiXAupbDfxWw";

    fn channel_list(items: serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "kind": "youtube#channelListResponse",
            "pageInfo": { "totalResults": 1, "resultsPerPage": 5 },
            "items": items
        }))
    }

    fn bbc_news(statistics: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "kind": "youtube#channel",
            "id": BBC_NEWS,
            "snippet": {
                "title": "BBC News",
                "description": "Welcome to BBC News",
                "thumbnails": { "default": { "url": "x" } }
            },
            "statistics": statistics
        })
    }

    #[tokio::test]
    async fn test_empty_ids_make_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let none: &[&str] = &[];
        assert!(get_channel_statistics(&client, none).await.unwrap().is_empty());
        assert!(
            get_channel_statistics(&client, &["", "  "])
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_counts_are_parsed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/youtube/v3/channels"))
            .and(query_param("part", "snippet,statistics"))
            .and(query_param("id", BBC_NEWS))
            .respond_with(channel_list(serde_json::json!([bbc_news(serde_json::json!({
                "subscriberCount": "100",
                "viewCount": "200",
                "videoCount": "3",
                "hiddenSubscriberCount": false
            }))])))
            .expect(1)
            .mount(&server)
            .await;

        let stats = get_channel_statistics(&mock_client(&server), &[BBC_NEWS])
            .await
            .unwrap();
        assert_eq!(
            stats,
            vec![ChannelStatistics {
                channel_id: BBC_NEWS.to_string(),
                channel_name: "BBC News".to_string(),
                subscribers: 100,
                total_views: 200,
                video_count: 3,
                thumbnail_url: "x".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_missing_counts_default_to_zero() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/youtube/v3/channels"))
            .respond_with(channel_list(serde_json::json!([bbc_news(
                serde_json::json!({})
            )])))
            .mount(&server)
            .await;

        let stats = get_channel_statistics(&mock_client(&server), &[BBC_NEWS])
            .await
            .unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].subscribers, 0);
        assert_eq!(stats[0].total_views, 0);
        assert_eq!(stats[0].video_count, 0);
    }

    #[tokio::test]
    async fn test_ids_are_batched_and_unknown_ids_dropped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/youtube/v3/channels"))
            .and(query_param("id", format!("{BBC_NEWS},UCdoesnotexist")))
            .respond_with(channel_list(serde_json::json!([bbc_news(serde_json::json!({
                "subscriberCount": "15000000",
                "viewCount": "5000000000",
                "videoCount": "17000"
            }))])))
            .expect(1)
            .mount(&server)
            .await;

        let ids = vec![
            BBC_NEWS.to_string(),
            "UCdoesnotexist".to_string(),
            BBC_NEWS.to_string(),
        ];
        let stats = get_channel_statistics(&mock_client(&server), &ids)
            .await
            .unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].channel_id, BBC_NEWS);
        assert_eq!(stats[0].total_views, 5_000_000_000);
    }

    #[tokio::test]
    async fn test_response_order_is_kept() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/youtube/v3/channels"))
            .and(query_param("id", format!("{BBC_NEWS},{CNN}")))
            .respond_with(channel_list(serde_json::json!([
                {
                    "id": CNN,
                    "snippet": { "title": "CNN", "thumbnails": { "default": { "url": "y" } } },
                    "statistics": { "subscriberCount": "1" }
                },
                bbc_news(serde_json::json!({ "subscriberCount": "2" })),
            ])))
            .mount(&server)
            .await;

        let stats = get_channel_statistics(&mock_client(&server), &[BBC_NEWS, CNN])
            .await
            .unwrap();
        let names: Vec<_> = stats.iter().map(|s| s.channel_name.as_str()).collect();
        assert_eq!(names, ["CNN", "BBC News"]);
    }

    #[tokio::test]
    async fn test_failure_is_reported_and_logged_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/youtube/v3/channels"))
            .respond_with(ResponseTemplate::new(500).set_body_string("backend error"))
            .expect(1)
            .mount(&server)
            .await;

        let (logs, _guard) = capture_warnings();
        let e = get_channel_statistics(&mock_client(&server), &[BBC_NEWS])
            .await
            .unwrap_err();

        assert_eq!(e.kind(), ErrorKind::Transport);
        assert_eq!(logs.count("YouTube API request failed"), 1);
    }
}
