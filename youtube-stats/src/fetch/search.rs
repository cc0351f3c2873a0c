use crate::error::FetchError;
use crate::records::ChannelSummary;
use crate::youtube_api::YouTubeClient;
use crate::youtube_api::search::SearchRequest;
use tracing::instrument;

/// How many channels a search returns unless told otherwise.
pub const DEFAULT_SEARCH_RESULTS: u32 = 10;

/// Searches YouTube for channels matching `query`.
///
/// Only the first page of results is fetched, capped at `max_results` (which YouTube limits
/// to 50). Results come back in YouTube's relevance order. An empty or blank `query` returns
/// no channels without making a request.
///
/// On failure, [`FetchError`]'s message carries the HTTP status and YouTube's raw error body,
/// suitable for showing to the user.
#[instrument(skip(client))]
pub async fn search_channels(
    client: &YouTubeClient,
    query: &str,
    max_results: u32,
) -> Result<Vec<ChannelSummary>, FetchError> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let response = client
        .search(&SearchRequest::channels(query, max_results))
        .await
        .inspect_err(|e| super::log_failure("search channels", e))?;

    let channels: Vec<_> = response
        .items
        .into_iter()
        .filter_map(|item| {
            let snippet = item.snippet;
            let id = item.id.channel_id.unwrap_or(snippet.channel_id);
            if id.is_empty() {
                tracing::debug!(kind = %item.id.kind, "skipping search result without channel id");
                return None;
            }
            Some(ChannelSummary {
                id,
                thumbnail_url: snippet.thumbnails.default_url(),
                title: snippet.title,
                description: snippet.description,
            })
        })
        .collect();

    tracing::debug!(matches = channels.len(), "channel search complete");
    Ok(channels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::test_support::{capture_warnings, mock_client};
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn channel_result(id: &str, title: &str) -> serde_json::Value {
        serde_json::json!({
            "kind": "youtube#searchResult",
            "id": { "kind": "youtube#channel", "channelId": id },
            "snippet": {
                "publishedAt": "2010-01-01T00:00:00Z",
                "channelId": id,
                "title": title,
                "description": format!("{title} description"),
                "thumbnails": { "default": { "url": format!("https://yt3.ggpht.com/{id}") } },
                "channelTitle": title,
                "liveBroadcastContent": "none"
            }
        })
    }

    #[tokio::test]
    async fn test_empty_query_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        assert!(search_channels(&client, "", 10).await.unwrap().is_empty());
        assert!(search_channels(&client, "   ", 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_preserves_remote_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/youtube/v3/search"))
            .and(query_param("q", "news"))
            .and(query_param("type", "channel"))
            .and(query_param("part", "snippet"))
            .and(query_param("maxResults", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "kind": "youtube#searchListResponse",
                "pageInfo": { "totalResults": 1000000, "resultsPerPage": 2 },
                "items": [
                    channel_result("UCupvZG-5ko_eiXAupbDfxWw", "CNN"),
                    channel_result("UC16niRr50-MSBwiO3YDb3RA", "BBC News"),
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let channels = search_channels(&mock_client(&server), " news ", 2)
            .await
            .unwrap();
        assert_eq!(
            channels,
            vec![
                ChannelSummary {
                    id: "UCupvZG-5ko_eiXAupbDfxWw".to_string(),
                    title: "CNN".to_string(),
                    description: "CNN description".to_string(),
                    thumbnail_url: "https://yt3.ggpht.com/UCupvZG-5ko_eiXAupbDfxWw".to_string(),
                },
                ChannelSummary {
                    id: "UC16niRr50-MSBwiO3YDb3RA".to_string(),
                    title: "BBC News".to_string(),
                    description: "BBC News description".to_string(),
                    thumbnail_url: "https://yt3.ggpht.com/UC16niRr50-MSBwiO3YDb3RA".to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_search_without_matches() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/youtube/v3/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "kind": "youtube#searchListResponse",
                "pageInfo": { "totalResults": 0, "resultsPerPage": 10 },
                "items": []
            })))
            .mount(&server)
            .await;

        let channels = search_channels(&mock_client(&server), "zzzzqqqq", DEFAULT_SEARCH_RESULTS)
            .await
            .unwrap();
        assert!(channels.is_empty());
    }

    #[tokio::test]
    async fn test_search_failure_is_reported_and_logged_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/youtube/v3/search"))
            .respond_with(
                ResponseTemplate::new(403).set_body_string(r#"{"error":{"code":403,"message":"quotaExceeded"}}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let (logs, _guard) = capture_warnings();
        let e = search_channels(&mock_client(&server), "news", 10)
            .await
            .unwrap_err();

        assert_eq!(e.kind(), ErrorKind::Transport);
        assert_eq!(
            e.to_string(),
            r#"An HTTP error 403 occurred: {"error":{"code":403,"message":"quotaExceeded"}}"#
        );
        assert_eq!(logs.count("YouTube API request failed"), 1);
    }
}
