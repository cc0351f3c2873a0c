//! Shared types for the YouTube API resource models.

use serde::{Deserialize, Serialize};

/// Paging details for lists of resources.
///
/// Includes the total number of items available and the number of resources
/// returned in a single page response.
///
/// See: <https://developers.google.com/youtube/v3/docs/pageInfo>
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PageInfo {
    /// The total number of results in the result set.
    ///
    /// For searches this is an approximation and may exceed what the API will actually return.
    #[serde(rename = "totalResults", default)]
    pub total_results: u32,
    /// The number of results included in the API response.
    #[serde(rename = "resultsPerPage", default)]
    pub results_per_page: u32,
}

/// A single thumbnail image.
///
/// See: <https://developers.google.com/youtube/v3/docs/thumbnails>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thumbnail {
    /// The image's URL.
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// The set of thumbnail images associated with a resource.
///
/// Every key is optional: YouTube omits sizes it has not generated, and channels in particular
/// never carry `standard` or `maxres`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Thumbnails {
    /// 120x90 for videos, 88x88 for channels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Thumbnail>,
    /// 320x180 for videos, 240x240 for channels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<Thumbnail>,
    /// 480x360 for videos, 800x800 for channels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<Thumbnail>,
}

impl Thumbnails {
    /// URL of the `default` thumbnail, or an empty string if YouTube did not provide one.
    pub fn default_url(&self) -> String {
        self.default
            .as_ref()
            .map(|t| t.url.clone())
            .unwrap_or_default()
    }

    /// URL of the `high` thumbnail, or an empty string if YouTube did not provide one.
    pub fn high_url(&self) -> String {
        self.high
            .as_ref()
            .map(|t| t.url.clone())
            .unwrap_or_default()
    }
}

/// Parses one of YouTube's string-encoded counters (`"12345"`).
///
/// Counters that are missing, hidden by the owner, or not a valid number all read as zero.
pub(crate) fn parse_count(field: &'static str, value: Option<&str>) -> u64 {
    let Some(value) = value else {
        return 0;
    };
    match value.parse::<u64>() {
        Ok(n) => n,
        Err(e) => {
            tracing::debug!(field, value, error = %e, "treating unparsable counter as zero");
            0
        }
    }
}
