//! Flat records handed to the presentation layer.
//!
//! These are the normalized forms of the API documents in [`crate::youtube_api`]. They are
//! created fresh for every request and never persisted.

use crate::youtube_api::search::BroadcastEventType;
use jiff::Timestamp;
use serde::Serialize;
use std::fmt;

/// A channel that matched a free-text search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "thumbnail")]
    pub thumbnail_url: String,
}

/// Headline numbers for one channel.
///
/// Serializes with the column names of the channel comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelStatistics {
    #[serde(rename = "Channel ID")]
    pub channel_id: String,
    #[serde(rename = "Channel Name")]
    pub channel_name: String,
    #[serde(rename = "Subscribers")]
    pub subscribers: u64,
    #[serde(rename = "Total Views")]
    pub total_views: u64,
    #[serde(rename = "Video Count")]
    pub video_count: u64,
    #[serde(rename = "Thumbnail")]
    pub thumbnail_url: String,
}

/// Engagement numbers for a channel's latest broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStreamStatistics {
    pub video_id: String,
    pub title: String,
    /// When the broadcast's video was created on YouTube.
    pub published_at: Timestamp,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    #[serde(rename = "thumbnail")]
    pub thumbnail_url: String,
    /// Which lookup found the broadcast: [`BroadcastEventType::Completed`] unless the channel
    /// had no finished broadcast and one was live at the time.
    pub broadcast: BroadcastEventType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_start_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_end_time: Option<Timestamp>,
    /// Only known while the broadcast is live.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrent_viewers: Option<u64>,
}

/// Column headers of the channel comparison table, in display order.
pub const CHANNEL_TABLE_COLUMNS: [&str; 5] = [
    "Channel Name",
    "Subscribers",
    "Total Views",
    "Video Count",
    "Thumbnail",
];

/// The channel comparison table: one row per channel, in the order YouTube returned them.
///
/// Besides the rows themselves, the table exposes each numeric column as a series keyed by
/// channel name, which is exactly what a bar chart of that column needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChannelTable {
    rows: Vec<ChannelStatistics>,
}

impl ChannelTable {
    pub fn new(rows: Vec<ChannelStatistics>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ChannelStatistics] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &CHANNEL_TABLE_COLUMNS
    }

    pub fn subscribers(&self) -> Vec<(&str, u64)> {
        self.series(|row| row.subscribers)
    }

    pub fn total_views(&self) -> Vec<(&str, u64)> {
        self.series(|row| row.total_views)
    }

    pub fn video_count(&self) -> Vec<(&str, u64)> {
        self.series(|row| row.video_count)
    }

    fn series(&self, value: impl Fn(&ChannelStatistics) -> u64) -> Vec<(&str, u64)> {
        self.rows
            .iter()
            .map(|row| (row.channel_name.as_str(), value(row)))
            .collect()
    }

    fn cells(row: &ChannelStatistics) -> [String; 5] {
        [
            row.channel_name.clone(),
            row.subscribers.to_string(),
            row.total_views.to_string(),
            row.video_count.to_string(),
            row.thumbnail_url.clone(),
        ]
    }
}

impl From<Vec<ChannelStatistics>> for ChannelTable {
    fn from(rows: Vec<ChannelStatistics>) -> Self {
        Self::new(rows)
    }
}

/// Renders the table as aligned plain text: names and thumbnails left-aligned, numbers
/// right-aligned.
impl fmt::Display for ChannelTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<[String; 5]> = self.rows.iter().map(Self::cells).collect();

        let mut widths = CHANNEL_TABLE_COLUMNS.map(|c| c.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let write_line = |f: &mut fmt::Formatter<'_>, cells: [&str; 5]| -> fmt::Result {
            for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
                if i > 0 {
                    f.write_str("  ")?;
                }
                let numeric = (1..=3).contains(&i);
                if numeric {
                    write!(f, "{cell:>width$}")?;
                } else if i == cells.len() - 1 {
                    // no trailing padding on the last column
                    f.write_str(cell)?;
                } else {
                    write!(f, "{cell:<width$}")?;
                }
            }
            writeln!(f)
        };

        write_line(f, CHANNEL_TABLE_COLUMNS)?;
        for row in &rows {
            write_line(f, row.each_ref().map(String::as_str))?;
        }
        Ok(())
    }
}
