//! The retrieval layer: each function issues the API calls for one user action and flattens
//! the responses into [`crate::records`].
//!
//! Every function short-circuits to an empty result, without touching the network, when its
//! input is empty. A failed call is logged once, here at the boundary, and then returned to
//! the caller as a [`FetchError`]; callers decide whether and how to surface it.

use crate::error::FetchError;

mod channels;
mod live;
mod search;

pub use channels::get_channel_statistics;
pub use live::get_latest_live_stream_stats;
pub use search::{DEFAULT_SEARCH_RESULTS, search_channels};

fn log_failure(operation: &'static str, error: &FetchError) {
    tracing::warn!(
        operation,
        kind = ?error.kind(),
        status = error.status().map(|s| s.as_u16()),
        error = %error,
        "YouTube API request failed"
    );
}
