use clap::{Parser, Subcommand};
use eyre::Context;
use std::io::IsTerminal;
use std::time::Duration;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use youtube_stats::config::{API_KEY_ENV, BASE_URL_ENV};
use youtube_stats::youtube_api::client::DEFAULT_BASE_URL;
use youtube_stats::{
    ChannelTable, ClientConfig, DEFAULT_SEARCH_RESULTS, YouTubeClient, create_client_with_config,
    get_channel_statistics, get_latest_live_stream_stats, search_channels,
};

/// Well-known news channels, used when no channels are named on the command line.
const POPULAR_NEWS_CHANNELS: &[(&str, &str)] = &[
    ("BBC News", "UC16niRr50-MSBwiO3YDb3RA"),
    ("CNN", "UCupvZG-5ko_eiXAupbDfxWw"),
    ("Al Jazeera English", "UCUXOv7jJktj19aeA6TAq2wA"),
    ("NDTV", "UCZFMm1Hin_qO758Wl_FRf6A"),
    ("Aaj Tak", "UCt4t-jeY85JegMlZ-E5UWtA"),
    ("Fox News", "UCXIJgqnII2ZOINSWNOGFThg"),
    ("MSNBC", "UCkR-Rgce_5WkHTlpGphrQjA"),
    ("Sky News", "UCoMdktPbSTixAyNGwb-UYkQ"),
    ("NBC News", "UCeY0bbntWzzVIaj2z3QigXg"),
    ("ABC News", "UCBi2mrWuNuyYy4gbM6fU18Q"),
];

/// How many catalog channels `compare` uses by default.
const DEFAULT_COMPARISON: usize = 2;

/// Compare statistics of YouTube channels.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// YouTube Data API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,

    /// Root of the YouTube Data API
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Print results as JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search for channels by name or topic
    Search {
        query: String,
        #[arg(short = 'n', long, default_value_t = DEFAULT_SEARCH_RESULTS)]
        max_results: u32,
    },
    /// Compare subscriber, view, and video counts of channels
    ///
    /// Channels are given as IDs or as names from the built-in catalog. Without any, the
    /// first two catalog channels are compared.
    Compare { channels: Vec<String> },
    /// Show engagement on a channel's latest broadcast
    Live { channel: String },
    /// List the built-in catalog of news channels
    Catalog,
}

/// Maps a catalog name (case-insensitively) to its channel ID; anything else is taken to be
/// an ID already.
fn resolve_channel(name_or_id: &str) -> &str {
    POPULAR_NEWS_CHANNELS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(name_or_id.trim()))
        .map_or(name_or_id, |&(_, id)| id)
}

fn comparison_ids(channels: &[String]) -> Vec<&str> {
    if channels.is_empty() {
        POPULAR_NEWS_CHANNELS
            .iter()
            .take(DEFAULT_COMPARISON)
            .map(|(_, id)| *id)
            .collect()
    } else {
        channels.iter().map(|c| resolve_channel(c)).collect()
    }
}

impl Cli {
    fn client(&self) -> eyre::Result<YouTubeClient> {
        let Some(api_key) = self.api_key.as_deref() else {
            eyre::bail!("no YouTube Data API key: pass --api-key or set {API_KEY_ENV}");
        };
        let config = ClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        };
        create_client_with_config(api_key, &config).context("initialize YouTube client")
    }
}

fn print_json(value: &impl serde::Serialize) -> eyre::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output as JSON")?;
    println!("{json}");
    Ok(())
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Command::Catalog => {
            for (name, id) in POPULAR_NEWS_CHANNELS {
                println!("{name:<20} {id}");
            }
        }
        Command::Search { query, max_results } => {
            let yt = cli.client()?;
            let channels = search_channels(&yt, query, *max_results)
                .await
                .context("search channels")?;
            if cli.json {
                print_json(&channels)?;
            } else if channels.is_empty() {
                eprintln!("No channels found for '{query}'.");
            } else {
                for channel in &channels {
                    println!("{}  {}", channel.id, channel.title);
                }
            }
        }
        Command::Compare { channels } => {
            let yt = cli.client()?;
            let ids = comparison_ids(channels);
            tracing::info!(channels = ?ids, "fetching channel statistics");
            let table = ChannelTable::from(
                get_channel_statistics(&yt, &ids)
                    .await
                    .context("fetch channel statistics")?,
            );
            if cli.json {
                print_json(&table)?;
            } else if table.is_empty() {
                eprintln!("No statistics returned for the selected channels.");
            } else {
                print!("{table}");
            }
        }
        Command::Live { channel } => {
            let yt = cli.client()?;
            let channel_id = resolve_channel(channel);
            let Some(stats) = get_latest_live_stream_stats(&yt, channel_id)
                .await
                .context("fetch latest live stream statistics")?
            else {
                eprintln!("No completed or live broadcast found for channel {channel_id}.");
                return Ok(());
            };
            if cli.json {
                print_json(&stats)?;
            } else {
                println!("{} ({})", stats.title, stats.broadcast);
                println!("  Video:     https://www.youtube.com/watch?v={}", stats.video_id);
                println!("  Published: {}", stats.published_at);
                println!("  Views:     {}", stats.views);
                println!("  Likes:     {}", stats.likes);
                println!("  Comments:  {}", stats.comments);
                if let Some(viewers) = stats.concurrent_viewers {
                    println!("  Watching:  {viewers}");
                }
                println!("  Thumbnail: {}", stats.thumbnail_url);
            }
        }
    }

    Ok(())
}
