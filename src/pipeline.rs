use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use tracing::{error, info, instrument, warn};

use crate::client::VeboClient;
use crate::config::Config;
use crate::playlist;

const DATE_FORMAT: &str = "%Y%m%d";

/// What a single run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// The fixture date that was queried, `YYYYMMDD`.
    pub date: String,
    pub live_matches: usize,
    pub entries: usize,
    /// Where the playlist was written, `None` if writing failed.
    pub path: Option<PathBuf>,
}

/// The calendar date of `now` at `offset_hours` from UTC, formatted `YYYYMMDD`.
pub fn target_date(now: DateTime<Utc>, offset_hours: i32) -> String {
    let offset = offset_hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| {
            warn!(offset_hours, "invalid UTC offset, using UTC");
            Utc.fix()
        });
    now.with_timezone(&offset).format(DATE_FORMAT).to_string()
}

/// Build today's playlist and write it to the configured location.
pub async fn run(client: &VeboClient, config: &Config) -> RunSummary {
    run_at(client, config, Utc::now()).await
}

/// Same as [`run`] with an explicit clock.
#[instrument(skip(client, config))]
pub async fn run_at(client: &VeboClient, config: &Config, now: DateTime<Utc>) -> RunSummary {
    let date = target_date(now, config.utc_offset_hours);
    let matches = client.get_live_matches(&date).await.unwrap_or_default();
    info!(date = %date, count = matches.len(), "live matches");

    let playlist = playlist::generate_playlist(client, &matches).await;
    let path = config.output_path();
    let written = match playlist::write_playlist(&path, &playlist.to_string()).await {
        Ok(()) => {
            info!(path = %path.display(), entries = playlist.len(), "playlist file written");
            Some(path)
        }
        Err(e) => {
            error!(error = %e, "error writing the playlist file");
            None
        }
    };

    RunSummary {
        date,
        live_matches: matches.len(),
        entries: playlist.len(),
        path: written,
    }
}
