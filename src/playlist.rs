use std::fmt::{Display, Formatter};
use std::path::Path;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::api::Lookup;
use crate::client::VeboClient;
use crate::error::{PlaylistError, Result};
use crate::model::{Match, PlayUrl};

pub const M3U_HEADER: &str = "#EXTM3U";
const UNKNOWN_COMMENTATOR: &str = "Unknown";

/// An M3U playlist under construction, one entry per stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    entries: Vec<String>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, m: &Match, play_url: &PlayUrl) {
        self.entries.push(format_entry(m, play_url));
    }

    /// Number of stream entries, not counting the header.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Display for Playlist {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{M3U_HEADER}")?;
        for entry in &self.entries {
            write!(f, "\n{entry}")?;
        }
        Ok(())
    }
}

/// Commentator names joined with ` & `, or `Unknown` when there are none.
pub fn commentator_names(m: &Match) -> String {
    if m.commentators.is_empty() {
        return UNKNOWN_COMMENTATOR.to_string();
    }
    m.commentators.iter().map(|c| c.name.as_str()).join(" & ")
}

/// Format the two-line `#EXTINF` entry for one stream of a match.
pub fn format_entry(m: &Match, play_url: &PlayUrl) -> String {
    let title = format!("{} - {}", m.name, play_url.name);
    format!(
        "#EXTINF:-1 tvg-id=\"{id}\" tvg-name=\"{title}\" tvg-logo=\"{logo}\" group-title=\"{group}\",{title} - {commentators}\n{url}",
        id = m.id,
        logo = m.tournament.logo,
        group = m.tournament.name,
        commentators = commentator_names(m),
        url = play_url.url,
    )
}

/// Build the playlist for `matches`, resolving each match's streams in turn.
///
/// Matches whose streams cannot be resolved contribute nothing.
#[instrument(skip_all, fields(matches = matches.len()))]
pub async fn generate_playlist(client: &VeboClient, matches: &[Match]) -> Playlist {
    let mut playlist = Playlist::new();
    for m in matches {
        match client.get_play_urls(&m.id).await {
            Lookup::Found(play_urls) => {
                for play_url in &play_urls {
                    playlist.push(m, play_url);
                }
            }
            Lookup::Unavailable => debug!(match_id = %m.id, "skipping match without streams"),
        }
    }
    playlist
}

/// Write `content` to `path`, creating the parent folder and replacing any previous file.
pub async fn write_playlist(path: &Path, content: &str) -> Result<()> {
    let io_error = |source| PlaylistError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
    }
    tokio::fs::write(path, content).await.map_err(io_error)
}
