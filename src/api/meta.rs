use tracing::{debug, error, instrument};

use crate::api::{self, Lookup};
use crate::error::{PlaylistError, Result};
use crate::model::{MatchMeta, PlayUrl};

/// Resolve the HD/FullHD stream urls of a match.
///
/// [`Lookup::Unavailable`] means the match should be skipped.
#[instrument(skip(client))]
pub(crate) async fn get_play_urls(
    client: &reqwest::Client,
    base_url: &str,
    match_id: &str,
) -> Lookup<Vec<PlayUrl>> {
    match fetch_play_urls(client, base_url, match_id).await {
        Ok(urls) => {
            debug!(count = urls.len(), match_id, "resolved HD play urls");
            Lookup::Found(urls)
        }
        Err(e) => {
            error!(error = %e, match_id, "error fetching meta data");
            Lookup::Unavailable
        }
    }
}

async fn fetch_play_urls(
    client: &reqwest::Client,
    base_url: &str,
    match_id: &str,
) -> Result<Vec<PlayUrl>> {
    let url = format!("{base_url}/match/{match_id}/meta");
    let data = api::take_data(api::get_json(client, &url).await?);
    if data.is_null() {
        return Err(PlaylistError::UnexpectedData(format!(
            "No meta data found for match ID {match_id}"
        )));
    }

    let meta: MatchMeta = serde_json::from_value(data).map_err(|e| {
        PlaylistError::UnexpectedData(format!("Invalid meta data for match ID {match_id}: {e}"))
    })?;
    Ok(filter_hd(meta.play_urls))
}

fn filter_hd(play_urls: Vec<PlayUrl>) -> Vec<PlayUrl> {
    play_urls.into_iter().filter(PlayUrl::is_hd).collect()
}
