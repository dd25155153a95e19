use serde_json::Value;
use tracing::{debug, error, instrument, warn};

use crate::api::{self, Lookup};
use crate::error::{PlaylistError, Result};
use crate::model::Match;

/// List the matches live on `date` (`YYYYMMDD`), in upstream order.
///
/// Any failure is logged and reported as [`Lookup::Unavailable`].
#[instrument(skip(client))]
pub(crate) async fn get_live_matches(
    client: &reqwest::Client,
    base_url: &str,
    date: &str,
) -> Lookup<Vec<Match>> {
    match fetch_live_matches(client, base_url, date).await {
        Ok(matches) => {
            debug!(count = matches.len(), date, "found live matches");
            Lookup::Found(matches)
        }
        Err(e) => {
            error!(error = %e, date, "error fetching live match data");
            Lookup::Unavailable
        }
    }
}

async fn fetch_live_matches(
    client: &reqwest::Client,
    base_url: &str,
    date: &str,
) -> Result<Vec<Match>> {
    let url = format!("{base_url}/match/fixture/home/{date}");
    let body = api::get_json(client, &url).await?;
    match api::take_data(body) {
        Value::Array(entries) => Ok(parse_live_matches(entries)),
        other => Err(PlaylistError::UnexpectedData(format!(
            "Response data is not an array: {other}"
        ))),
    }
}

fn parse_live_matches(entries: Vec<Value>) -> Vec<Match> {
    entries
        .into_iter()
        .filter(is_live_entry)
        .filter_map(|entry| match serde_json::from_value::<Match>(entry) {
            Ok(m) => Some(m),
            Err(e) => {
                warn!(error = %e, "skipping undecodable live match");
                None
            }
        })
        .collect()
}

fn is_live_entry(entry: &Value) -> bool {
    entry
        .get("is_live")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}
