pub(crate) mod fixture;
pub(crate) mod meta;

use serde_json::Value;
use tracing::debug;

use crate::error::{PlaylistError, Result};

/// Outcome of a best-effort upstream lookup.
///
/// Lookups log their own failures and degrade to [`Lookup::Unavailable`], so
/// callers can tell "nothing there" (`Found` with an empty list) apart from
/// "could not ask".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    Unavailable,
}

impl<T> Lookup<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Unavailable => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Lookup::Unavailable)
    }
}

impl<T: Default> Lookup<T> {
    pub fn unwrap_or_default(self) -> T {
        self.found().unwrap_or_default()
    }
}

/// Fetch a URL and parse the response body as JSON.
pub(crate) async fn get_json(client: &reqwest::Client, url: &str) -> Result<Value> {
    debug!(url, "fetching");

    let response = client.get(url).send().await.map_err(|e| PlaylistError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(PlaylistError::HttpStatus {
            url: url.to_owned(),
            status,
        });
    }

    let body = response.text().await.map_err(|e| PlaylistError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })?;

    serde_json::from_str(&body).map_err(|e| PlaylistError::Json {
        url: url.to_owned(),
        source: e,
    })
}

/// Take the top-level `data` field out of a response envelope, `Null` if absent.
pub(crate) fn take_data(mut body: Value) -> Value {
    body.get_mut("data").map(Value::take).unwrap_or(Value::Null)
}
