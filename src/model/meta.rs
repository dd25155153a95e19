use serde::Deserialize;

/// The `data` object of the per-match metadata endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchMeta {
    #[serde(default)]
    pub id: Option<String>,
    pub play_urls: Vec<PlayUrl>,
}

/// One stream variant of a match, labelled with its quality (e.g. "HD", "FullHD", "SD").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayUrl {
    pub name: String,
    pub url: String,
}

impl PlayUrl {
    /// Whether the label marks a high-definition stream. Case-sensitive.
    pub fn is_hd(&self) -> bool {
        self.name.contains("HD") || self.name.contains("FullHD")
    }
}
