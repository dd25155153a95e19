use std::path::PathBuf;

/// All errors that can occur while building the playlist.
#[derive(thiserror::Error, Debug)]
pub enum PlaylistError {
    /// HTTP request failed (network, DNS, TLS, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("HTTP error! Status: {status} for {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The response body was not valid JSON.
    #[error("invalid JSON from {url}: {source}")]
    Json {
        url: String,
        source: serde_json::Error,
    },

    /// The JSON was well-formed but did not have the expected shape.
    #[error("Unexpected data format: {0}")]
    UnexpectedData(String),

    /// Creating the output folder or writing the playlist failed.
    #[error("failed to write playlist to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl PlaylistError {
    /// The numeric HTTP status, if this error came from a non-success response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            PlaylistError::HttpStatus { status, .. } => Some(status.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlaylistError>;
