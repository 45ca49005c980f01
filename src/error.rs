use thiserror::Error;

/// Everything that can go wrong while talking to the API.
///
/// A detail lookup answering 404 gets its own variant so the caller can
/// tell "no such Pokémon" apart from a broken server; every other
/// non-success status stays in `Http`.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Http {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("no pokemon named {0:?}")]
    NotFound(String),

    #[error("malformed response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("roster task failed: {0}")]
    Task(String),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound(_))
    }
}
