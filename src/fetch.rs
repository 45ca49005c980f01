use tracing::{debug, warn};

use crate::error::FetchError;
use crate::models::{Pokemon, PokemonIndex, PokemonRow};

pub const API_BASE: &str = "https://pokeapi.co/api/v2";

/// One roster entry: either the projected row or why it failed to load.
pub type RosterRow = Result<PokemonRow, FetchError>;

/// Thin client over the upstream API. The base URL is swappable so tests
/// can point it at a local server.
#[derive(Clone)]
pub struct PokeClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for PokeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PokeClient {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the first page of the roster and project every entry into a
    /// list row.
    ///
    /// The index request is fetched once; each summary then gets its own
    /// concurrent detail request. Rows come back in index order no matter
    /// which detail request finishes first, and a failing detail request
    /// fails only its own row. An index failure fails the whole call.
    pub async fn list_roster(&self, page_size: usize) -> Result<Vec<RosterRow>, FetchError> {
        let url = format!("{}/pokemon?limit={}", self.base_url, page_size);
        let index: PokemonIndex = self.get_json(&url).await?;
        debug!(count = index.results.len(), "roster index loaded");

        let mut handles = Vec::with_capacity(index.results.len());
        for summary in &index.results {
            let client = self.clone();
            let name = summary.name.clone();
            handles.push(tokio::spawn(
                async move { client.fetch_pokemon(&name).await },
            ));
        }

        // Awaiting the handles in spawn order reassembles the rows by
        // original index position, not completion order.
        let mut rows = Vec::with_capacity(handles.len());
        for (summary, handle) in index.results.iter().zip(handles) {
            match handle.await {
                Ok(Ok(record)) => rows.push(Ok(PokemonRow::from_record(&summary.name, &record))),
                Ok(Err(err)) => {
                    warn!(name = %summary.name, error = %err, "roster row failed");
                    rows.push(Err(err));
                }
                Err(err) => return Err(FetchError::Task(err.to_string())),
            }
        }
        Ok(rows)
    }

    /// Fetch the full record for one Pokémon. The name is lower-cased so
    /// lookups are case-insensitive; a 404 means the name is unknown.
    pub async fn fetch_pokemon(&self, name: &str) -> Result<Pokemon, FetchError> {
        let name = name.to_lowercase();
        let url = format!("{}/pokemon/{}", self.base_url, name);
        debug!(%url, "fetching pokemon detail");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Network)?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(name));
        }
        if !response.status().is_success() {
            return Err(FetchError::Http {
                status: response.status(),
                url,
            });
        }
        let bytes = response.bytes().await.map_err(FetchError::Network)?;
        serde_json::from_slice(&bytes).map_err(|source| FetchError::Parse { url, source })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(FetchError::Network)?;
        if !response.status().is_success() {
            return Err(FetchError::Http {
                status: response.status(),
                url: url.to_string(),
            });
        }
        let bytes = response.bytes().await.map_err(FetchError::Network)?;
        serde_json::from_slice(&bytes).map_err(|source| FetchError::Parse {
            url: url.to_string(),
            source,
        })
    }
}
