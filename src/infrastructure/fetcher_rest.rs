#![allow(non_snake_case)]

use anyhow::Context;
use log::error;
use serde::Deserialize;
use thiserror::Error;

use crate::{Movie, MovieFetcher, MovieListResponse, StdResult};

/// The REST production endpoint for the IMDb API.
pub const IMDB_API_ENDPOINT: &str = "https://imdb-api.com/en/API";

/// Fetcher error
#[derive(Error, Debug)]
pub enum FetcherError {
    /// Parse error
    #[error("Parsing error: {0}")]
    Parse(String),

    /// Remote error
    #[error("Remote error: {0}")]
    Remote(String),

    /// Error reported by the API in an otherwise well-formed response
    #[error("API error: {0}")]
    Api(String),
}

#[derive(Deserialize, Debug)]
struct MostPopularMoviesPayload {
    #[serde(default)]
    items: Vec<MovieItem>,
    errorMessage: Option<String>,
}

#[derive(Deserialize, Debug)]
struct MovieItem {
    id: String,
    rank: String,
    title: String,
    year: String,
}

impl TryFrom<MovieItem> for Movie {
    type Error = FetcherError;

    fn try_from(item: MovieItem) -> Result<Self, Self::Error> {
        let rank = item.rank.parse::<u32>().map_err(|e| {
            FetcherError::Parse(format!(
                "Invalid rank '{}' for movie '{}': {e}",
                item.rank, item.id
            ))
        })?;

        Ok(Movie::new(&item.id, rank, &item.title, &item.year))
    }
}

/// Fetches movie data from a REST API.
pub struct RestFetcher {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl RestFetcher {
    /// Creates a new `RestFetcher` instance for the given endpoint.
    pub fn try_new(endpoint: &str) -> StdResult<Self> {
        let api_key = std::env::var("IMDB_API_KEY")
            .with_context(|| "Missing IMDB_API_KEY environment variable")?;
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

#[async_trait::async_trait]
impl MovieFetcher for RestFetcher {
    async fn get_most_popular_movies(&self) -> StdResult<MovieListResponse> {
        let url = format!("{}/MostPopularMovies/{}", self.endpoint, self.api_key);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetcherError::Remote(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetcherError::Remote(format!("Unexpected status code: {status}")).into());
        }

        let payload = response
            .json::<MostPopularMoviesPayload>()
            .await
            .map_err(|e| FetcherError::Parse(e.to_string()))?;
        // The API signals quota and key failures with a 200 status and a
        // non-empty error message.
        if let Some(message) = payload.errorMessage.filter(|message| !message.is_empty()) {
            error!("API returned an error message: {message}");
            return Err(FetcherError::Api(message).into());
        }

        let items = payload
            .items
            .into_iter()
            .map(Movie::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MovieListResponse::new(items))
    }
}
