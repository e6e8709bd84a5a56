use crate::{MovieListResponse, StdResult};

/// A trait for fetching movie data from the remote API.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieFetcher: Sync + Send {
    /// Fetches the most popular movies from the API.
    async fn get_most_popular_movies(&self) -> StdResult<MovieListResponse>;
}
