use std::sync::Arc;

use futures::{StreamExt, stream::BoxStream, stream};

use crate::{Movie, MovieFetcher, MovieRepository, NetworkResult};

/// The fallback message used when the underlying error has no description.
const UNKNOWN_ERROR_MESSAGE: &str = "Unknown Error";

/// The phase of one fetch, advanced on each poll of the stream.
enum FetchPhase {
    Loading,
    Fetching,
    Done,
}

/// A repository producing popular movies fetch states from a remote data source.
pub struct RemoteMovieRepository {
    /// The remote data source used to fetch the movies.
    fetcher: Arc<dyn MovieFetcher>,
}

impl RemoteMovieRepository {
    /// Creates a new `RemoteMovieRepository` instance with the given fetcher.
    pub fn new(fetcher: Arc<dyn MovieFetcher>) -> Self {
        Self { fetcher }
    }
}

impl MovieRepository for RemoteMovieRepository {
    fn fetch_popular_movies(&self) -> BoxStream<'static, NetworkResult<Vec<Movie>>> {
        let fetcher = self.fetcher.clone();
        stream::unfold(FetchPhase::Loading, move |phase| {
            let fetcher = fetcher.clone();
            async move {
                match phase {
                    FetchPhase::Loading => {
                        Some((NetworkResult::Loading(true), FetchPhase::Fetching))
                    }
                    FetchPhase::Fetching => {
                        let state = match fetcher.get_most_popular_movies().await {
                            Ok(response) => NetworkResult::Success(response.into_items()),
                            Err(e) => NetworkResult::Failure(failure_message(&e)),
                        };
                        Some((state, FetchPhase::Done))
                    }
                    FetchPhase::Done => None,
                }
            }
        })
        .boxed()
    }
}

/// Extracts the descriptive text of an error, falling back to a fixed message
/// when the error carries none.
fn failure_message(error: &anyhow::Error) -> String {
    let message = error.to_string();
    if message.is_empty() {
        UNKNOWN_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}
