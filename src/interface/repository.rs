use futures::stream::BoxStream;

use crate::{Movie, NetworkResult};

/// A trait for retrieving the most popular movies as a sequence of fetch states.
#[cfg_attr(test, mockall::automock)]
pub trait MovieRepository: Sync + Send {
    /// Returns a cold stream of fetch states: one `Loading(true)` followed by
    /// one terminal `Success` or `Failure`.
    ///
    /// No work happens until the stream is polled, and each call produces a
    /// fresh stream backed by a new remote call.
    fn fetch_popular_movies(&self) -> BoxStream<'static, NetworkResult<Vec<Movie>>>;
}
