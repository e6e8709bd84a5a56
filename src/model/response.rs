use super::Movie;

/// A response containing the list of most popular movies.
#[derive(Debug, PartialEq, Eq)]
pub struct MovieListResponse {
    /// Retrieved movies and their metadata
    pub(crate) items: Vec<Movie>,
}

impl MovieListResponse {
    /// Creates a new `MovieListResponse` instance with the given movies.
    pub fn new(items: Vec<Movie>) -> Self {
        Self { items }
    }

    /// Retrieves the list of movies.
    pub fn items(&self) -> &[Movie] {
        &self.items
    }

    /// Consumes the response and returns the list of movies.
    pub fn into_items(self) -> Vec<Movie> {
        self.items
    }
}
