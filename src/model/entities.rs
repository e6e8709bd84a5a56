use std::{fmt::Display, ops::Deref};

/// The identifier of a movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieId(pub String);

impl Deref for MovieId {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The popularity rank of a movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRank(pub u32);

impl Deref for MovieRank {
    type Target = u32;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for MovieRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The title of a movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieTitle(pub String);

impl Deref for MovieTitle {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for MovieTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The release year of a movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseYear(pub String);

impl Deref for ReleaseYear {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ReleaseYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata of a movie from the popular movies listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    /// The identifier of the movie.
    movie_id: MovieId,

    /// The popularity rank of the movie.
    rank: MovieRank,

    /// The title of the movie.
    title: MovieTitle,

    /// The release year of the movie.
    year: ReleaseYear,
}

impl Movie {
    /// Creates a new `Movie` instance.
    pub fn new(movie_id: &str, rank: u32, title: &str, year: &str) -> Self {
        Self {
            movie_id: MovieId(movie_id.to_string()),
            rank: MovieRank(rank),
            title: MovieTitle(title.to_string()),
            year: ReleaseYear(year.to_string()),
        }
    }

    /// Retrieves the movie identifier.
    pub fn movie_id(&self) -> &MovieId {
        &self.movie_id
    }

    /// Retrieves the popularity rank.
    pub fn rank(&self) -> &MovieRank {
        &self.rank
    }

    /// Retrieves the title.
    pub fn title(&self) -> &MovieTitle {
        &self.title
    }

    /// Retrieves the release year.
    pub fn year(&self) -> &ReleaseYear {
        &self.year
    }
}

impl Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Movie: {} ({}), Rank: {}, Id: {}",
            self.title, self.year, self.rank, self.movie_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_display_includes_all_fields() {
        let movie = Movie::new("tt0111161", 1, "The Shawshank Redemption", "1994");

        assert_eq!(
            "Movie: The Shawshank Redemption (1994), Rank: 1, Id: tt0111161",
            movie.to_string()
        );
    }

    #[test]
    fn newtypes_deref_to_inner_values() {
        let movie = Movie::new("tt0068646", 2, "The Godfather", "1972");

        assert_eq!("tt0068646", movie.movie_id().as_str());
        assert_eq!(2, **movie.rank());
        assert_eq!("The Godfather", movie.title().as_str());
        assert_eq!("1972", movie.year().as_str());
    }
}
