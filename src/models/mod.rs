use serde::{Deserialize, Serialize};

/// A single row of the movie table, resolved by positional index.
///
/// The index is assigned at load time and stable for the process lifetime.
/// `movie_id` is the external identifier understood by the metadata service
/// and is distinct from the row index; it is `None` when the artifact was
/// produced without that column.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub index: usize,
    pub movie_id: Option<i64>,
    pub title: String,
}

/// One recommendation slot: a title plus a display-ready poster URL
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendedMovie {
    pub title: String,
    pub poster_url: String,
}

/// Ordered recommendation results for a queried movie, most similar first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendations {
    /// The title the recommendations were computed for
    pub movie: String,
    /// Up to five entries, descending similarity, the queried movie excluded
    pub results: Vec<RecommendedMovie>,
}
