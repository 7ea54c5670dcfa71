//! Title-based deduplication of recommendation lists.

use std::collections::HashSet;

use catalog::Movie;

/// Remove repeated movies by exact (case-sensitive) title, keeping the first
/// occurrence of each title and the relative order of what is kept.
pub fn dedup_by_title(movies: Vec<Movie>) -> Vec<Movie> {
    let mut seen: HashSet<String> = HashSet::new();
    movies
        .into_iter()
        .filter(|movie| seen.insert(movie.title.clone()))
        .collect()
}
