//! Three-way result of a recommendation source.

use catalog::Movie;

/// What a recommendation source came back with.
///
/// Unlike a bare `Vec`, this keeps "nothing matched" apart from "the lookup
/// failed", so callers can tell the user which one happened.
#[derive(Debug)]
pub enum Outcome<T> {
    Found(T),
    Empty,
    Failed(anyhow::Error),
}

impl<T> Outcome<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Outcome::Empty)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    /// The found value, discarding the empty/failed distinction
    pub fn found(self) -> Option<T> {
        match self {
            Outcome::Found(value) => Some(value),
            _ => None,
        }
    }
}

impl Outcome<Vec<Movie>> {
    /// `Found` for a non-empty list, `Empty` otherwise
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        if movies.is_empty() {
            Outcome::Empty
        } else {
            Outcome::Found(movies)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_movies() {
        assert!(Outcome::from_movies(Vec::new()).is_empty());
        assert!(Outcome::from_movies(vec![Movie::new(1, "A")]).is_found());
    }

    #[test]
    fn test_failed_has_nothing_found() {
        let failed: Outcome<Vec<Movie>> = Outcome::Failed(anyhow::anyhow!("boom"));
        assert!(failed.is_failed());
        assert!(failed.found().is_none());
    }
}
