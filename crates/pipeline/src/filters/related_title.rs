//! Filter to find sequels, prequels and other entries of a franchise.

use crate::traits::Filter;
use anyhow::Result;
use catalog::{Movie, MovieId};

/// Keeps movies whose title contains the source movie's title
/// (case-insensitive), excluding the source movie itself.
pub struct RelatedTitleFilter {
    source_id: MovieId,
    title_lower: String,
}

impl RelatedTitleFilter {
    pub fn new(source: &Movie) -> Self {
        Self {
            source_id: source.id,
            title_lower: source.title.to_lowercase(),
        }
    }
}

impl Filter for RelatedTitleFilter {
    fn name(&self) -> &str {
        "RelatedTitleFilter"
    }

    fn apply(&self, movies: Vec<Movie>) -> Result<Vec<Movie>> {
        Ok(movies
            .into_iter()
            .filter(|m| m.id != self.source_id)
            .filter(|m| m.title.to_lowercase().contains(&self.title_lower))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_related_titles() {
        let source = Movie::new(1, "Toy Story");
        let movies = vec![
            Movie::new(1, "Toy Story"),
            Movie::new(2, "Toy Story 2"),
            Movie::new(3, "Story of a Toy"),
            Movie::new(4, "TOY STORY THAT TIME FORGOT"),
        ];

        let kept = RelatedTitleFilter::new(&source).apply(movies).unwrap();
        let ids: Vec<u64> = kept.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }
}
