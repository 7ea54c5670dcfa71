//! Integration tests for the pipeline.
//!
//! These tests verify that ranking, filters and deduplication work together
//! the way the recommendation flows chain them.

use catalog::{CatalogError, Movie};
use pipeline::filters::*;
use pipeline::{ContentRanker, FilterPipeline, dedup_by_title, sort_by_rating_desc};

fn sample() -> Vec<Movie> {
    vec![
        Movie::new(1, "Halloween").with_genres(["Horror", "Thriller"]).with_rating(7.5),
        Movie::new(2, "Scream").with_genres(["Horror", "Mystery"]).with_rating(7.4),
        Movie::new(3, "Halloween").with_genres(["Horror", "Thriller"]).with_rating(5.5),
        Movie::new(4, "Hereditary").with_genres(["Horror", "Mystery", "Drama"]),
        Movie::new(5, "It Follows").with_genres(["Horror", "Thriller"]).with_rating(6.8),
        Movie::new(6, "The Shining").with_genres(["Horror", "Thriller"]).with_rating(8.2),
        Movie::new(7, "Get Out").with_genres(["Horror", "Mystery", "Thriller"]).with_rating(7.6),
        Movie::new(8, "Nope").with_genres(["Horror", "Science Fiction"]),
    ]
}

#[test]
fn test_rank_then_dedup() {
    let ranked = ContentRanker::new().rank(&sample(), "It Follows").unwrap();
    assert!(ranked.len() <= 5);
    assert!(ranked.iter().all(|m| m.title != "It Follows"));

    let unique = dedup_by_title(ranked);
    let mut titles: Vec<&str> = unique.iter().map(|m| m.title.as_str()).collect();
    let before = titles.len();
    titles.sort();
    titles.dedup();
    assert_eq!(titles.len(), before);
}

#[test]
fn test_rank_is_ordered_by_score() {
    let scored = ContentRanker::new().rank_scored(&sample(), "Scream").unwrap();
    assert!(scored.windows(2).all(|w| w[0].score >= w[1].score));
    assert_eq!(scored[0].movie.title, "Get Out");
}

#[test]
fn test_rank_without_genres_errors() {
    let bare: Vec<Movie> = sample()
        .into_iter()
        .map(|m| Movie::new(m.id, m.title))
        .collect();
    assert_eq!(
        ContentRanker::new().rank(&bare, "Scream").unwrap_err(),
        CatalogError::NoGenres
    );
}

#[test]
fn test_company_style_pipeline() {
    let pipeline = FilterPipeline::new()
        .add_filter(ExcludeMovieFilter::new(6))
        .add_filter(MetadataFilter::new(MetadataRequirement::GenresAndRating))
        .add_filter(DuplicateTitleFilter);

    let kept = pipeline.apply(sample()).unwrap();
    let ids: Vec<u64> = kept.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 5, 7]);
}

#[test]
fn test_same_genre_fallback_ordering() {
    let mut kept = FilterPipeline::new()
        .add_filter(GenreFilter::new("thriller"))
        .apply(sample())
        .unwrap();
    sort_by_rating_desc(&mut kept);

    let ids: Vec<u64> = kept.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![6, 7, 1, 5, 3]);
}
