//! Ordering helpers for recommendation lists.

use std::cmp::Ordering;

use catalog::Movie;

/// Sort by rating, highest first. Unrated movies sink to the bottom; equal
/// ratings keep their input order.
pub fn sort_by_rating_desc(movies: &mut [Movie]) {
    movies.sort_by(|a, b| match (a.rating, b.rating) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrated_movies_sort_last() {
        let mut movies = vec![
            Movie::new(1, "Unrated"),
            Movie::new(2, "Okay").with_rating(6.0),
            Movie::new(3, "Great").with_rating(8.5),
            Movie::new(4, "Also okay").with_rating(6.0),
        ];

        sort_by_rating_desc(&mut movies);
        let ids: Vec<u64> = movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 2, 4, 1]);
    }
}
