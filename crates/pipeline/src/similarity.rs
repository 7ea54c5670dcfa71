//! Content-based ranking over genre tags.
//!
//! Each movie becomes one document: its genre tags joined by spaces. The
//! corpus is weighted with TF-IDF and movies are ranked by cosine similarity
//! to the target.
//!
//! ## Weighting
//! - tokens are runs of two or more alphanumeric characters, lowercased
//! - English stop words are dropped
//! - tf is the raw count, idf is smoothed: `ln((1 + n) / (1 + df)) + 1`
//! - rows are L2-normalized, so cosine similarity is a dot product

use std::collections::HashMap;

use catalog::{CatalogError, Movie};
use tracing::debug;

use crate::stop_words::is_stop_word;

/// Sparse row: term index -> weight
pub type SparseVector = HashMap<usize, f64>;

/// Split a document into lowercase terms of at least two characters
pub fn tokenize(document: &str) -> Vec<String> {
    document
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_lowercase)
        .filter(|token| !is_stop_word(token))
        .collect()
}

/// TF-IDF rows for a corpus, plus the fitted vocabulary
#[derive(Debug)]
pub struct TfIdfMatrix {
    pub vocabulary: HashMap<String, usize>,
    pub rows: Vec<SparseVector>,
}

impl TfIdfMatrix {
    /// Fit the vocabulary and weight every document.
    ///
    /// Fails with `NoGenres` if the corpus has no usable terms at all.
    pub fn fit_transform<S: AsRef<str>>(documents: &[S]) -> Result<Self, CatalogError> {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d.as_ref())).collect();

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();

        for tokens in &tokenized {
            let mut seen_in_doc: Vec<usize> = Vec::new();
            for token in tokens {
                let next = vocabulary.len();
                let index = *vocabulary.entry(token.clone()).or_insert(next);
                if index == document_frequency.len() {
                    document_frequency.push(0);
                }
                if !seen_in_doc.contains(&index) {
                    seen_in_doc.push(index);
                    document_frequency[index] += 1;
                }
            }
        }

        if vocabulary.is_empty() {
            return Err(CatalogError::NoGenres);
        }

        let n = documents.len() as f64;
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let rows = tokenized
            .iter()
            .map(|tokens| {
                let mut row = SparseVector::new();
                for token in tokens {
                    *row.entry(vocabulary[token]).or_insert(0.0) += 1.0;
                }
                for (index, weight) in row.iter_mut() {
                    *weight *= idf[*index];
                }
                normalize(&mut row);
                row
            })
            .collect();

        Ok(Self { vocabulary, rows })
    }
}

fn normalize(row: &mut SparseVector) {
    let norm = row.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in row.values_mut() {
            *weight /= norm;
        }
    }
}

/// Cosine similarity of two sparse vectors; zero if either is empty
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .filter_map(|(term, wa)| large.get(term).map(|wb| wa * wb))
        .sum();

    let norm_a = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b = b.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// A movie paired with its similarity to the target
#[derive(Debug, Clone)]
pub struct ScoredMovie {
    pub movie: Movie,
    pub score: f64,
}

/// Ranks movies by genre similarity to a target title
#[derive(Debug, Clone)]
pub struct ContentRanker {
    top_k: usize,
}

impl ContentRanker {
    pub fn new() -> Self {
        Self { top_k: 5 }
    }

    /// Rank `movies` against the one titled `target_title`.
    ///
    /// Returns at most `top_k` movies, best first, never including a movie
    /// titled like the target. Equal scores keep input order. An absent
    /// target gives an empty list; a list without any genre tags is an error.
    pub fn rank_scored(&self, movies: &[Movie], target_title: &str) -> Result<Vec<ScoredMovie>, CatalogError> {
        if !movies.iter().any(Movie::has_genres) {
            return Err(CatalogError::NoGenres);
        }

        let documents: Vec<String> = movies.iter().map(|m| m.genres.join(" ")).collect();
        let matrix = TfIdfMatrix::fit_transform(&documents)?;

        let Some(target) = movies.iter().position(|m| m.title == target_title) else {
            debug!("'{}' is not among the {} ranked movies", target_title, movies.len());
            return Ok(Vec::new());
        };

        let target_row = &matrix.rows[target];
        let mut scored: Vec<(usize, f64)> = matrix
            .rows
            .iter()
            .enumerate()
            .filter(|(i, _)| movies[*i].title != target_title)
            .map(|(i, row)| (i, cosine_similarity(target_row, row)))
            .collect();

        // stable: ties keep input order
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(self.top_k);

        Ok(scored
            .into_iter()
            .map(|(i, score)| ScoredMovie {
                movie: movies[i].clone(),
                score,
            })
            .collect())
    }

    pub fn rank(&self, movies: &[Movie], target_title: &str) -> Result<Vec<Movie>, CatalogError> {
        Ok(self
            .rank_scored(movies, target_title)?
            .into_iter()
            .map(|s| s.movie)
            .collect())
    }
}

impl Default for ContentRanker {
    fn default() -> Self {
        Self::new()
    }
}
