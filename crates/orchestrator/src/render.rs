//! Plain-text rendering of movies.

use std::io::{self, Write};

use catalog::Movie;

const SEPARATOR_WIDTH: usize = 40;

pub fn year_text(movie: &Movie) -> String {
    movie
        .year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn genres_text(movie: &Movie) -> String {
    if movie.genres.is_empty() {
        "No genres available".to_string()
    } else {
        movie.genres.join(", ")
    }
}

pub fn rating_text(movie: &Movie) -> String {
    movie
        .rating
        .map(|r| format!("{:.1}", r))
        .unwrap_or_else(|| "No rating available".to_string())
}

pub fn companies_text(movie: &Movie) -> String {
    if movie.companies.is_empty() {
        "No production companies available".to_string()
    } else {
        movie
            .companies
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One movie block followed by a separator and a blank line
pub fn write_movie<W: Write + ?Sized>(out: &mut W, movie: &Movie) -> io::Result<()> {
    writeln!(out, "Title: {}, Year: {}", movie.title, year_text(movie))?;
    writeln!(out, "Genres: {}", genres_text(movie))?;
    writeln!(out, "Rating: {}", rating_text(movie))?;
    writeln!(out, "Produced by: {}", companies_text(movie))?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    writeln!(out)
}
