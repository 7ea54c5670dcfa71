//! Genre label normalization.
//!
//! Users type genres the way they say them ("sci-fi", "HORROR"); the provider
//! stores its own canonical labels ("Science Fiction", "Horror"). Every genre
//! comparison in the workspace goes through [`normalize`].

/// User spellings mapped onto the provider's canonical labels (lowercased)
const ALIASES: &[(&str, &str)] = &[
    ("sci-fi", "science fiction"),
    ("scifi", "science fiction"),
    ("sci fi", "science fiction"),
    ("musical", "music"),
];

/// Lowercase, trim, and resolve known aliases
pub fn normalize(genre: &str) -> String {
    let lowered = genre.trim().to_lowercase();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map(|(_, canonical)| (*canonical).to_string())
        .unwrap_or(lowered)
}

/// Whether two genre labels name the same genre
pub fn same_genre(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
