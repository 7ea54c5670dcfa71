use catalog::Movie;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pipeline::ContentRanker;

const GENRES: &[&str] = &[
    "Action", "Adventure", "Animation", "Comedy", "Crime", "Documentary", "Drama", "Family",
    "Fantasy", "History", "Horror", "Music", "Mystery", "Romance", "Science Fiction",
    "Thriller", "War", "Western",
];

fn build_movies(count: usize) -> Vec<Movie> {
    (0..count)
        .map(|i| {
            let genres = [GENRES[i % GENRES.len()], GENRES[(i * 7 + 3) % GENRES.len()]];
            Movie::new(i as u64, format!("Movie {}", i)).with_genres(genres)
        })
        .collect()
}

fn bench_content_ranking(c: &mut Criterion) {
    let sample = build_movies(10);
    let large = build_movies(500);
    let ranker = ContentRanker::new();

    c.bench_function("rank_sample_of_10", |b| {
        b.iter(|| ranker.rank(black_box(&sample), black_box("Movie 3")))
    });

    c.bench_function("rank_500", |b| {
        b.iter(|| ranker.rank(black_box(&large), black_box("Movie 250")))
    });
}

criterion_group!(benches, bench_content_ranking);
criterion_main!(benches);
