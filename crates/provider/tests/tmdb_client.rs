//! Wire-level tests for the TMDB client against a mock HTTP server.

use catalog::Company;
use httpmock::prelude::*;
use provider::{MetadataProvider, ProviderConfig, ProviderError, TmdbClient};
use serde_json::json;

fn config(server: &MockServer) -> ProviderConfig {
    ProviderConfig::new("test-key").with_base_url(server.base_url())
}

fn mock_genre_list(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/genre/movie/list")
            .query_param("api_key", "test-key");
        then.status(200).json_body(json!({
            "genres": [
                {"id": 28, "name": "Action"},
                {"id": 27, "name": "Horror"},
                {"id": 878, "name": "Science Fiction"}
            ]
        }));
    })
}

#[tokio::test]
async fn test_search_maps_summaries_with_genre_names() {
    let server = MockServer::start();
    let genres = mock_genre_list(&server);
    let search = server.mock(|when, then| {
        when.method(GET)
            .path("/search/movie")
            .query_param("query", "Inception")
            .query_param("page", "1")
            .query_param("language", "en-US");
        then.status(200).json_body(json!({
            "page": 1,
            "total_pages": 1,
            "total_results": 2,
            "results": [
                {"id": 27205, "title": "Inception", "release_date": "2010-07-15",
                 "genre_ids": [28, 878], "vote_average": 8.4, "vote_count": 36000},
                {"id": 64956, "title": "Inception: The Cobol Job", "release_date": "2010-12-07",
                 "genre_ids": [28], "vote_average": 7.0, "vote_count": 0}
            ]
        }));
    });

    let client = TmdbClient::connect(config(&server)).await.unwrap();
    let movies = client.search_movies("Inception", 50).await.unwrap();

    genres.assert();
    search.assert();
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].id, 27205);
    assert_eq!(movies[0].year, Some(2010));
    assert_eq!(movies[0].genres, vec!["Action", "Science Fiction"]);
    assert_eq!(movies[1].rating, None);
}

#[tokio::test]
async fn test_search_paginates_until_limit() {
    let server = MockServer::start();
    let first = server.mock(|when, then| {
        when.method(GET).path("/search/movie").query_param("page", "1");
        then.status(200).json_body(json!({
            "page": 1, "total_pages": 3,
            "results": [
                {"id": 1, "title": "Horror 1"},
                {"id": 2, "title": "Horror 2"}
            ]
        }));
    });
    let second = server.mock(|when, then| {
        when.method(GET).path("/search/movie").query_param("page", "2");
        then.status(200).json_body(json!({
            "page": 2, "total_pages": 3,
            "results": [
                {"id": 3, "title": "Horror 3"},
                {"id": 4, "title": "Horror 4"}
            ]
        }));
    });
    let third = server.mock(|when, then| {
        when.method(GET).path("/search/movie").query_param("page", "3");
        then.status(200).json_body(json!({"page": 3, "total_pages": 3, "results": []}));
    });

    let client = TmdbClient::new(config(&server)).unwrap();
    let movies = client.search_movies("Horror", 3).await.unwrap();

    first.assert();
    second.assert();
    third.assert_hits(0);
    let ids: Vec<u64> = movies.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    // no genre table loaded
    assert!(movies[0].genres.is_empty());
}

#[tokio::test]
async fn test_fetch_movie_returns_full_record() {
    let server = MockServer::start();
    mock_genre_list(&server);
    let details = server.mock(|when, then| {
        when.method(GET)
            .path("/movie/27205")
            .query_param("append_to_response", "recommendations");
        then.status(200).json_body(json!({
            "id": 27205,
            "title": "Inception",
            "release_date": "2010-07-15",
            "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}],
            "vote_average": 8.369,
            "vote_count": 36000,
            "production_companies": [
                {"id": 923, "name": "Legendary Pictures", "logo_path": null, "origin_country": "US"},
                {"id": 9996, "name": "Syncopy", "logo_path": null, "origin_country": "GB"}
            ],
            "recommendations": {
                "page": 1, "total_pages": 1,
                "results": [
                    {"id": 157336, "title": "Interstellar", "release_date": "2014-11-05",
                     "genre_ids": [878], "vote_average": 8.4, "vote_count": 34000}
                ]
            }
        }));
    });

    let client = TmdbClient::connect(config(&server)).await.unwrap();
    let record = client.fetch_movie(27205).await.unwrap();

    details.assert();
    assert_eq!(record.movie.title, "Inception");
    assert_eq!(record.movie.companies.len(), 2);
    assert_eq!(record.movie.companies[1].name, "Syncopy");
    assert_eq!(record.recommendations.len(), 1);
    assert_eq!(record.recommendations[0].genres, vec!["Science Fiction"]);
}

#[tokio::test]
async fn test_fetch_missing_movie_is_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/movie/42");
        then.status(404).json_body(json!({
            "success": false,
            "status_code": 34,
            "status_message": "The resource you requested could not be found."
        }));
    });

    let client = TmdbClient::new(config(&server)).unwrap();
    let result = client.fetch_movie(42).await;

    assert!(matches!(result, Err(ProviderError::NotFound(42))));
}

#[tokio::test]
async fn test_error_status_carries_provider_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search/movie");
        then.status(401).json_body(json!({
            "success": false,
            "status_code": 7,
            "status_message": "Invalid API key: You must be granted a valid key."
        }));
    });

    let client = TmdbClient::new(config(&server)).unwrap();
    let err = client.search_movies("Alien", 10).await.unwrap_err();

    match err {
        ProviderError::Status { status, message } => {
            assert_eq!(status, 401);
            assert!(message.starts_with("Invalid API key"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_bearer_token_goes_in_header() {
    let server = MockServer::start();
    let token = "eyJhbGciOiJIUzI1NiJ9.payload.signature";
    let search = server.mock(|when, then| {
        when.method(GET)
            .path("/search/movie")
            .header("Authorization", format!("Bearer {}", token));
        then.status(200).json_body(json!({"page": 1, "total_pages": 1, "results": []}));
    });

    let client = TmdbClient::new(ProviderConfig::new(token).with_base_url(server.base_url())).unwrap();
    let movies = client.search_movies("Nothing", 10).await.unwrap();

    search.assert();
    assert!(movies.is_empty());
}

#[tokio::test]
async fn test_company_listing_uses_discover() {
    let server = MockServer::start();
    let discover = server.mock(|when, then| {
        when.method(GET)
            .path("/discover/movie")
            .query_param("with_companies", "923");
        then.status(200).json_body(json!({
            "page": 1, "total_pages": 1,
            "results": [
                {"id": 1, "title": "Godzilla", "vote_average": 6.3, "vote_count": 9000},
                {"id": 2, "title": "Dune", "vote_average": 7.8, "vote_count": 12000}
            ]
        }));
    });

    let client = TmdbClient::new(config(&server)).unwrap();
    let movies = client
        .movies_by_company(&Company::new(923, "Legendary Pictures"), 1)
        .await
        .unwrap();

    discover.assert();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "Godzilla");
}

#[tokio::test]
async fn test_connect_survives_genre_table_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/genre/movie/list");
        then.status(500);
    });

    let client = TmdbClient::connect(config(&server)).await;
    assert!(client.is_ok());
}
