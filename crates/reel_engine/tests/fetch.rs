use std::time::Duration;

use pretty_assertions::assert_eq;
use reel_engine::{FailureKind, FetchSettings, Fetcher, Listing, ReqwestFetcher};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher_for(server: &MockServer) -> ReqwestFetcher {
    let settings = FetchSettings {
        base_url: server.uri(),
        ..FetchSettings::with_token("test-token")
    };
    ReqwestFetcher::new(settings).expect("client")
}

#[tokio::test]
async fn popular_listing_is_requested_with_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .and(query_param("sort_by", "popularity.desc"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"page":1,"results":[{"id":1,"title":"One"},{"id":2,"title":"Two","vote_average":7.25}]}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let movies = fetcher_for(&server)
        .fetch(&Listing::Popular)
        .await
        .expect("fetch ok");

    let ids: Vec<_> = movies.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(movies[1].title, "Two");
    assert_eq!(movies[1].vote_average, Some(7.25));
}

#[tokio::test]
async fn search_sends_encoded_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("query", "the matrix & co"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"results":[{"id":603,"title":"The Matrix"}]}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let movies = fetcher_for(&server)
        .fetch(&Listing::Search("the matrix & co".to_string()))
        .await
        .expect("fetch ok");

    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].id, 603);
}

#[tokio::test]
async fn body_without_results_is_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .mount(&server)
        .await;

    let movies = fetcher_for(&server)
        .fetch(&Listing::Search("nothing".to_string()))
        .await
        .expect("fetch ok");
    assert!(movies.is_empty());
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = fetcher_for(&server)
        .fetch(&Listing::Popular)
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(401));
}

#[tokio::test]
async fn fetcher_fails_on_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = fetcher_for(&server)
        .fetch(&Listing::Popular)
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn fetcher_times_out_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("{}"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        base_url: server.uri(),
        request_timeout: Some(Duration::from_millis(50)),
        ..FetchSettings::with_token("test-token")
    };
    let fetcher = ReqwestFetcher::new(settings).expect("client");

    let err = fetcher.fetch(&Listing::Popular).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .set_body_string(r#"{"results":[]}"#),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        base_url: server.uri(),
        max_bytes: 4,
        ..FetchSettings::with_token("test-token")
    };
    let fetcher = ReqwestFetcher::new(settings).expect("client");

    let err = fetcher.fetch(&Listing::Popular).await.unwrap_err();
    assert!(matches!(err.kind, FailureKind::TooLarge { max_bytes: 4, .. }));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let settings = FetchSettings {
        base_url: "http://127.0.0.1:9".to_string(),
        ..FetchSettings::with_token("test-token")
    };
    let fetcher = ReqwestFetcher::new(settings).expect("client");

    let err = fetcher.fetch(&Listing::Popular).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}
