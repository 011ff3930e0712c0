//! ArchiveClient against a mock archive endpoint.
//!
//! The client is blocking, so every call runs on tokio's blocking pool while
//! the mock server runs on the test runtime.

use std::time::Duration;

use exoplanets::{
    read_or_fetch, ArchiveClient, ArchiveConfig, CatalogSource, ColumnSpec, DefaultParams, Error,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Base URL of the mock archive endpoint.
fn api_url(server: &MockServer) -> String {
    format!("{}/api", server.uri())
}

/// Build the blocking client off the async runtime.
fn client_for(base_url: &str) -> ArchiveClient {
    ArchiveClient::new(ArchiveConfig::default().with_base_url(base_url))
        .expect("Failed to build archive client")
}

#[tokio::test]
async fn test_query_parses_csv_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .and(query_param("table", "q1_q17_dr25_stellar"))
        .and(query_param("select", "kepid"))
        .and(query_param("where", "kepid=8113154"))
        .and(query_param("format", "csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string("kepid\n8113154\n"))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = api_url(&server);
    let table = tokio::task::spawn_blocking(move || {
        client_for(&base_url).query(
            "q1_q17_dr25_stellar",
            &["kepid".to_string()],
            Some("kepid=8113154"),
        )
    })
    .await
    .unwrap()
    .expect("Query should succeed");

    assert_eq!(table.columns(), &["kepid".to_string()]);
    assert_eq!(table.column("kepid"), Some(vec!["8113154"]));
}

#[tokio::test]
async fn test_slow_response_is_not_cut_off() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("kepid\n8113154\n")
                .set_delay(Duration::from_secs(35)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let base_url = api_url(&server);
    let table = tokio::task::spawn_blocking(move || {
        client_for(&base_url).query(
            "q1_q17_dr25_stellar",
            &["kepid".to_string()],
            Some("kepid=8113154"),
        )
    })
    .await
    .unwrap()
    .expect("Slow archive response should still be read");

    assert_eq!(table.column("kepid"), Some(vec!["8113154"]));
}

#[tokio::test]
async fn test_error_body_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("ERROR<br>\nError Type: UserError<br>\nMessage: column not found"),
        )
        .mount(&server)
        .await;

    let base_url = api_url(&server);
    let result = tokio::task::spawn_blocking(move || {
        client_for(&base_url).query("q1_q17_dr25_stellar", &["bogus".to_string()], None)
    })
    .await
    .unwrap();

    match result {
        Err(Error::Archive { status, message }) => {
            assert_eq!(status, 200);
            assert!(message.contains("column not found"));
        }
        other => panic!("Expected archive error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_http_failure_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let base_url = api_url(&server);
    let result = tokio::task::spawn_blocking(move || {
        client_for(&base_url).query("q1_q17_dr25_koi", &["*".to_string()], None)
    })
    .await
    .unwrap();

    assert!(matches!(result, Err(Error::Archive { status: 503, .. })));
}

#[tokio::test]
async fn test_read_or_fetch_persists_renamed_columns() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .and(query_param("select", "kepid"))
        .and(query_param("where", "kepid=8113154"))
        .respond_with(ResponseTemplate::new(200).set_body_string("kepid\n8113154\n"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let cache_path = dir.path().join("cache").join("stellar.csv");
    let base_url = api_url(&server);

    let path = cache_path.clone();
    let table = tokio::task::spawn_blocking(move || -> exoplanets::Result<_> {
        let client = client_for(&base_url);
        let defaults = DefaultParams::builtin();
        let columns = Some(ColumnSpec::rename_map([("kepid", "Kepler ID")]));
        let filter = Some("kepid=8113154".to_string());

        // Second call must come from the file; the mock expects one request
        read_or_fetch(
            &client,
            &defaults,
            "q1_q17_dr25_stellar",
            columns.clone(),
            filter.clone(),
            Some(&path),
        )?;
        read_or_fetch(
            &client,
            &defaults,
            "q1_q17_dr25_stellar",
            columns,
            filter,
            Some(&path),
        )
    })
    .await
    .unwrap()
    .expect("read_or_fetch should succeed");

    assert_eq!(table.columns(), &["Kepler ID".to_string()]);
    assert_eq!(
        std::fs::read_to_string(&cache_path).unwrap(),
        "Kepler ID\n8113154\n"
    );
}
