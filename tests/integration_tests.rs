//! Integration tests for DOAJ Probe
//!
//! These tests drive complete runs through the mock transport and the real
//! reqwest transport against a local mock server.

use doaj_probe::config::{EndpointEntry, Settings};
use doaj_probe::transport::{MockTransport, TransportError};
use doaj_probe::ui::Console;
use doaj_probe::{run, HttpTransport, RunReport};
use mockito::Matcher;
use std::sync::Arc;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; Academic Research Bot/1.0)";

const DOAJ_URLS: [&str; 6] = [
    "https://doaj.org/api/search/articles",
    "https://doaj.org/api/v1/search/articles",
    "https://doaj.org/api/v2/search/articles",
    "https://doaj.org/api/v3/search/articles",
    "https://doaj.org/api/articles",
    "https://doaj.org/api/search",
];

async fn run_with(mock: &Arc<MockTransport>, settings: &Settings) -> (RunReport, String) {
    let mut console = Console::plain(Vec::new());
    let report = run(mock.clone(), settings, &mut console)
        .await
        .expect("writing to a buffer cannot fail");
    let text = String::from_utf8(console.into_inner()).unwrap();
    (report, text)
}

/// Every default endpoint gets exactly one GET with the documented request
#[tokio::test]
async fn test_one_request_per_endpoint() {
    let mock = Arc::new(MockTransport::new());
    for url in DOAJ_URLS {
        mock.respond(url, 200, r#"{"results": []}"#);
    }

    let (report, _) = run_with(&mock, &Settings::default()).await;

    let requests = mock.requests();
    assert_eq!(requests.len(), 6);
    assert_eq!(report.attempted, 6);
    assert_eq!(report.working.len(), 6);

    for (request, url) in requests.iter().zip(DOAJ_URLS) {
        assert_eq!(request.url, url);
        assert_eq!(request.header("Accept"), Some("application/json"));
        assert_eq!(request.header("User-Agent"), Some(USER_AGENT));
        assert_eq!(request.param("pageSize"), Some("5"));
        assert_eq!(request.timeout.as_secs(), 10);

        let key = if url.contains("/v2/") { "query" } else { "q" };
        assert_eq!(request.param(key), Some("ancient rome"), "{}", url);
        assert_eq!(request.params.len(), 2);
    }
}

/// Failures of every kind leave the run intact and print the hints
#[tokio::test]
async fn test_all_endpoints_failing() {
    let mock = Arc::new(MockTransport::new());
    mock.respond(DOAJ_URLS[0], 503, "Service Unavailable")
        .respond(DOAJ_URLS[1], 200, "not json")
        .respond(DOAJ_URLS[2], 404, r#"{"error": "not found"}"#)
        .fail(
            DOAJ_URLS[3],
            TransportError::Timeout("operation timed out".to_string()),
        )
        .fail(
            DOAJ_URLS[4],
            TransportError::Connect("dns error".to_string()),
        );
    // DOAJ_URLS[5] has no reply and fails to connect

    let (report, text) = run_with(&mock, &Settings::default()).await;

    assert!(report.working.is_empty());
    assert_eq!(mock.requests().len(), 6);
    assert!(text.starts_with("🔍 DOAJ API Endpoint Testing\n"));
    assert!(text.contains("📊 SUMMARY"));
    assert!(text.contains("❌ No working DOAJ endpoints found!"));
    for hint in [
        "- DOAJ API is down",
        "- API endpoints have changed",
        "- Network/CORS issues",
        "- Authentication required",
    ] {
        assert!(text.contains(hint), "missing hint {}", hint);
    }
    assert_eq!(text.matches("❌ FAILED").count(), 6);
}

/// Only 200 + JSON counts; the summary keeps probe order
#[tokio::test]
async fn test_mixed_outcomes() {
    let mock = Arc::new(MockTransport::new());
    mock.respond(DOAJ_URLS[0], 503, r#"{"results": [{"bibjson": {"title": "hidden"}}]}"#)
        .respond(
            DOAJ_URLS[2],
            200,
            r#"{"total": 1, "results": [{"bibjson": {"title": "X"}}]}"#,
        )
        .respond(DOAJ_URLS[3], 200, "not json")
        .respond(
            DOAJ_URLS[5],
            200,
            r#"{"response": {"numFound": 1, "docs": [{"title": "Y"}]}}"#,
        );

    let (report, text) = run_with(&mock, &Settings::default()).await;

    let working: Vec<&str> = report
        .working
        .iter()
        .map(|w| w.config.url.as_str())
        .collect();
    assert_eq!(working, vec![DOAJ_URLS[2], DOAJ_URLS[5]]);

    assert!(text.contains("✅ Found 2 working endpoint(s):"));
    assert!(text.contains("1. DOAJ v2 API - /api/v2/search/articles"));
    assert!(text.contains("   Params: {'query': 'ancient rome', 'pageSize': 5}"));
    assert!(text.contains("   Results: 1 articles found\n   Sample title: X...\n"));
    assert!(text.contains("2. DOAJ Search - /api/search"));
    assert!(text.contains("   Sample title: Y...\n"));
    assert!(!text.contains("hidden..."));
}

/// A JSON body with neither known layout still counts as working
#[tokio::test]
async fn test_loose_success_definition() {
    let mock = Arc::new(MockTransport::new());
    mock.respond(DOAJ_URLS[4], 200, r#"{"message": "moved"}"#);

    let (report, text) = run_with(&mock, &Settings::default()).await;

    assert_eq!(report.working.len(), 1);
    assert!(text.contains("1. DOAJ Articles - /api/articles"));
    assert!(!text.contains("articles found"));
}

fn local_settings(base: &str) -> Settings {
    Settings {
        endpoints: vec![
            EndpointEntry {
                url: format!("{}/api/search/articles", base),
                description: "local q".to_string(),
                param_key: "q".to_string(),
            },
            EndpointEntry {
                url: format!("{}/api/v2/search/articles", base),
                description: "local query".to_string(),
                param_key: "query".to_string(),
            },
        ],
        ..Settings::default()
    }
}

/// The reqwest transport sends the documented headers and query string
#[tokio::test]
async fn test_http_transport_against_mock_server() {
    let mut server = mockito::Server::new_async().await;

    let results = server
        .mock("GET", "/api/search/articles")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "ancient rome".into()),
            Matcher::UrlEncoded("pageSize".into(), "5".into()),
        ]))
        .match_header("accept", "application/json")
        .match_header("user-agent", USER_AGENT)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": [{"bibjson": {"title": "Roman roads"}}]}"#)
        .expect(1)
        .create_async()
        .await;

    let unavailable = server
        .mock("GET", "/api/v2/search/articles")
        .match_query(Matcher::UrlEncoded("query".into(), "ancient rome".into()))
        .with_status(503)
        .with_body("maintenance")
        .expect(1)
        .create_async()
        .await;

    let settings = local_settings(&server.url());
    let transport = Arc::new(HttpTransport::with_user_agent(&settings.user_agent).unwrap());
    let mut console = Console::plain(Vec::new());

    let report = run(transport, &settings, &mut console).await.unwrap();
    let text = String::from_utf8(console.into_inner()).unwrap();

    results.assert_async().await;
    unavailable.assert_async().await;

    assert_eq!(report.attempted, 2);
    assert_eq!(report.working.len(), 1);
    assert!(text.contains("❌ FAILED - HTTP 503"));
    assert!(text.contains("Response: maintenance..."));
    assert!(text.contains("   Sample title: Roman roads..."));
}

/// An unreachable host is reported and the run continues
#[tokio::test]
async fn test_http_transport_connection_failure() {
    let settings = Settings {
        timeout_secs: 2,
        endpoints: vec![EndpointEntry {
            url: "http://127.0.0.1:1/api/search".to_string(),
            description: "closed port".to_string(),
            param_key: "q".to_string(),
        }],
        ..Settings::default()
    };
    let transport = Arc::new(HttpTransport::with_user_agent(&settings.user_agent).unwrap());
    let mut console = Console::plain(Vec::new());

    let report = run(transport, &settings, &mut console).await.unwrap();
    let text = String::from_utf8(console.into_inner()).unwrap();

    assert!(report.working.is_empty());
    assert!(text.contains("❌ FAILED - Request error:"));
    assert!(text.contains("❌ No working DOAJ endpoints found!"));
}
