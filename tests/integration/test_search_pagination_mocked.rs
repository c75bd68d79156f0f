//! Integration tests for paged identifier collection using mocked HTTP responses
//!
//! These tests verify the pagination behavior without real API calls, using
//! wiremock to simulate the ESearch endpoint page by page.

use litscreen::{ClientConfig, ClinicalQuestion, Query, QueryBuilder, ScreenError, ScreeningClient};
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// JSON body of one ESearch page
fn esearch_json_response(pmids: &[u32], total_count: usize) -> String {
    let id_list: Vec<String> = pmids.iter().map(|id| format!("\"{id}\"")).collect();
    format!(
        r#"{{
            "esearchresult": {{
                "count": "{}",
                "retmax": "{}",
                "retstart": "0",
                "idlist": [{}]
            }}
        }}"#,
        total_count,
        pmids.len(),
        id_list.join(",")
    )
}

fn create_test_client(base_url: &str) -> ScreeningClient {
    let config = ClientConfig::new()
        .with_base_url(base_url)
        .with_rate_limit(100.0)
        .with_page_size(100);
    ScreeningClient::with_config(config)
}

fn test_query() -> Query {
    QueryBuilder::new()
        .question(ClinicalQuestion::new().population("aortic stenosis"))
        .build()
        .expect("query should build")
}

/// Mount one ESearch page for a given retstart offset
async fn mount_page(server: &MockServer, retstart: usize, pmids: &[u32], total: usize) {
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("retstart", retstart.to_string()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(esearch_json_response(pmids, total))
                .insert_header("content-type", "application/json"),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
#[traced_test]
async fn test_zero_total_returns_empty_without_second_page() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, 0, &[], 0).await;

    let client = create_test_client(&mock_server.uri());
    let ids = client
        .search_identifiers(&test_query())
        .await
        .expect("search should succeed");

    assert!(ids.is_empty());
    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1, "No second page request should be made");
}

#[tokio::test]
#[traced_test]
async fn test_stale_total_terminates_on_empty_page() {
    let mock_server = MockServer::start().await;

    // Endpoint claims 250 results but only serves 200: pages of 100, 100, 0
    let first: Vec<u32> = (1..=100).collect();
    let second: Vec<u32> = (101..=200).collect();
    mount_page(&mock_server, 0, &first, 250).await;
    mount_page(&mock_server, 100, &second, 250).await;
    mount_page(&mock_server, 200, &[], 250).await;

    let client = create_test_client(&mock_server.uri());
    let ids = client
        .search_identifiers(&test_query())
        .await
        .expect("search should succeed");

    assert_eq!(ids.len(), 200, "Empty page wins over the stale total");
    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received.len(), 3);
}

#[tokio::test]
#[traced_test]
async fn test_pages_requested_in_increasing_offset_order() {
    let mock_server = MockServer::start().await;

    let first: Vec<u32> = (1..=100).collect();
    let second: Vec<u32> = (101..=150).collect();
    mount_page(&mock_server, 0, &first, 150).await;
    mount_page(&mock_server, 100, &second, 150).await;

    let client = create_test_client(&mock_server.uri());
    let ids = client
        .search_identifiers(&test_query())
        .await
        .expect("search should succeed");

    assert_eq!(ids.len(), 150);
    // Arrival order is preserved, no sorting
    assert_eq!(ids.first().unwrap().as_u32(), 1);
    assert_eq!(ids.last().unwrap().as_u32(), 150);

    let received = mock_server.received_requests().await.unwrap();
    let offsets: Vec<String> = received
        .iter()
        .map(|r| {
            r.url
                .query_pairs()
                .find(|(k, _)| k == "retstart")
                .map(|(_, v)| v.to_string())
                .unwrap()
        })
        .collect();
    assert_eq!(offsets, vec!["0", "100"]);
}

#[tokio::test]
#[traced_test]
async fn test_transport_fault_on_second_page_discards_first() {
    let mock_server = MockServer::start().await;

    let first: Vec<u32> = (1..=100).collect();
    mount_page(&mock_server, 0, &first, 250).await;
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("retstart", "100"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let result = client.search_identifiers(&test_query()).await;

    // The successful first page must not leak: all or nothing
    assert!(matches!(
        result,
        Err(ScreenError::ApiError { status: 500, .. })
    ));
}

#[tokio::test]
#[traced_test]
async fn test_esearch_error_field_surfaces_as_api_error() {
    let mock_server = MockServer::start().await;

    // NCBI returns 200 OK with an ERROR field on some failures
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"esearchresult": {"ERROR": "Empty term and query_key - nothing todo"}}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let result = client.search_identifiers(&test_query()).await;

    let Err(ScreenError::ApiError { status, message }) = result else {
        panic!("expected ApiError");
    };
    assert_eq!(status, 200);
    assert!(message.contains("nothing todo"));
}

#[tokio::test]
#[traced_test]
async fn test_malformed_json_body_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let result = client.search_identifiers(&test_query()).await;

    assert!(matches!(result, Err(ScreenError::JsonError(_))));
}

#[tokio::test]
#[traced_test]
async fn test_result_cap_bounds_collection() {
    let mock_server = MockServer::start().await;

    let first: Vec<u32> = (1..=100).collect();
    let second: Vec<u32> = (101..=200).collect();
    mount_page(&mock_server, 0, &first, 500).await;
    mount_page(&mock_server, 100, &second, 500).await;

    let config = ClientConfig::new()
        .with_base_url(mock_server.uri())
        .with_rate_limit(100.0)
        .with_page_size(100)
        .with_max_results(150);
    let client = ScreeningClient::with_config(config);

    let ids = client
        .search_identifiers(&test_query())
        .await
        .expect("search should succeed");

    assert_eq!(ids.len(), 150, "Collection is truncated exactly to the cap");
    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received.len(), 2, "No page past the cap is requested");
}

#[tokio::test]
#[traced_test]
async fn test_api_params_appended_to_search_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("api_key", "key123"))
        .and(query_param("email", "ra@example.com"))
        .and(query_param("tool", "screening-suite"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(esearch_json_response(&[11, 22], 2)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new()
        .with_base_url(mock_server.uri())
        .with_rate_limit(100.0)
        .with_api_key("key123")
        .with_email("ra@example.com")
        .with_tool("screening-suite");
    let client = ScreeningClient::with_config(config);

    let ids = client
        .search_identifiers(&test_query())
        .await
        .expect("search should succeed");
    assert_eq!(ids.len(), 2);
}

#[tokio::test]
#[traced_test]
async fn test_query_text_sent_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("term", "(aortic stenosis)"))
        .respond_with(ResponseTemplate::new(200).set_body_string(esearch_json_response(&[], 0)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    client
        .search_identifiers(&test_query())
        .await
        .expect("search should succeed");
}
