//! Integration tests for the full retrieval chain using mocked HTTP responses
//!
//! Question → Query → identifier set → result table against a wiremock server
//! standing in for both E-utilities endpoints.

use litscreen::{
    ArticleType, ClientConfig, ClinicalQuestion, DateRange, FilterSet, QueryBuilder, ScreenError,
    ScreeningClient,
};
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const EFETCH_RESPONSE: &str = r#"<?xml version="1.0" ?>
<PubmedArticleSet>
    <PubmedArticle>
        <MedlineCitation>
            <PMID>11111111</PMID>
            <Article>
                <Journal>
                    <Title>Heart Valve Journal</Title>
                    <JournalIssue>
                        <PubDate><Year>2022</Year></PubDate>
                    </JournalIssue>
                </Journal>
                <ArticleTitle>Transcatheter valve outcomes</ArticleTitle>
                <Abstract>
                    <AbstractText>Outcomes were favorable.</AbstractText>
                </Abstract>
                <AuthorList>
                    <Author>
                        <LastName>Lee</LastName>
                        <ForeName>Min</ForeName>
                    </Author>
                </AuthorList>
            </Article>
        </MedlineCitation>
    </PubmedArticle>
    <PubmedArticle>
        <MedlineCitation>
            <PMID>22222222</PMID>
            <Article>
                <ArticleTitle>Valve durability at five years</ArticleTitle>
            </Article>
        </MedlineCitation>
    </PubmedArticle>
</PubmedArticleSet>"#;

fn screening_builder() -> QueryBuilder {
    QueryBuilder::new()
        .question(
            ClinicalQuestion::new()
                .population("aortic stenosis")
                .intervention("transcatheter valve replacement"),
        )
        .filters(
            FilterSet::new()
                .article_type(ArticleType::ClinicalTrial)
                .article_type(ArticleType::SystematicReview),
        )
        .date_range(DateRange::between("2020/01/01", "2024/12/31"))
}

fn create_test_client(base_url: &str) -> ScreeningClient {
    let config = ClientConfig::new()
        .with_base_url(base_url)
        .with_rate_limit(100.0);
    ScreeningClient::with_config(config)
}

#[tokio::test]
#[traced_test]
async fn test_search_and_fetch_full_chain() {
    let mock_server = MockServer::start().await;

    let expected_term = "(aortic stenosis) AND (transcatheter valve replacement) \
                         AND (clinicaltrial[Filter] OR systematicreview[Filter]) \
                         AND 2020/01/01:2024/12/31[pdat]";
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("term", expected_term))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"esearchresult": {"count": "2", "retmax": "2", "retstart": "0",
                "idlist": ["11111111", "22222222"]}}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("id", "11111111,22222222"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EFETCH_RESPONSE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let table = client
        .search_and_fetch(&screening_builder())
        .await
        .expect("chain should succeed");

    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[0].pmid, "11111111");
    assert_eq!(table.rows()[0].title, "Transcatheter valve outcomes");
    assert_eq!(table.rows()[0].year, "2022");
    assert_eq!(table.rows()[1].pmid, "22222222");
    // Sparse second record is normalized, never empty
    assert_eq!(table.rows()[1].journal, "Unknown journal");
    assert_eq!(table.rows()[1].year, "Unknown");
}

#[tokio::test]
#[traced_test]
async fn test_invalid_builder_fails_before_any_request() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server.uri());

    // No fragment enabled: the validation gate rejects before the network
    let result = client.search_and_fetch(&QueryBuilder::new()).await;
    assert!(matches!(result, Err(ScreenError::InvalidQuery(_))));

    // Half-open date range fails the same way
    let half_open = QueryBuilder::new()
        .question(ClinicalQuestion::new().population("stenosis"))
        .date_range(DateRange::new().start("2020/01/01"));
    let result = client.search_and_fetch(&half_open).await;
    assert!(matches!(result, Err(ScreenError::InvalidQuery(_))));

    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received.len(), 0, "Nothing may be sent for invalid input");
}

#[tokio::test]
#[traced_test]
async fn test_chain_with_zero_results_skips_fetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"esearchresult": {"count": "0", "retmax": "0", "retstart": "0", "idlist": []}}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let table = client
        .search_and_fetch(&screening_builder())
        .await
        .expect("empty result is not an error");

    assert!(table.is_empty());
    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1, "No efetch request for an empty id set");
}

#[tokio::test]
#[traced_test]
async fn test_identical_runs_produce_equal_tables() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"esearchresult": {"count": "2", "retmax": "2", "retstart": "0",
                "idlist": ["11111111", "22222222"]}}"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EFETCH_RESPONSE))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let first = client.search_and_fetch(&screening_builder()).await.unwrap();
    let second = client.search_and_fetch(&screening_builder()).await.unwrap();

    assert!(first.content_eq(&second));
}
