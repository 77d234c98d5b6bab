use super::*;

#[traced_test]
#[tokio::test]
async fn test_library_pages_until_complete() -> TestResult<()> {
  let (server, client) = mock_ads().await;
  let client = client.with_page_size(2);

  Mock::given(method("GET"))
    .and(path("/v1/biblib/libraries/lib1"))
    .and(query_param("start", "0"))
    .and(query_param("rows", "2"))
    .and(header("Authorization", "Bearer test-token"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "documents": ["a", "b"],
      "metadata": { "num_documents": 3, "name": "Papers" }
    })))
    .expect(1)
    .mount(&server)
    .await;

  Mock::given(method("GET"))
    .and(path("/v1/biblib/libraries/lib1"))
    .and(query_param("start", "2"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "documents": ["c"],
      "metadata": { "num_documents": 3, "name": "Papers" }
    })))
    .expect(1)
    .mount(&server)
    .await;

  let bibcodes = client.library("lib1").await?;
  assert_eq!(bibcodes, vec!["a", "b", "c"]);
  Ok(())
}

#[tokio::test]
async fn test_small_library_is_one_request() -> TestResult<()> {
  let (server, client) = mock_ads().await;

  Mock::given(method("GET"))
    .and(path("/v1/biblib/libraries/lib1"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "documents": ["a", "b"],
      "metadata": { "num_documents": 2 }
    })))
    .expect(1)
    .mount(&server)
    .await;

  assert_eq!(client.library("lib1").await?.len(), 2);
  Ok(())
}

#[tokio::test]
async fn test_missing_library_is_not_found() {
  let (server, client) = mock_ads().await;

  Mock::given(method("GET"))
    .and(path("/v1/biblib/libraries/gone"))
    .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "Library not found" })))
    .mount(&server)
    .await;

  let err = client.library("gone").await.unwrap_err();
  assert!(matches!(err, VitaeError::NotFound(what) if what.contains("gone")));
}

#[tokio::test]
async fn test_rejected_request_is_api_error() {
  let (server, client) = mock_ads().await;

  Mock::given(method("POST"))
    .and(path("/v1/metrics"))
    .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
    .mount(&server)
    .await;

  let err = client.metrics(&["a".to_string()]).await.unwrap_err();
  assert!(
    matches!(&err, VitaeError::Api { status: 401, message } if message == "Unauthorized"),
    "unexpected error: {err}"
  );
}

#[tokio::test]
async fn test_metrics_request() -> TestResult<()> {
  let (server, client) = mock_ads().await;

  Mock::given(method("POST"))
    .and(path("/v1/metrics"))
    .and(header("Authorization", "Bearer test-token"))
    .and(body_json(json!({ "bibcodes": ["a", "b"] })))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "citation stats": { "number of citing papers": 120 },
      "indicators": { "h": 5 }
    })))
    .expect(1)
    .mount(&server)
    .await;

  let metrics = client.metrics(&["a".to_string(), "b".to_string()]).await?;
  assert_eq!(metrics.citing_papers, 120);
  assert_eq!(metrics.h_index, 5);
  Ok(())
}

#[tokio::test]
async fn test_records_request() -> TestResult<()> {
  let (server, client) = mock_ads().await;

  Mock::given(method("POST"))
    .and(path("/v1/search/bigquery"))
    .and(query_param("q", "*:*"))
    .and(query_param("fl", SEARCH_FIELDS))
    .and(query_param("rows", "2"))
    .and(query_param("sort", "date desc"))
    .and(header("Content-Type", "big-query/csv"))
    .and(body_string("bibcode\na\nb"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "responseHeader": { "status": 0 },
      "response": {
        "numFound": 2,
        "docs": [document("b", "Yarza, Ricardo", "eprint"), document("a", "Doe, John", "article")]
      }
    })))
    .expect(1)
    .mount(&server)
    .await;

  let records = client.records(&["a".to_string(), "b".to_string()]).await?;
  assert_eq!(records.len(), 2);
  assert_eq!(records[0].bibcode, "b");
  assert_eq!(records[0].doctype, DocType::Eprint);
  assert_eq!(records[1].authors[0], "Doe, John");
  Ok(())
}

#[tokio::test]
async fn test_malformed_record_is_an_error() {
  let (server, client) = mock_ads().await;

  let mut broken = document("a", "Doe, John", "article");
  broken.as_object_mut().unwrap().remove("year");
  Mock::given(method("POST"))
    .and(path("/v1/search/bigquery"))
    .respond_with(
      ResponseTemplate::new(200).set_body_json(json!({ "response": { "docs": [broken] } })),
    )
    .mount(&server)
    .await;

  let err = client.records(&["a".to_string()]).await.unwrap_err();
  assert!(matches!(err, VitaeError::MissingField(field) if field.starts_with("year")));
}

#[tokio::test]
async fn test_non_json_body_is_an_error() {
  let (server, client) = mock_ads().await;

  Mock::given(method("POST"))
    .and(path("/v1/metrics"))
    .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
    .mount(&server)
    .await;

  assert!(matches!(client.metrics(&["a".to_string()]).await, Err(VitaeError::Json(_))));
}

#[tokio::test]
async fn test_timeout_is_network_error() {
  let server = MockServer::start().await;
  let client = AdsClient::new(&server.uri(), &Token::from(TOKEN), Duration::from_millis(200)).unwrap();

  Mock::given(method("GET"))
    .respond_with(
      ResponseTemplate::new(200)
        .set_body_json(json!({ "documents": [] }))
        .set_delay(Duration::from_secs(2)),
    )
    .mount(&server)
    .await;

  match client.library("slow").await {
    Err(VitaeError::Network(e)) => assert!(e.is_timeout()),
    other => panic!("expected a timeout, got {other:?}"),
  }
}
