//! Access to the NASA ADS API.
//!
//! A run needs three things from ADS, captured by the [`Bibliography`] trait:
//!
//! - the bibcodes in a library (`GET /biblib/libraries/{id}`),
//! - aggregate metrics over a set of bibcodes (`POST /metrics`),
//! - metadata records for a set of bibcodes (`POST /search/bigquery`).
//!
//! [`AdsClient`] implements it over HTTP. Every request carries the bearer
//! token and the configured timeout, and is awaited before the next one starts.
//!
//! # Examples
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use vitae::{client::AdsClient, credential::Token, prelude::*};
//!
//! # async fn example() -> Result<(), VitaeError> {
//! let token = Token::from_file("api.key")?;
//! let client =
//!   AdsClient::new("https://api.adsabs.harvard.edu/v1", &token, Duration::from_secs(10))?;
//!
//! let bibcodes = client.library("d7O0jq6KSTqnvppvvHjpjQ").await?;
//! let metrics = client.metrics(&bibcodes).await?;
//! println!("h-index {}", metrics.h_index);
//! # Ok(())
//! # }
//! ```

use reqwest::{
  header::{self, HeaderMap, HeaderValue},
  Response,
};
use serde::de::DeserializeOwned;

use super::*;
use crate::credential::Token;

/// Fields requested from the search service for every record.
pub const SEARCH_FIELDS: &str =
  "bibcode,doctype,title,author,bibstem,doi,issue,page,pub,volume,year";

/// The remote operations a run depends on.
///
/// Implementations are expected to return [`VitaeError::NotFound`] for a
/// missing library, [`VitaeError::Network`] for transport failures, and
/// [`VitaeError::Api`] for any other rejected request.
#[async_trait]
pub trait Bibliography: Send + Sync {
  /// Returns every bibcode in the library, in library order.
  async fn library(&self, library_id: &str) -> Result<Vec<String>>;

  /// Computes aggregate metrics over `bibcodes`.
  async fn metrics(&self, bibcodes: &[String]) -> Result<Metrics>;

  /// Fetches one record per bibcode, newest first.
  async fn records(&self, bibcodes: &[String]) -> Result<Vec<Publication>>;
}

/// HTTP client for the ADS API.
#[derive(Debug, Clone)]
pub struct AdsClient {
  /// Underlying client, carrying the auth header and timeout
  http:      reqwest::Client,
  /// API root without a trailing slash
  base_url:  String,
  /// Bibcodes requested per biblib page
  page_size: usize,
}

/// One page of a biblib library response.
#[derive(Debug, Deserialize)]
struct LibraryPage {
  /// Bibcodes on this page
  #[serde(default)]
  documents: Vec<String>,
  /// Library metadata, including its size
  metadata:  Option<LibraryMetadata>,
}

/// The part of the biblib metadata we use.
#[derive(Debug, Deserialize)]
struct LibraryMetadata {
  /// Total number of bibcodes in the library
  num_documents: usize,
}

/// Envelope of a search response.
#[derive(Debug, Deserialize)]
struct SearchResponse {
  /// The Solr response body
  response: SearchBody,
}

/// Body of a search response.
#[derive(Debug, Deserialize)]
struct SearchBody {
  /// Matching documents
  docs: Vec<AdsDocument>,
}

impl AdsClient {
  /// Builds a client for the API rooted at `base_url`.
  ///
  /// # Errors
  ///
  /// Returns [`VitaeError::Config`] if `base_url` is not a URL or the token
  /// cannot be sent as a header, and [`VitaeError::Network`] if the TLS
  /// backend fails to initialize.
  pub fn new(base_url: &str, token: &Token, timeout: Duration) -> Result<Self> {
    let base = Url::parse(base_url)
      .map_err(|e| VitaeError::Config(format!("Invalid API base URL {base_url:?}: {e}")))?;

    let mut auth = HeaderValue::from_str(&token.bearer())
      .map_err(|_| VitaeError::Config("API token contains characters not allowed in a header".into()))?;
    auth.set_sensitive(true);
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, auth);

    let http = reqwest::Client::builder().default_headers(headers).timeout(timeout).build()?;

    Ok(Self { http, base_url: base.as_str().trim_end_matches('/').to_string(), page_size: 100 })
  }

  /// Builds a client from the `[api]` section, reading the token file.
  pub fn from_config(api: &ApiConfig) -> Result<Self> {
    let token = Token::from_file(&api.token_path)?;
    Ok(
      Self::new(&api.base_url, &token, Duration::from_secs(api.timeout_secs))?
        .with_page_size(api.page_size),
    )
  }

  /// Sets how many bibcodes are requested per biblib page.
  pub fn with_page_size(mut self, page_size: usize) -> Self {
    self.page_size = page_size.max(1);
    self
  }

  /// Full URL of an API path.
  fn endpoint(&self, path: &str) -> String { format!("{}/{}", self.base_url, path) }
}

#[async_trait]
impl Bibliography for AdsClient {
  async fn library(&self, library_id: &str) -> Result<Vec<String>> {
    let url = self.endpoint(&format!("biblib/libraries/{library_id}"));
    let mut bibcodes = Vec::new();

    loop {
      debug!("Fetching library {library_id} from {url} (start {})", bibcodes.len());
      let response = self
        .http
        .get(&url)
        .query(&[("start", bibcodes.len()), ("rows", self.page_size)])
        .send()
        .await?;
      let page: LibraryPage = read_json(response, &format!("library {library_id}")).await?;

      let received = page.documents.len();
      bibcodes.extend(page.documents);
      let total = page.metadata.map_or(bibcodes.len(), |m| m.num_documents);
      if received == 0 || bibcodes.len() >= total {
        break;
      }
    }

    debug!("Library {library_id} holds {} bibcodes", bibcodes.len());
    Ok(bibcodes)
  }

  async fn metrics(&self, bibcodes: &[String]) -> Result<Metrics> {
    let url = self.endpoint("metrics");
    debug!("Requesting metrics for {} bibcodes from {url}", bibcodes.len());

    let response = self.http.post(&url).json(&serde_json::json!({ "bibcodes": bibcodes })).send().await?;
    let payload: Value = read_json(response, "metrics").await?;
    Metrics::from_response(&payload)
  }

  async fn records(&self, bibcodes: &[String]) -> Result<Vec<Publication>> {
    let url = self.endpoint("search/bigquery");
    debug!("Requesting {} records from {url}", bibcodes.len());

    let rows = bibcodes.len().to_string();
    let response = self
      .http
      .post(&url)
      .query(&[("q", "*:*"), ("fl", SEARCH_FIELDS), ("rows", rows.as_str()), ("sort", "date desc")])
      .header(header::CONTENT_TYPE, "big-query/csv")
      .body(format!("bibcode\n{}", bibcodes.join("\n")))
      .send()
      .await?;
    let search: SearchResponse = read_json(response, "bigquery search").await?;

    search.response.docs.into_iter().map(Publication::try_from).collect()
  }
}

/// Checks the status of `response` and decodes its JSON body.
///
/// `what` names the requested resource in a [`VitaeError::NotFound`].
async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
  let status = response.status();
  let body = response.bytes().await?;
  trace!("{what} response ({status}): {}", String::from_utf8_lossy(&body));

  if status == StatusCode::NOT_FOUND {
    return Err(VitaeError::NotFound(what.to_string()));
  }
  if !status.is_success() {
    return Err(VitaeError::Api {
      status:  status.as_u16(),
      message: String::from_utf8_lossy(&body).into_owned(),
    });
  }
  Ok(serde_json::from_slice(&body)?)
}
