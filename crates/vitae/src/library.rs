//! Fetch-once views of ADS libraries.
//!
//! A [`Library`] is populated by one explicit load step and then only read.
//! Loading asks the [`Bibliography`] for the library's bibcodes and then for
//! the records behind them; [`Library::load_with_metrics`] also requests the
//! aggregate metrics. Nothing is fetched again afterwards.

use super::*;

/// An ADS library and everything fetched for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
  /// ADS library identifier
  pub id:       String,
  /// Bibcodes in library order
  pub bibcodes: Vec<String>,
  /// One record per bibcode, newest first
  pub records:  Vec<Publication>,
  /// Aggregate metrics, when requested
  pub metrics:  Option<Metrics>,
}

impl Library {
  /// Fetches the bibcodes and records of library `id`.
  ///
  /// An empty library is returned as is, without a records request.
  pub async fn load(api: &impl Bibliography, id: &str) -> Result<Self> {
    let bibcodes = api.library(id).await?;
    let records = if bibcodes.is_empty() {
      debug!("Library {id} is empty; skipping the records request");
      Vec::new()
    } else {
      api.records(&bibcodes).await?
    };

    check_counts(id, &bibcodes, &records);
    Ok(Self { id: id.to_string(), bibcodes, records, metrics: None })
  }

  /// Like [`Library::load`], and also fetches the aggregate metrics.
  ///
  /// The calls run in order: bibcodes, metrics, records. An empty library
  /// gets zero metrics without asking the service.
  pub async fn load_with_metrics(api: &impl Bibliography, id: &str) -> Result<Self> {
    let bibcodes = api.library(id).await?;
    if bibcodes.is_empty() {
      debug!("Library {id} is empty; reporting zero metrics");
      return Ok(Self {
        id:       id.to_string(),
        bibcodes: Vec::new(),
        records:  Vec::new(),
        metrics:  Some(Metrics::default()),
      });
    }

    let metrics = api.metrics(&bibcodes).await?;
    let records = api.records(&bibcodes).await?;
    check_counts(id, &bibcodes, &records);
    Ok(Self { id: id.to_string(), bibcodes, records, metrics: Some(metrics) })
  }
}

/// Warns when ADS returned a different number of records than the library lists.
fn check_counts(id: &str, bibcodes: &[String], records: &[Publication]) {
  if records.len() != bibcodes.len() {
    warn!("Library {id} lists {} bibcodes but ADS returned {} records", bibcodes.len(), records.len());
  }
}
