//! Aggregate citation metrics for a set of bibcodes.

use super::*;

/// The two numbers the CV quotes from the ADS metrics service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
  /// Number of distinct papers citing the set
  pub citing_papers: u64,
  /// h-index of the set
  pub h_index:       u64,
}

impl Metrics {
  /// Pulls the metrics out of an ADS `/metrics` response.
  ///
  /// The service nests them as `indicators.h` and
  /// `citation stats."number of citing papers"`; either may be sent as an
  /// integer or a float.
  pub fn from_response(payload: &Value) -> Result<Self> {
    let field = |section: &str, name: &str| {
      payload
        .get(section)
        .and_then(|s| s.get(name))
        .and_then(|v| v.as_u64().or_else(|| v.as_f64().map(|f| f as u64)))
        .ok_or_else(|| VitaeError::MissingField(format!("{section}.{name} in metrics response")))
    };

    Ok(Self {
      h_index:       field("indicators", "h")?,
      citing_papers: field("citation stats", "number of citing papers")?,
    })
  }

  /// The one-line summary, given the number of first-author papers.
  ///
  /// ```
  /// use vitae::metrics::Metrics;
  ///
  /// let metrics = Metrics { citing_papers: 120, h_index: 5 };
  /// assert_eq!(metrics.sentence(3), "3 first-author, 120 citations, h-index 5");
  /// ```
  pub fn sentence(&self, first_author: usize) -> String {
    format!("{first_author} first-author, {} citations, h-index {}", self.citing_papers, self.h_index)
  }
}
