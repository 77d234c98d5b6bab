//! Publication records as returned by the ADS search service.
//!
//! The search endpoint answers with loosely typed documents: most fields are
//! optional, list-valued fields wrap a single value in an array, and numeric
//! fields such as `year` or `volume` arrive as strings or numbers depending on
//! the record. [`Publication`] is the typed view the rest of the crate works
//! with, built once per document through [`TryFrom`].
//!
//! # Examples
//!
//! ```
//! use vitae::record::{DocType, Publication};
//!
//! let doc = serde_json::json!({
//!   "bibcode": "2023ApJ...900...50Y",
//!   "title": ["A Paper"],
//!   "author": ["Yarza, Ricardo"],
//!   "pub": "The Astrophysical Journal",
//!   "bibstem": ["ApJ", "ApJ...900"],
//!   "year": "2023",
//!   "volume": "900",
//!   "page": ["50"],
//!   "doctype": "article"
//! });
//!
//! let publication = Publication::try_from(doc).unwrap();
//! assert_eq!(publication.short_venue, "ApJ");
//! assert_eq!(publication.page.as_deref(), Some("50"));
//! assert_eq!(publication.doctype, DocType::Article);
//! ```

use super::*;

/// One bibliographic record, read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publication {
  /// Full title as ADS has it
  pub title:       String,
  /// Authors in order, each as "Last, First Middle"
  pub authors:     Vec<String>,
  /// Full venue name, e.g. "The Astrophysical Journal"
  pub venue:       String,
  /// Abbreviated venue, e.g. "ApJ"
  pub short_venue: String,
  /// Publication year
  pub year:        String,
  /// Journal volume
  pub volume:      Option<String>,
  /// Journal issue
  pub issue:       Option<String>,
  /// First page, article number, or eprint identifier
  pub page:        Option<String>,
  /// ADS bibcode
  pub bibcode:     String,
  /// First DOI, if any
  pub doi:         Option<String>,
  /// Document type
  pub doctype:     DocType,
}

/// ADS document type.
///
/// Only the two types the CV splits on get their own variant; everything else
/// (conference abstracts, software, theses, ...) is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocType {
  /// Refereed journal article (`article`)
  Article,
  /// Preprint (`eprint`)
  Eprint,
  /// Any other ADS document type
  Other(String),
}

/// A search document exactly as ADS sends it.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AdsDocument {
  /// Bibcode
  bibcode:     Option<String>,
  /// Title, wrapped in a list
  #[serde(default)]
  title:       Vec<String>,
  /// Authors
  author:      Option<Vec<String>>,
  /// Venue
  #[serde(rename = "pub")]
  publication: Option<String>,
  /// Abbreviated venue first, then the venue with volume
  #[serde(default)]
  bibstem:     Vec<String>,
  /// Year, as string or number
  year:        Option<Value>,
  /// Volume, as string or number
  volume:      Option<Value>,
  /// Issue, as string or number
  issue:       Option<Value>,
  /// Pages, first page first
  #[serde(default)]
  page:        Vec<String>,
  /// DOIs
  #[serde(default)]
  doi:         Vec<String>,
  /// Document type
  doctype:     Option<String>,
}

impl TryFrom<AdsDocument> for Publication {
  type Error = VitaeError;

  fn try_from(doc: AdsDocument) -> Result<Self> {
    let bibcode = doc.bibcode.ok_or_else(|| VitaeError::MissingField("bibcode".into()))?;
    let missing = |field: &str| VitaeError::MissingField(format!("{field} (record {bibcode})"));

    let title = doc.title.into_iter().next().ok_or_else(|| missing("title"))?;
    let authors = doc.author.filter(|a| !a.is_empty()).ok_or_else(|| missing("author"))?;
    let venue = doc.publication.ok_or_else(|| missing("pub"))?;
    let short_venue = doc.bibstem.into_iter().next().ok_or_else(|| missing("bibstem"))?;
    let year = doc.year.as_ref().and_then(scalar_string).ok_or_else(|| missing("year"))?;
    let doctype = doc.doctype.as_deref().map(DocType::from).ok_or_else(|| missing("doctype"))?;

    Ok(Publication {
      title,
      authors,
      venue,
      short_venue,
      year,
      volume: doc.volume.as_ref().and_then(scalar_string),
      issue: doc.issue.as_ref().and_then(scalar_string),
      page: doc.page.into_iter().next(),
      bibcode,
      doi: doc.doi.into_iter().next(),
      doctype,
    })
  }
}

impl TryFrom<Value> for Publication {
  type Error = VitaeError;

  fn try_from(value: Value) -> Result<Self> {
    serde_json::from_value::<AdsDocument>(value)?.try_into()
  }
}

impl DocType {
  /// The ADS spelling of this type.
  pub fn as_str(&self) -> &str {
    match self {
      DocType::Article => "article",
      DocType::Eprint => "eprint",
      DocType::Other(other) => other,
    }
  }
}

impl From<&str> for DocType {
  fn from(s: &str) -> Self {
    match s {
      "article" => DocType::Article,
      "eprint" => DocType::Eprint,
      other => DocType::Other(other.to_string()),
    }
  }
}

impl Display for DocType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

/// Reads a JSON scalar that may be a string or a number; empty strings count as absent.
fn scalar_string(value: &Value) -> Option<String> {
  match value {
    Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
    Value::Number(n) => Some(n.to_string()),
    _ => None,
  }
}
