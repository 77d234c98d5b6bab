//! Error types for the vitae library.
//!
//! Every failure a run can hit is surfaced as a [`VitaeError`], including:
//! - Transport failures and timeouts talking to ADS
//! - Error responses from the API, with not-found kept separate
//! - Payloads that are malformed or missing required fields
//! - Configuration, credential, and filesystem problems
//!
//! # Examples
//!
//! ```no_run
//! use vitae::{client::AdsClient, library::Library, prelude::*, Config};
//!
//! # async fn example() -> Result<(), VitaeError> {
//! let config = Config::default();
//! let client = AdsClient::from_config(&config.api)?;
//! match Library::load(&client, "no-such-library").await {
//!   Err(VitaeError::NotFound(what)) => println!("Missing: {what}"),
//!   Err(VitaeError::Network(e)) => println!("Network error: {e}"),
//!   Err(e) => println!("Other error: {e}"),
//!   Ok(library) => println!("{} records", library.records.len()),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// Error type alias used for the [`vitae`](crate) crate.
pub type Result<T> = core::result::Result<T, VitaeError>;

/// Errors that can occur while fetching, rendering, or writing CV fragments.
#[derive(Error, Debug)]
pub enum VitaeError {
  /// A network request failed before a response arrived.
  ///
  /// This covers unreachable hosts, TLS errors, and requests that exceed the
  /// configured timeout.
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// The API answered 404 for the named resource.
  #[error("Not found: {0}")]
  NotFound(String),

  /// The API answered with a non-success status other than 404.
  ///
  /// The message holds the response body, which ADS fills with a JSON error
  /// description.
  #[error("API error ({status}): {message}")]
  Api {
    /// HTTP status code of the response
    status:  u16,
    /// Body of the response
    message: String,
  },

  /// A response body was not the JSON we expected.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// A payload lacked a field the run cannot do without.
  ///
  /// The string names the field and, when known, the bibcode it belongs to.
  #[error("Missing required field: {0}")]
  MissingField(String),

  /// A file system operation failed.
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// The configuration file could not be parsed.
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// The configuration parsed but holds values the run cannot use.
  #[error("{0}")]
  Config(String),

  /// The token file is absent or blank.
  #[error("API token file {0:?} is missing or empty")]
  MissingToken(std::path::PathBuf),

  /// A record showed up in a library that should not hold its document type.
  #[error("Record {bibcode} has document type \"{doctype}\", which does not belong in {group}")]
  UnexpectedDocType {
    /// Bibcode of the offending record
    bibcode: String,
    /// Its document type
    doctype: String,
    /// The fragment it was headed for
    group:   String,
  },
}
