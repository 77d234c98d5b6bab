//! Publication lists and citation metrics for a CV, straight from NASA ADS.
//!
//! `vitae` turns the contents of ADS libraries into TeX fragments that a CV
//! document can `\input`, providing:
//!
//! - Library retrieval from the ADS biblib, search, and metrics endpoints
//! - A typed publication record built from ADS search documents
//! - TeX rendering of titles, author lists, and full `\item` entries
//! - A one-line citation metrics summary
//! - Grouping of entries into articles, preprints, and non-article items
//!
//! # Getting Started
//!
//! ```no_run
//! use vitae::{client::AdsClient, fragment::Curriculum, prelude::*, Config};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let config = Config::load(Config::default_path()?)?;
//!   let client = AdsClient::from_config(&config.api)?;
//!
//!   let curriculum = Curriculum::build(&client, &config).await?;
//!   for path in curriculum.write_to(&config.output.directory)? {
//!     println!("Wrote {}", path.display());
//!   }
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`config`]: The single [`Config`] value that drives a run
//! - [`client`]: The ADS HTTP client and the [`Bibliography`](client::Bibliography) seam
//! - [`record`]: The [`Publication`](record::Publication) record and document types
//! - [`library`]: Fetch-once views of an ADS library
//! - [`metrics`]: Aggregate citation metrics
//! - [`format`]: TeX rendering rules
//! - [`fragment`]: Grouping rendered entries and writing them to disk
//! - [`prelude`]: Common traits and types for ergonomic imports

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  collections::BTreeMap,
  fmt::Display,
  path::{Path, PathBuf},
  str::FromStr,
  time::Duration,
};

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, trace, warn};
#[cfg(test)]
use {tempfile::tempdir, tracing_test::traced_test};

pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod format;
pub mod fragment;
pub mod library;
pub mod metrics;
pub mod record;

pub use crate::config::Config;
use crate::{
  client::Bibliography, config::*, error::*, format::Formatter, library::Library, metrics::Metrics,
  record::*,
};

/// Common traits and types for ergonomic imports.
///
/// ```no_run
/// use vitae::{client::AdsClient, library::Library, prelude::*, Config};
///
/// async fn example() -> Result<(), VitaeError> {
///   let config = Config::default();
///   let client = AdsClient::from_config(&config.api)?;
///   let library = Library::load(&client, &config.libraries.papers).await?;
///   println!("{} records", library.records.len());
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::{client::Bibliography, error::VitaeError};
}
