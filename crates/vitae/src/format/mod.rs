//! TeX rendering of publication records.
//!
//! A [`Formatter`] is built once from the run's [`Config`] and maps each
//! [`Publication`] to one `\item` line:
//!
//! ```text
//! \item {authors} {year}, \href{{abstract url}{bibcode}}{{link text}}\\\textit{{title}}
//! ```
//!
//! The link text depends on the kind of record. Preprints show their eprint
//! identifier, with `\allowbreak` after each colon; everything else shows the
//! abbreviated venue followed by the volume and page when ADS has them.
//!
//! # Examples
//!
//! ```
//! use vitae::{format::Formatter, record::Publication, Config};
//!
//! let formatter = Formatter::new(&Config::default());
//! let paper = Publication::try_from(serde_json::json!({
//!   "bibcode": "2020ApJ...900...50Y",
//!   "title": ["Hot Accretion Flows"],
//!   "author": ["Yarza, Ricardo", "Doe, Jane"],
//!   "pub": "The Astrophysical Journal",
//!   "bibstem": ["ApJ"],
//!   "year": "2020",
//!   "volume": "900",
//!   "page": ["50"],
//!   "doctype": "article"
//! }))
//! .unwrap();
//!
//! assert_eq!(formatter.link_text(&paper), "ApJ, 900, 50");
//! assert_eq!(
//!   formatter.entry(&paper),
//!   r"\item \textbf{Yarza, R.}, \& Doe, J. 2020, \href{https://ui.adsabs.harvard.edu/abs/2020ApJ...900...50Y}{ApJ, 900, 50}\\\textit{Hot Accretion Flows}"
//! );
//! ```

use super::*;

pub mod author;
pub mod title;

/// Renders records for one CV.
#[derive(Debug, Clone)]
pub struct Formatter {
  /// Designated author, mentees, and truncation limit
  author:       AuthorConfig,
  /// Venue and title rules
  format:       FormatConfig,
  /// Prefix of abstract links
  abstract_url: String,
}

impl Formatter {
  /// Creates a formatter from the run configuration.
  pub fn new(config: &Config) -> Self {
    Self {
      author:       config.author.clone(),
      format:       config.format.clone(),
      abstract_url: config.api.abstract_url.clone(),
    }
  }

  /// The full `\item` line for `publication`.
  pub fn entry(&self, publication: &Publication) -> String {
    let entry = format!(
      "\\item {} {}, \\href{{{}{}}}{{{}}}\\\\\\textit{{{}}}",
      self.authors(&publication.authors),
      publication.year,
      self.abstract_url,
      publication.bibcode,
      self.link_text(publication),
      self.title(&publication.title),
    );
    trace!("{} -> {entry}", publication.bibcode);
    entry
  }

  /// The text of the abstract link.
  ///
  /// A preprint with a page shows the page, breakable after colons. Anything
  /// else shows the aliased short venue, then the volume and page if present.
  pub fn link_text(&self, publication: &Publication) -> String {
    if self.is_preprint(publication) {
      if let Some(page) = &publication.page {
        return page.replace(':', r":\allowbreak ");
      }
    }

    let mut text = self.venue(&publication.short_venue).to_string();
    for part in [&publication.volume, &publication.page].into_iter().flatten() {
      text.push_str(", ");
      text.push_str(part);
    }
    text
  }

  /// Whether a record is set as a preprint.
  pub fn is_preprint(&self, publication: &Publication) -> bool {
    publication.venue == self.format.preprint_venue || publication.doctype == DocType::Eprint
  }

  /// Whether the designated author is the first author of `publication`.
  ///
  /// Extra initials on record still count, as in [`author::is_author`].
  pub fn is_first_author(&self, publication: &Publication) -> bool {
    publication
      .authors
      .first()
      .is_some_and(|first| author::is_author(&author::abbreviate(first), &self.author.name))
  }

  /// The rendered author list.
  pub fn authors(&self, authors: &[String]) -> String { author::author_list(authors, &self.author) }

  /// The rendered title.
  pub fn title(&self, title: &str) -> String { title::tex_title(title, &self.format.corrections) }

  /// The abbreviated venue after applying configured aliases.
  fn venue<'a>(&'a self, short_venue: &'a str) -> &'a str {
    self.format.venue_aliases.get(short_venue).map_or(short_venue, String::as_str)
  }
}
