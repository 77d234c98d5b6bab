//! Grouping rendered entries into the fragments a CV includes.
//!
//! | fragment    | file            | content                                        |
//! |-------------|-----------------|------------------------------------------------|
//! | papers      | `papers.tex`    | main-library records of type `article`         |
//! | preprints   | `preprints.tex` | main-library records of type `eprint`          |
//! | metrics     | `metrics.tex`   | the metrics sentence, without a final newline  |
//! | nonpapers   | `nonpapers.tex` | every record of the non-article library        |
//!
//! Entry fragments hold each entry followed by a blank line.

use super::*;

/// One output fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
  /// Refereed articles
  Papers,
  /// Preprints
  Preprints,
  /// The citation metrics sentence
  Metrics,
  /// Conference abstracts, software, and other non-article items
  NonPapers,
}

impl Group {
  /// Every group, in the order fragments are written.
  pub const ALL: [Group; 4] = [Group::Papers, Group::Preprints, Group::Metrics, Group::NonPapers];

  /// Name of the file holding this fragment.
  pub fn file_name(&self) -> &'static str {
    match self {
      Group::Papers => "papers.tex",
      Group::Preprints => "preprints.tex",
      Group::Metrics => "metrics.tex",
      Group::NonPapers => "nonpapers.tex",
    }
  }
}

impl Display for Group {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Group::Papers => write!(f, "papers"),
      Group::Preprints => write!(f, "preprints"),
      Group::Metrics => write!(f, "metrics"),
      Group::NonPapers => write!(f, "nonpapers"),
    }
  }
}

/// Everything a run writes, rendered and grouped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Curriculum {
  /// Article entries
  pub papers:       Vec<String>,
  /// Preprint entries
  pub preprints:    Vec<String>,
  /// Number of main-library records led by the designated author
  pub first_author: usize,
  /// Metrics of the main library
  pub metrics:      Metrics,
  /// Non-article entries; `None` when no such library is configured
  pub nonpapers:    Option<Vec<String>>,
}

impl Curriculum {
  /// Fetches both libraries and renders every fragment.
  ///
  /// The main library is loaded with its metrics; the non-article library, if
  /// configured, is loaded after it.
  pub async fn build(api: &impl Bibliography, config: &Config) -> Result<Self> {
    let formatter = Formatter::new(config);

    let papers = Library::load_with_metrics(api, &config.libraries.papers).await?;
    let mut curriculum = Self::from_papers(&formatter, &papers);

    if let Some(id) = config.libraries.nonpapers.as_deref().filter(|id| !id.trim().is_empty()) {
      let nonpapers = Library::load(api, id).await?;
      curriculum.nonpapers = Some(Self::render_nonpapers(&formatter, &nonpapers)?);
    }

    Ok(curriculum)
  }

  /// Renders the article, preprint, and metrics fragments of the main library.
  ///
  /// Records of any other type count toward the first-author total but are not
  /// rendered.
  pub fn from_papers(formatter: &Formatter, library: &Library) -> Self {
    let mut curriculum = Self { metrics: library.metrics.unwrap_or_default(), ..Self::default() };

    for record in &library.records {
      if formatter.is_first_author(record) {
        curriculum.first_author += 1;
      }
      match record.doctype {
        DocType::Article => curriculum.papers.push(formatter.entry(record)),
        DocType::Eprint => curriculum.preprints.push(formatter.entry(record)),
        DocType::Other(ref other) => {
          debug!("Skipping {} in library {}: document type {other}", record.bibcode, library.id)
        },
      }
    }

    debug!(
      "Library {}: {} articles, {} preprints, {} first-author",
      library.id,
      curriculum.papers.len(),
      curriculum.preprints.len(),
      curriculum.first_author
    );
    curriculum
  }

  /// Renders every record of the non-article library.
  ///
  /// # Errors
  ///
  /// Returns [`VitaeError::UnexpectedDocType`] if the library holds an article.
  pub fn render_nonpapers(formatter: &Formatter, library: &Library) -> Result<Vec<String>> {
    library
      .records
      .iter()
      .map(|record| {
        if record.doctype == DocType::Article {
          return Err(VitaeError::UnexpectedDocType {
            bibcode: record.bibcode.clone(),
            doctype: record.doctype.to_string(),
            group:   Group::NonPapers.to_string(),
          });
        }
        Ok(formatter.entry(record))
      })
      .collect()
  }

  /// The metrics sentence.
  pub fn metrics_sentence(&self) -> String { self.metrics.sentence(self.first_author) }

  /// Text of one fragment, or `None` for a group that was not rendered.
  pub fn fragment(&self, group: Group) -> Option<String> {
    match group {
      Group::Papers => Some(join_entries(&self.papers)),
      Group::Preprints => Some(join_entries(&self.preprints)),
      Group::Metrics => Some(self.metrics_sentence()),
      Group::NonPapers => self.nonpapers.as_deref().map(join_entries),
    }
  }

  /// Writes every rendered fragment into `dir`, creating it if needed.
  ///
  /// Existing files are overwritten. Returns the paths written, in
  /// [`Group::ALL`] order.
  pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for group in Group::ALL {
      let Some(contents) = self.fragment(group) else {
        debug!("No {group} fragment to write");
        continue;
      };
      let path = dir.join(group.file_name());
      std::fs::write(&path, contents)?;
      info!("Wrote {group} to {}", path.display());
      written.push(path);
    }
    Ok(written)
  }
}

/// Each entry followed by a blank line.
fn join_entries(entries: &[String]) -> String {
  entries.iter().map(|entry| format!("{entry}\n\n")).collect()
}
