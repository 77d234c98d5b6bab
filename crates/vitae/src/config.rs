//! Run configuration.
//!
//! A single [`Config`] value carries everything a run needs: who the CV belongs
//! to, which ADS libraries to read, how to reach the API, where to write, and the
//! small set of rendering knobs. It is read from a TOML file whose defaults ship
//! with the crate as [`DEFAULT_CONFIG`].
//!
//! ```
//! use vitae::Config;
//!
//! let config: Config = r#"
//!   [author]
//!   name = "Doe, J."
//!   max_authors = 3
//! "#
//! .parse()
//! .unwrap();
//!
//! assert_eq!(config.author.name, "Doe, J.");
//! assert_eq!(config.author.max_authors, 3);
//! // Everything not given falls back to the defaults
//! assert_eq!(config.format.preprint_venue, "arXiv e-prints");
//! ```

use super::*;

/// The configuration file written by `vitae init`.
pub const DEFAULT_CONFIG: &str = include_str!("../config/vitae.toml");

/// Complete configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
  /// The designated author and the people to highlight
  pub author:    AuthorConfig,
  /// ADS libraries to render
  pub libraries: LibraryConfig,
  /// How to reach the ADS API
  pub api:       ApiConfig,
  /// Where fragments are written
  pub output:    OutputConfig,
  /// Rendering rules that vary between CVs
  pub format:    FormatConfig,
}

/// The designated author and author-list rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorConfig {
  /// Designated author as rendered, e.g. `Yarza, R.`
  pub name:        String,
  /// Rendered names to underline
  pub mentees:     Vec<String>,
  /// Author lists longer than this are truncated with "et al."
  pub max_authors: usize,
}

/// ADS library identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
  /// Library holding articles and preprints
  pub papers:    String,
  /// Library holding everything else; no fragment is written when unset
  pub nonpapers: Option<String>,
}

/// API endpoint, credential, and request settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
  /// Root of the ADS API
  pub base_url:     String,
  /// Prefix for abstract page links, followed by the bibcode
  pub abstract_url: String,
  /// File holding the API token
  pub token_path:   PathBuf,
  /// Per-request timeout in seconds
  pub timeout_secs: u64,
  /// Bibcodes requested per biblib page
  pub page_size:    usize,
}

/// Output location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
  /// Directory receiving the `.tex` fragments
  pub directory: PathBuf,
}

/// Rendering rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
  /// Venue name ADS gives to preprints
  pub preprint_venue: String,
  /// Replacements for abbreviated venue names
  pub venue_aliases:  BTreeMap<String, String>,
  /// Literal title fixes, applied in order after the built-in rules
  pub corrections:    Vec<Correction>,
}

/// One literal title replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
  /// Text to look for
  pub from: String,
  /// Text to put in its place
  pub to:   String,
}

impl Config {
  /// Returns the default location of the configuration file.
  ///
  /// - On Unix: `~/.config/vitae/config.toml`
  /// - On macOS: `~/Library/Application Support/vitae/config.toml`
  /// - On Windows: `%APPDATA%\vitae\config.toml`
  pub fn default_path() -> Result<PathBuf> {
    dirs::config_dir()
      .map(|dir| dir.join("vitae").join("config.toml"))
      .ok_or_else(|| VitaeError::Config("Could not determine a configuration directory".into()))
  }

  /// Reads and validates the configuration file at `path`.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    std::fs::read_to_string(path)?.parse()
  }

  /// Checks the values no run could work with.
  pub fn validate(&self) -> Result<()> {
    if self.author.name.trim().is_empty() {
      return Err(VitaeError::Config("author.name must not be empty".into()));
    }
    if self.author.max_authors < 2 {
      return Err(VitaeError::Config(format!(
        "author.max_authors must be at least 2, got {}",
        self.author.max_authors
      )));
    }
    if self.libraries.papers.trim().is_empty() {
      return Err(VitaeError::Config("libraries.papers must not be empty".into()));
    }
    if self.api.timeout_secs == 0 {
      return Err(VitaeError::Config("api.timeout_secs must be positive".into()));
    }
    if self.api.page_size == 0 {
      return Err(VitaeError::Config("api.page_size must be positive".into()));
    }
    // A correction whose output holds its own pattern would fire again on the next render.
    if let Some(c) =
      self.format.corrections.iter().find(|c| c.from.is_empty() || c.to.contains(&c.from))
    {
      return Err(VitaeError::Config(format!(
        "title correction {:?} -> {:?} is not idempotent",
        c.from, c.to
      )));
    }
    Ok(())
  }
}

impl FromStr for Config {
  type Err = VitaeError;

  fn from_str(s: &str) -> Result<Self> {
    let config: Config = toml::from_str(s)?;
    config.validate()?;
    Ok(config)
  }
}

impl Default for AuthorConfig {
  fn default() -> Self {
    Self {
      name:        "Yarza, R.".into(),
      mentees:     ["Razo-López, N.~B.", "Rosselli-Calderon, A.", "Rohoza, V.", "Kotten, B."]
        .map(String::from)
        .to_vec(),
      max_authors: 5,
    }
  }
}

impl Default for LibraryConfig {
  fn default() -> Self {
    Self {
      papers:    "d7O0jq6KSTqnvppvvHjpjQ".into(),
      nonpapers: Some("GNkwlF-pQ0C0kCEat5Mc2g".into()),
    }
  }
}

impl Default for ApiConfig {
  fn default() -> Self {
    Self {
      base_url:     "https://api.adsabs.harvard.edu/v1".into(),
      abstract_url: "https://ui.adsabs.harvard.edu/abs/".into(),
      token_path:   PathBuf::from("api.key"),
      timeout_secs: 10,
      page_size:    100,
    }
  }
}

impl Default for OutputConfig {
  fn default() -> Self { Self { directory: PathBuf::from("data") } }
}

impl Default for FormatConfig {
  fn default() -> Self {
    Self {
      preprint_venue: "arXiv e-prints".into(),
      venue_aliases:  BTreeMap::from([("zndo".to_string(), "Zenodo".to_string())]),
      corrections:    vec![Correction {
        from: r"\( 1.4 \) M\( _\odot \)".into(),
        to:   r"\( \qty{1.4}{\solarmass} \)".into(),
      }],
    }
  }
}
