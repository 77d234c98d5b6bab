//! The ADS API token.

use super::*;

/// Bearer token sent with every ADS request.
///
/// The token is read once, from a local file, when a client is built. Its
/// `Debug` output is redacted so it never lands in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
  /// Reads the token from `path`, trimming surrounding whitespace.
  ///
  /// # Errors
  ///
  /// Returns [`VitaeError::MissingToken`] if the file does not exist or holds
  /// nothing but whitespace, and [`VitaeError::Path`] if it cannot be read.
  pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!("Reading API token from {}", path.display());
    let token = match std::fs::read_to_string(path) {
      Ok(contents) => contents.trim().to_string(),
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
      Err(e) => return Err(e.into()),
    };
    if token.is_empty() {
      return Err(VitaeError::MissingToken(path.to_path_buf()));
    }
    Ok(Self(token))
  }

  /// The value of the `Authorization` header.
  pub fn bearer(&self) -> String { format!("Bearer {}", self.0) }
}

impl From<&str> for Token {
  fn from(token: &str) -> Self { Self(token.trim().to_string()) }
}

impl std::fmt::Debug for Token {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str("Token(<redacted>)")
  }
}
