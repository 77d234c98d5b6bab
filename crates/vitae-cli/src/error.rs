//! Errors surfaced by the `vitae` binary.

use thiserror::Error;

use super::*;

/// Everything that can end a CLI run.
#[derive(Error, Debug)]
pub enum CliError {
  /// Failure inside the library: configuration, network, or rendering
  #[error(transparent)]
  Vitae(#[from] VitaeError),

  /// File system failure in the CLI itself
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// Failure reading an interactive answer
  #[error(transparent)]
  Dialoguer(#[from] dialoguer::Error),

  /// The configuration file does not exist
  #[error("No configuration found at {0:?}. Run `vitae init` to create one.")]
  ConfigMissing(PathBuf),

  /// A command needs a library the configuration leaves unset
  #[error("No {0} library is configured")]
  LibraryUnset(&'static str),
}

/// Result type for CLI commands.
pub type Result<T> = core::result::Result<T, CliError>;
