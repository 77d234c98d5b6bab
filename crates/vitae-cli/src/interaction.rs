//! Talking to the person at the terminal.
//!
//! Commands never print directly; they hand a [`ResponseContent`] to a
//! [`UserInteraction`]. Status lines go to stderr so that rendered TeX on
//! stdout can be piped.

use console::style;
use dialoguer::Confirm;

use super::*;

/// Prefix for information messages
pub static INFO_PREFIX: &str = "ℹ ";
/// Prefix for success messages
pub static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for error messages
pub static ERROR_PREFIX: &str = "✗ ";
/// Prefix for items in a list
pub static ITEM_PREFIX: &str = "├─";
/// Prefix for the last item in a list
pub static LAST_ITEM_PREFIX: &str = "└─";

/// What a command wants to tell the user.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// Rendered TeX, printed verbatim to stdout
  Tex(&'a str),
  /// Files that were written
  Written(&'a [PathBuf]),
  /// A finished step
  Success(&'a str),
  /// A failure that ends the run
  Error(&'a CliError),
  /// Progress or hints
  Info(&'a str),
}

/// The seam between commands and the terminal.
pub trait UserInteraction {
  /// Asks a yes/no question.
  fn confirm(&self, message: &str) -> Result<bool>;
  /// Shows `content` to the user.
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

/// Interaction through the process's standard streams.
pub struct Terminal {
  /// Answer every question with its default instead of prompting
  accept_defaults: bool,
}

impl Terminal {
  /// Creates a terminal interaction.
  pub fn new(accept_defaults: bool) -> Self { Self { accept_defaults } }
}

impl UserInteraction for Terminal {
  fn confirm(&self, message: &str) -> Result<bool> {
    if self.accept_defaults {
      return Ok(true);
    }
    Ok(Confirm::new().with_prompt(message).default(false).wait_for_newline(true).interact()?)
  }

  fn reply(&self, content: ResponseContent) -> Result<()> {
    match content {
      ResponseContent::Tex(tex) => print!("{tex}"),
      ResponseContent::Written(paths) => {
        for (i, path) in paths.iter().enumerate() {
          let prefix = if i + 1 == paths.len() { LAST_ITEM_PREFIX } else { ITEM_PREFIX };
          eprintln!("{} {}", style(prefix).dim(), style(path.display()).yellow());
        }
      },
      ResponseContent::Success(message) => {
        eprintln!("{} {}", style(SUCCESS_PREFIX).green(), message)
      },
      ResponseContent::Error(error) => eprintln!("{} {}", style(ERROR_PREFIX).red(), error),
      ResponseContent::Info(message) => eprintln!("{} {}", style(INFO_PREFIX).cyan(), message),
    }
    Ok(())
  }
}
