//! Module for previewing rendered entries.

use super::*;

/// Groups of entries that can be previewed
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryGroup {
  /// Refereed articles from the main library
  Papers,
  /// Preprints from the main library
  Preprints,
  /// Everything in the non-article library
  Nonpapers,
}

/// Arguments for [`Commands::Show`]
#[derive(Args, Clone)]
pub struct ShowOptions {
  /// Which entries to print
  #[arg(value_enum)]
  pub group: EntryGroup,
}

/// Function for the [`Commands::Show`] in the CLI.
///
/// Prints the entries as they would appear in the fragment file. The metrics
/// service is not queried.
pub async fn show<I: UserInteraction>(cli: &Cli, interaction: &I, options: ShowOptions) -> Result<()> {
  let (config, client) = connect(cli)?;
  let formatter = Formatter::new(&config);

  let entries = match options.group {
    EntryGroup::Nonpapers => {
      let id = config
        .libraries
        .nonpapers
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .ok_or(CliError::LibraryUnset("nonpapers"))?;
      let library = Library::load(&client, id).await?;
      Curriculum::render_nonpapers(&formatter, &library)?
    },
    group => {
      let library = Library::load(&client, &config.libraries.papers).await?;
      let curriculum = Curriculum::from_papers(&formatter, &library);
      if group == EntryGroup::Papers {
        curriculum.papers
      } else {
        curriculum.preprints
      }
    },
  };

  if entries.is_empty() {
    return interaction.reply(ResponseContent::Info("No entries"));
  }
  for entry in &entries {
    interaction.reply(ResponseContent::Tex(&format!("{entry}\n\n")))?;
  }
  Ok(())
}
