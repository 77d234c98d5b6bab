//! Module for printing the citation metrics sentence.

use super::*;

/// Function for the [`Commands::Metrics`] in the CLI.
///
/// The records are fetched too, since the first-author count comes from them.
pub async fn metrics<I: UserInteraction>(cli: &Cli, interaction: &I) -> Result<()> {
  let (config, client) = connect(cli)?;
  let library = Library::load_with_metrics(&client, &config.libraries.papers).await?;
  let curriculum = Curriculum::from_papers(&Formatter::new(&config), &library);
  interaction.reply(ResponseContent::Tex(&format!("{}\n", curriculum.metrics_sentence())))
}
