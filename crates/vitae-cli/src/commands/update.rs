//! Module for the full fetch-and-write run.

use super::*;

/// Arguments for [`Commands::Update`]
#[derive(Args, Clone)]
pub struct UpdateOptions {
  /// Directory for the fragments, instead of `output.directory`
  #[arg(long, short)]
  pub output: Option<PathBuf>,
}

/// Function for the [`Commands::Update`] in the CLI.
///
/// Fetches the main library, its metrics, and the non-article library, then
/// writes every fragment. Nothing is written if any request fails.
pub async fn update<I: UserInteraction>(
  cli: &Cli,
  interaction: &I,
  options: UpdateOptions,
) -> Result<()> {
  let (mut config, client) = connect(cli)?;
  if let Some(output) = options.output {
    config.output.directory = output;
  }

  interaction.reply(ResponseContent::Info(&format!(
    "Fetching library {} from {}",
    config.libraries.papers, config.api.base_url
  )))?;
  let curriculum = Curriculum::build(&client, &config).await?;

  let written = curriculum.write_to(&config.output.directory)?;
  interaction.reply(ResponseContent::Success(&format!(
    "{} articles, {} preprints, {} other items; {}",
    curriculum.papers.len(),
    curriculum.preprints.len(),
    curriculum.nonpapers.as_ref().map_or(0, Vec::len),
    curriculum.metrics_sentence()
  )))?;
  interaction.reply(ResponseContent::Written(&written))
}
