//! Module for writing a starting configuration file.

use super::*;

/// Arguments for [`Commands::Init`]
#[derive(Args, Clone)]
pub struct InitOptions {
  /// Where to write the configuration, instead of `--config` or the platform default
  #[arg(long)]
  pub path: Option<PathBuf>,
}

/// Function for the [`Commands::Init`] in the CLI.
pub fn init<I: UserInteraction>(cli: &Cli, interaction: &I, options: InitOptions) -> Result<()> {
  let path = match options.path {
    Some(path) => path,
    None => config_path(cli)?,
  };

  if path.exists()
    && !interaction.confirm(&format!(
      "A configuration already exists at {}. Overwrite it?",
      path.display()
    ))?
  {
    interaction.reply(ResponseContent::Info(
      "Keeping the existing configuration. Pass --path to write one elsewhere.",
    ))?;
    return Ok(());
  }

  write_default(&path)?;
  interaction.reply(ResponseContent::Success(&format!(
    "Created configuration at {}\nPut your ADS API token in the file named by `api.token_path`.",
    path.display()
  )))?;
  Ok(())
}

/// Writes the shipped configuration to `path`, creating parent directories.
fn write_default(path: &Path) -> Result<()> {
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    std::fs::create_dir_all(parent)?;
  }
  std::fs::write(path, DEFAULT_CONFIG)?;
  debug!("Wrote default configuration to {}", path.display());
  Ok(())
}
