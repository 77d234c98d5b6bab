use super::*;

pub mod init;
pub mod metrics;
pub mod show;
pub mod update;

pub use init::{init, InitOptions};
pub use metrics::metrics;
pub use show::{show, ShowOptions};
pub use update::{update, UpdateOptions};

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Write a default configuration file
  Init(InitOptions),

  /// Fetch both libraries and write every fragment
  Update(UpdateOptions),

  /// Print the citation metrics sentence of the main library
  Metrics,

  /// Print the rendered entries of one group without writing files
  Show(ShowOptions),
}

/// Where the configuration lives for this invocation.
pub fn config_path(cli: &Cli) -> Result<PathBuf> {
  match &cli.config {
    Some(path) => Ok(path.clone()),
    None => Ok(Config::default_path()?),
  }
}

/// Loads the configuration and applies command-line overrides.
pub fn load_config(cli: &Cli) -> Result<Config> {
  let path = config_path(cli)?;
  if !path.exists() {
    return Err(CliError::ConfigMissing(path));
  }
  debug!("Loading configuration from {}", path.display());

  let mut config = Config::load(&path)?;
  if let Some(token) = &cli.token {
    config.api.token_path = token.clone();
  }
  Ok(config)
}

/// Loads the configuration and builds an ADS client from it.
pub fn connect(cli: &Cli) -> Result<(Config, AdsClient)> {
  let config = load_config(cli)?;
  let client = AdsClient::from_config(&config.api)?;
  Ok((config, client))
}
