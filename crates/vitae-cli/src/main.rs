//! Command line front end for the `vitae` CV publication fetcher.
//!
//! This crate provides the `vitae` binary, which reads the ADS libraries named
//! in a configuration file and writes the TeX fragments a CV includes. It
//! supports:
//! - Writing a starting configuration file
//! - Fetching both libraries and writing every fragment
//! - Printing the citation metrics sentence
//! - Previewing one group of entries without touching the output directory
//!
//! # Usage
//!
//! ```bash
//! # Write the default configuration to the platform config directory
//! vitae init
//!
//! # Fetch everything and write data/*.tex
//! vitae update
//!
//! # Write the fragments somewhere else
//! vitae update --output build/cv
//!
//! # Print the metrics line
//! vitae metrics
//!
//! # Preview the preprint entries
//! vitae show preprints
//! ```
//!
//! Verbosity is raised with repeated `-v` flags; `RUST_LOG` overrides it.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use clap::{builder::ArgAction, Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;
use vitae::{
  client::AdsClient, config::DEFAULT_CONFIG, error::VitaeError, format::Formatter,
  fragment::Curriculum, library::Library, Config,
};

pub mod commands;
pub mod error;
pub mod interaction;

use crate::{commands::*, error::*, interaction::*};

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Render ADS publication lists and metrics as CV fragments")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to the configuration file. If not specified, uses `vitae/config.toml` in the platform
  /// configuration directory.
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  /// Path to the file holding the ADS API token, overriding `api.token_path`
  #[arg(long, global = true)]
  token: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Option<Commands>,

  /// Skip all prompts and accept defaults (mostly for testing)
  #[arg(long, hide = true, global = true)]
  accept_defaults: bool,
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: warn (default)
/// - 1: info
/// - 2: debug
/// - 3+: trace
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Entry point for the `vitae` CLI application
///
/// Parses arguments, sets up logging, and runs the requested command. Requests
/// to ADS are awaited one at a time, so a single-threaded runtime is enough.
/// Any failure is reported on stderr and ends the process with status 1.
#[tokio::main(flavor = "current_thread")]
async fn main() {
  let cli = Cli::parse();

  let Some(command) = cli.command.clone() else {
    println!("Please specify a command. Use --help for usage information.");
    std::process::exit(1);
  };

  setup_logging(cli.verbose);
  trace!("Parsed command line");

  let interaction = Terminal::new(cli.accept_defaults);
  let result = match command {
    Commands::Init(options) => init(&cli, &interaction, options),
    Commands::Update(options) => update(&cli, &interaction, options).await,
    Commands::Metrics => metrics(&cli, &interaction).await,
    Commands::Show(options) => show(&cli, &interaction, options).await,
  };

  if let Err(e) = result {
    debug!("Command failed: {e:?}");
    let _ = interaction.reply(ResponseContent::Error(&e));
    std::process::exit(1);
  }
}
