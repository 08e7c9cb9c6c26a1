//! CLI for the devlist developer search client.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use devlist_core::config;

use commands::{run_config, run_list, ListArgs};

/// Top-level CLI for devlist.
#[derive(Debug, Parser)]
#[command(name = "devlist")]
#[command(about = "devlist: list developers from a user-search API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the developer list and print it.
    List {
        /// Query this URL instead of the configured endpoint.
        #[arg(long, value_name = "URL")]
        url: Option<String>,

        /// Print records as a JSON array instead of a table.
        #[arg(long)]
        json: bool,

        /// API token for this run (overrides `auth_token` from the config file).
        #[arg(long, value_name = "TOKEN")]
        token: Option<String>,
    },

    /// Show the config file location and effective settings.
    Config,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config for endpoint {}", cfg.endpoint);

        match cli.command {
            CliCommand::List { url, json, token } => {
                run_list(&cfg, ListArgs { url, json, token }).await?
            }
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}
