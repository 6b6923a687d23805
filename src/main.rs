use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sous::ReplayOptions;

/// sous - recipe builder host
#[derive(Parser)]
#[command(name = "sous")]
#[command(about = "Drive the recipe builder from the command line", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSON script of builder actions and suggestion lookups
    Replay {
        /// Script file: a JSON array of actions and search requests
        #[arg(long)]
        script: PathBuf,

        /// Catalog file answering the lookups (overrides config file)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Print the recipe creation request instead of the builder state
        #[arg(long)]
        payload: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = sous::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    sous::observability::init_observability(
        "sous",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Replay {
            script,
            catalog,
            payload,
        } => replay_command(config, script, catalog, payload).await,
    }
}

#[tracing::instrument(skip(config))]
async fn replay_command(
    config: sous::Config,
    script: PathBuf,
    catalog: Option<PathBuf>,
    payload: bool,
) -> Result<()> {
    let catalog = catalog.or_else(|| config.catalog.path.as_ref().map(PathBuf::from));

    let rendered = sous::replay(ReplayOptions {
        script: &script,
        catalog: catalog.as_deref(),
        payload,
        pretty: config.output.pretty,
    })
    .await?;

    println!("{rendered}");

    Ok(())
}
