mod render;
mod search;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::search::SearchArgs;

#[derive(Debug, Parser)]
#[command(name = "fffinder")]
#[command(about = "Search the mobile food facility permit directory")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load the permit dataset and list facilities matching a query
    Search(SearchArgs),
    /// List the permit status values accepted by `search --status`
    Statuses,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = fffinder_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search(args)) => search::run_search(&config, &args).await,
        Some(Commands::Statuses) => render::print_statuses(&mut std::io::stdout().lock()),
        None => search::run_search(&config, &SearchArgs::default()).await,
    }
}
