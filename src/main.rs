//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use nba_clusters::{
    cli::{Commands, NbaClusters},
    commands::{
        cluster::handle_cluster, roster::handle_roster, stats::handle_stats, ApiContext,
    },
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let app = NbaClusters::parse();
    let ctx = ApiContext::new(app.api.base_url, app.api.user_agent)
        .context("failed to set up the stats.nba.com client")?;

    match app.command {
        Commands::Roster { roster, json } => {
            handle_roster(&ctx, roster.season, roster.filter(), json).await?
        }

        Commands::Stats {
            player_id,
            per_mode,
            json,
        } => handle_stats(&ctx, player_id, per_mode, json)
            .await
            .with_context(|| format!("failed to fetch career stats for player {}", player_id))?,

        Commands::Cluster { args, json } => {
            let config = args.into_config()?;
            handle_cluster(&ctx, &config, json).await?
        }
    }

    Ok(())
}
