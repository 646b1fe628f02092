//! Cluster command implementation: the full fetch, sample, cluster and
//! report pipeline.

use tracing::info;

use crate::{
    cluster::{select_clusters_with, FeatureMatrix},
    config::PipelineConfig,
    core::Progress,
    error::NbaError,
    nba::{collect_player_stats, fetch_roster, types::columns, StatsRequest},
    report::ClusterReport,
    Result,
};

use super::common::{filter_roster, sample_rows, write_output, ApiContext};

/// Handle the cluster command
pub async fn handle_cluster(
    ctx: &ApiContext,
    config: &PipelineConfig,
    as_json: bool,
) -> Result<()> {
    let report = run_pipeline(ctx, config, Progress::for_output(as_json)).await?;
    write_output(as_json, &report, &report.to_string())
}

/// Fetch the roster, sample eligible players, pull their career stats and
/// pick the best clustering of `config.features`.
pub async fn run_pipeline(
    ctx: &ApiContext,
    config: &PipelineConfig,
    progress: Progress,
) -> Result<ClusterReport> {
    let roster = fetch_roster(&ctx.client, &ctx.base_url, &ctx.headers, config.season).await?;
    let eligible = filter_roster(&roster, &config.roster)?;
    if eligible.is_empty() {
        return Err(NbaError::NoData);
    }

    let players = sample_rows(&eligible, config.sample_size, config.selector.seed);
    info!(
        roster = roster.len(),
        eligible = eligible.len(),
        sampled = players.len(),
        "roster ready"
    );
    progress.line(format!(
        "Got {} players playing up to {}. Change this with --sample-size.",
        players.len(),
        config.roster.min_to_year
    ));

    let request = StatsRequest {
        client: &ctx.client,
        base_url: &ctx.base_url,
        headers: &ctx.headers,
        per_mode: config.per_mode,
        delay: config.delay,
    };
    let joined = collect_player_stats(&request, &players, progress).await?;

    let features = FeatureMatrix::from_table(
        &joined,
        &config.features,
        columns::PERSON_ID,
        config.skip_incomplete,
    )?;

    let selection = select_clusters_with(&features.rows, &config.selector, |candidate| {
        progress.line(format!(
            "The avg silhouette score for {} clusters is {}",
            candidate.n_clusters, candidate.score
        ));
    })?;
    progress.line(format!(
        "Returning optimal clusters found with n={}",
        selection.n_clusters
    ));

    ClusterReport::build(&joined, &features, &selection)
}
