//! Argument parsing tests

use super::*;
use clap::Parser;

fn cluster_args(argv: &[&str]) -> ClusterArgs {
    let app = NbaClusters::try_parse_from(argv).unwrap();
    match app.command {
        Commands::Cluster { args, .. } => args,
        other => panic!("Expected cluster command, got {:?}", other),
    }
}

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn test_cluster_defaults_match_pipeline_defaults() {
        let config = cluster_args(&["nba-clusters", "cluster"]).into_config().unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn test_cluster_flags() {
        let args = cluster_args(&[
            "nba-clusters",
            "cluster",
            "--season",
            "2019-20",
            "-n",
            "20",
            "--min-k",
            "3",
            "--max-k",
            "5",
            "-f",
            "PTS",
            "-f",
            "AST",
            "--delay-secs",
            "0.5",
            "--unseeded",
            "--skip-incomplete",
            "--per-mode",
            "per36",
        ]);

        let config = args.into_config().unwrap();
        assert_eq!(config.season, Season::new(2019));
        assert_eq!(config.sample_size, 20);
        assert_eq!(config.features, vec!["PTS".to_string(), "AST".to_string()]);
        assert_eq!(config.delay, Duration::from_millis(500));
        assert_eq!(config.selector.min_clusters, 3);
        assert_eq!(config.selector.max_clusters, 5);
        assert_eq!(config.selector.seed, None);
        assert!(config.skip_incomplete);
        assert_eq!(config.per_mode, PerMode::Per36);
    }

    #[test]
    fn test_seed_conflicts_with_unseeded() {
        let result =
            NbaClusters::try_parse_from(["nba-clusters", "cluster", "--seed", "7", "--unseeded"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_delay_rejected() {
        let args = cluster_args(&["nba-clusters", "cluster", "--delay-secs=-1"]);
        assert!(matches!(
            args.into_config(),
            Err(crate::NbaError::InvalidParameter {
                name: "delay-secs",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_season_rejected() {
        assert!(NbaClusters::try_parse_from(["nba-clusters", "roster", "-s", "2016"]).is_err());
    }

    #[test]
    fn test_stats_command() {
        let app = NbaClusters::try_parse_from([
            "nba-clusters",
            "--base-url",
            "http://localhost:9000",
            "stats",
            "-p",
            "201939",
        ])
        .unwrap();

        assert_eq!(app.api.base_url.as_deref(), Some("http://localhost:9000"));
        match app.command {
            Commands::Stats {
                player_id,
                per_mode,
                json,
            } => {
                assert_eq!(player_id, PlayerId::new(201939));
                assert_eq!(per_mode, PerMode::PerGame);
                assert!(!json);
            }
            other => panic!("Expected stats command, got {:?}", other),
        }
    }

    #[test]
    fn test_roster_filter_flags() {
        let app = NbaClusters::try_parse_from([
            "nba-clusters",
            "roster",
            "--min-to-year",
            "2020",
            "--include-no-games",
        ])
        .unwrap();

        match app.command {
            Commands::Roster { roster, .. } => {
                assert_eq!(
                    roster.filter(),
                    RosterFilter {
                        min_to_year: 2020,
                        require_games_played: false,
                    }
                );
            }
            other => panic!("Expected roster command, got {:?}", other),
        }
    }
}
