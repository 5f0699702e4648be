use clap::{Args, Command, FromArgMatches};
use std::io::Write;
use strikeline::config::StatsConfig;
use strikeline::error::StrikelineError;
use tempfile::NamedTempFile;

fn parse(args: &[&str]) -> (StatsConfig, clap::ArgMatches) {
    let cmd = StatsConfig::augment_args(Command::new("test"));
    let matches = cmd.try_get_matches_from(args).unwrap();
    let config = StatsConfig::from_arg_matches(&matches).unwrap();
    (config, matches)
}

#[test]
fn test_defaults_match_cli_defaults() {
    let (cli, _) = parse(&["test"]);
    assert_eq!(cli, StatsConfig::default());
    assert_eq!(cli.game_limit, 30);
    assert_eq!(cli.leave_limit, 10);
    assert!(cli.require_complete);
}

#[test]
fn test_partial_file_fills_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{ "game_limit": 5 }}"#).unwrap();

    let config = StatsConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.game_limit, 5);
    assert_eq!(config.leave_limit, 10);
    assert!(config.require_complete);
}

#[test]
fn test_explicit_flags_override_file_values() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{ "game_limit": 5, "leave_limit": 3 }}"#).unwrap();
    let mut config = StatsConfig::load_from_file(file.path()).unwrap();

    let (cli, matches) = parse(&["test", "--leave-limit", "7", "--require-complete", "false"]);
    config.merge_from_cli(&cli, &matches);

    // Defaulted by clap, so the file value stands.
    assert_eq!(config.game_limit, 5);
    assert_eq!(config.leave_limit, 7);
    assert!(!config.require_complete);
}

#[test]
fn test_zero_game_limit_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{ "game_limit": 0 }}"#).unwrap();
    assert!(matches!(
        StatsConfig::load_from_file(file.path()),
        Err(StrikelineError::Config(_))
    ));
}

#[test]
fn test_missing_config_file_is_a_config_error() {
    assert!(matches!(
        StatsConfig::load_from_file("/no/such/config.json"),
        Err(StrikelineError::Config(_))
    ));
}
