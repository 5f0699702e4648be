use super::print_json;
use crate::reports;
use clap::Args;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use strikeline::config::StatsConfig;
use strikeline::error::SlResult;
use strikeline::loader::load_history;
use strikeline::stats::{
    calculate_player_stats_with, calculate_team_stats, frames_for_games, select_window,
    PlayerStats, TeamStats,
};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct TeamArgs {
    #[command(flatten)]
    pub config: StatsConfig,

    #[arg(long)]
    pub history: String,

    /// Team members, comma separated. Defaults to every player in the file.
    #[arg(long, value_delimiter = ',')]
    pub players: Vec<String>,
}

#[derive(Debug, Serialize)]
struct TeamReport<'a> {
    players: &'a BTreeMap<String, PlayerStats>,
    team: &'a TeamStats,
}

pub fn run(args: &TeamArgs, config: &StatsConfig, json: bool) -> SlResult<()> {
    let history = load_history(&args.history)?;
    let players = if args.players.is_empty() {
        history.player_ids()
    } else {
        args.players.clone()
    };
    info!("Computing team stats for {} players", players.len());

    let by_player: BTreeMap<String, PlayerStats> = players
        .par_iter()
        .map(|player| {
            let games = select_window(&history.games, player, config);
            let frames = frames_for_games(&games, &history.frames);
            let mut stats = calculate_player_stats_with(&games, &frames, config);
            // A player with no games still reports under their own id.
            stats.player_id = player.clone();
            (player.clone(), stats)
        })
        .collect();

    let team = calculate_team_stats(&by_player);

    if json {
        return print_json(&TeamReport {
            players: &by_player,
            team: &team,
        });
    }

    let rows: Vec<PlayerStats> = players
        .iter()
        .filter_map(|p| by_player.get(p).cloned())
        .collect();
    reports::print_team_report(&rows, &team);
    Ok(())
}
