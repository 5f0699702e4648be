use super::print_json;
use crate::reports;
use clap::Args;
use serde::Serialize;
use strikeline::config::StatsConfig;
use strikeline::error::SlResult;
use strikeline::loader::load_history;
use strikeline::stats::{
    calculate_player_stats_with, frames_for_games, select_window, PinHeatmap, PlayerStats,
};
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub config: StatsConfig,

    #[arg(long)]
    pub history: String,

    #[arg(long)]
    pub player: String,
}

#[derive(Debug, Serialize)]
struct StatsReport<'a> {
    stats: &'a PlayerStats,
    heatmap: &'a PinHeatmap,
}

pub fn run(args: &StatsArgs, config: &StatsConfig, json: bool) -> SlResult<()> {
    let history = load_history(&args.history)?;

    let games = select_window(&history.games, &args.player, config);
    if games.is_empty() {
        warn!("No games found for player '{}'", args.player);
    }
    let frames = frames_for_games(&games, &history.frames);
    info!(
        "Computing stats for {} over {} games",
        args.player,
        games.len()
    );

    let stats = calculate_player_stats_with(&games, &frames, config);
    let heatmap = PinHeatmap::from_leaves(&stats.common_leaves);

    if json {
        return print_json(&StatsReport {
            stats: &stats,
            heatmap: &heatmap,
        });
    }

    reports::print_player_stats(&stats);
    reports::print_common_leaves(&stats.common_leaves);
    reports::print_heatmap(&heatmap);
    Ok(())
}
