use crate::config::StatsConfig;
use crate::scoring::{Frame, Game};
use std::collections::HashSet;
use tracing::debug;

/// A player's most recent games, newest first, capped at `game_limit`.
/// Games sharing a `created_at` keep their input order.
pub fn select_window(games: &[Game], player_id: &str, config: &StatsConfig) -> Vec<Game> {
    let mut selected: Vec<Game> = games
        .iter()
        .filter(|g| g.player_id == player_id)
        .filter(|g| g.is_complete || !config.require_complete)
        .cloned()
        .collect();

    selected.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    selected.truncate(config.game_limit);

    debug!(
        player = player_id,
        candidates = games.len(),
        selected = selected.len(),
        "game window selected"
    );
    selected
}

/// Frames belonging to `games`, in their original order.
pub fn frames_for_games(games: &[Game], frames: &[Frame]) -> Vec<Frame> {
    let ids: HashSet<&str> = games.iter().map(|g| g.id.as_str()).collect();
    frames
        .iter()
        .filter(|f| ids.contains(f.game_id.as_str()))
        .cloned()
        .collect()
}
