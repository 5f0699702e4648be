use super::player::PlayerStats;
use super::round1;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamStats {
    pub average_score: f64,
    pub high_game: u16,
    pub strike_percentage: f64,
    pub spare_percentage: f64,
}

/// Unweighted mean over players: a bowler with three games counts as much
/// as one with thirty.
pub fn calculate_team_stats(player_stats: &BTreeMap<String, PlayerStats>) -> TeamStats {
    if player_stats.is_empty() {
        return TeamStats::default();
    }

    let n = player_stats.len() as f64;
    let mean = |field: fn(&PlayerStats) -> f64| player_stats.values().map(field).sum::<f64>() / n;

    TeamStats {
        average_score: round1(mean(|s| s.average_score)),
        high_game: player_stats
            .values()
            .map(|s| s.high_game)
            .max()
            .unwrap_or(0),
        strike_percentage: round1(mean(|s| s.strike_percentage)),
        spare_percentage: round1(mean(|s| s.spare_percentage)),
    }
}
