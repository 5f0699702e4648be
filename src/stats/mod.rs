//! Aggregate statistics over completed games.

pub mod drills;
pub mod heatmap;
pub mod player;
pub mod team;
pub mod window;

pub use self::drills::{drill_catalog, find_drill, DrillDifficulty, DrillSession, SpareDrill};
pub use self::heatmap::{Heat, PinHeatmap};
pub use self::player::{
    calculate_player_stats, calculate_player_stats_with, calculate_session_stats, LeaveStats,
    PlayerStats,
};
pub use self::team::{calculate_team_stats, TeamStats};
pub use self::window::{frames_for_games, select_window};

/// Rounds to one decimal place.
#[inline]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
