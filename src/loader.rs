use crate::error::{SlResult, StrikelineError};
use crate::scoring::{Frame, Game};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Recorded games and their frames, as read from a history file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct History {
    pub games: Vec<Game>,
    pub frames: Vec<Frame>,
}

impl History {
    pub fn game(&self, id: &str) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    /// Frames of one game in frame order.
    pub fn frames_of(&self, game_id: &str) -> Vec<Frame> {
        let mut frames: Vec<Frame> = self
            .frames
            .iter()
            .filter(|f| f.game_id == game_id)
            .cloned()
            .collect();
        frames.sort_by_key(|f| f.frame_number);
        frames
    }

    /// Distinct player ids in first-seen order.
    pub fn player_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.games
            .iter()
            .filter(|g| seen.insert(g.player_id.as_str()))
            .map(|g| g.player_id.clone())
            .collect()
    }
}

pub fn load_history<P: AsRef<Path>>(path: P) -> SlResult<History> {
    let path = path.as_ref();
    debug!("Loading history from {}", path.display());

    let content = fs::read_to_string(path)?;
    let history: History = serde_json::from_str(&content)?;
    validate_history(&history)?;

    info!(
        "Loaded {} games and {} frames from {}",
        history.games.len(),
        history.frames.len(),
        path.display()
    );
    Ok(history)
}

fn validate_history(history: &History) -> SlResult<()> {
    let mut ids = HashSet::new();
    for game in &history.games {
        if !ids.insert(game.id.as_str()) {
            return Err(StrikelineError::Validation(format!(
                "duplicate game id '{}'",
                game.id
            )));
        }
    }

    for frame in &history.frames {
        if !(1..=10).contains(&frame.frame_number) {
            return Err(StrikelineError::Validation(format!(
                "game '{}' has frame number {}",
                frame.game_id, frame.frame_number
            )));
        }
    }

    let orphans = history
        .frames
        .iter()
        .filter(|f| !ids.contains(f.game_id.as_str()))
        .count();
    if orphans > 0 {
        warn!("{} frames reference unknown games and will be ignored", orphans);
    }
    Ok(())
}
