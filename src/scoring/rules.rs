use super::types::{Frame, FRAMES_PER_GAME, LAST_FRAME};
use crate::error::{SlResult, StrikelineError};
use std::collections::BTreeMap;

pub const BAKER_PLAYERS: usize = 5;

/// Number of balls a finished frame must hold. `is_last` selects the
/// tenth-frame rule.
pub fn required_balls(frame: &Frame, is_last: bool) -> usize {
    match (is_last, frame.is_strike, frame.is_spare) {
        (false, true, _) => 1,
        (false, false, _) => 2,
        (true, true, _) | (true, _, true) => 3,
        (true, false, false) => 2,
    }
}

pub fn is_game_complete(frames: &[Frame]) -> bool {
    frames.len() == FRAMES_PER_GAME
        && frames
            .iter()
            .enumerate()
            .all(|(i, frame)| frame.balls.len() == required_balls(frame, i + 1 == FRAMES_PER_GAME))
}

/// Baker format: five bowlers take turns, one frame each, wrapping at frame 6.
/// Players past the fifth are ignored.
pub fn baker_rotation<S: AsRef<str>>(player_ids: &[S]) -> SlResult<BTreeMap<u8, String>> {
    if player_ids.len() < BAKER_PLAYERS {
        return Err(StrikelineError::Validation(format!(
            "Baker rotation needs {} players, got {}",
            BAKER_PLAYERS,
            player_ids.len()
        )));
    }

    Ok((1..=LAST_FRAME)
        .map(|frame| {
            let idx = (frame as usize - 1) % BAKER_PLAYERS;
            (frame, player_ids[idx].as_ref().to_string())
        })
        .collect())
}
