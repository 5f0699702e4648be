use super::leave::{create_pin_leave, PinLeave};
use crate::pins::PinSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

pub const FRAMES_PER_GAME: usize = 10;
pub const LAST_FRAME: u8 = 10;

/// Score of a frame (or a running total) that may still be waiting on
/// bonus balls. Serializes as a number or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<u16>", into = "Option<u16>")]
pub enum FrameScore {
    Resolved(u16),
    #[default]
    Pending,
}

impl FrameScore {
    pub fn value(self) -> Option<u16> {
        match self {
            FrameScore::Resolved(v) => Some(v),
            FrameScore::Pending => None,
        }
    }

    pub fn is_pending(self) -> bool {
        matches!(self, FrameScore::Pending)
    }
}

impl From<Option<u16>> for FrameScore {
    fn from(v: Option<u16>) -> Self {
        v.map_or(FrameScore::Pending, FrameScore::Resolved)
    }
}

impl From<FrameScore> for Option<u16> {
    fn from(s: FrameScore) -> Self {
        s.value()
    }
}

impl fmt::Display for FrameScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameScore::Resolved(v) => write!(f, "{}", v),
            FrameScore::Pending => write!(f, ""),
        }
    }
}

/// Opaque label for the format a game was bowled in. The scoring core never
/// branches on it.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    PracticeSpares,
    #[default]
    PracticeFull,
    MatchTraditional,
    MatchBaker,
    League,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub ball_number: u8,
    pub pins_knocked_down: u8,
    pub pinset_before: PinSet,
    pub pinset_after: PinSet,
    #[serde(default)]
    pub is_foul: bool,
    #[serde(default)]
    pub is_gutter: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    #[serde(default)]
    pub game_id: String,
    pub frame_number: u8,
    /// The thrower. In Baker games this differs frame to frame.
    #[serde(default)]
    pub player_id: String,
    #[serde(default)]
    pub balls: Vec<Ball>,
    #[serde(default)]
    pub is_strike: bool,
    #[serde(default)]
    pub is_spare: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_after_ball1: Option<PinLeave>,
    #[serde(default)]
    pub score: FrameScore,
    #[serde(default)]
    pub running_total: FrameScore,
}

impl Frame {
    pub fn new(game_id: &str, frame_number: u8, player_id: &str) -> Self {
        Self {
            game_id: game_id.to_string(),
            frame_number,
            player_id: player_id.to_string(),
            balls: Vec::new(),
            is_strike: false,
            is_spare: false,
            leave_after_ball1: None,
            score: FrameScore::Pending,
            running_total: FrameScore::Pending,
        }
    }

    #[inline]
    pub fn is_last(&self) -> bool {
        self.frame_number == LAST_FRAME
    }

    /// Pin count of the ball at `idx` (0-based), if thrown.
    #[inline]
    pub fn pins(&self, idx: usize) -> Option<u16> {
        self.balls.get(idx).map(|b| b.pins_knocked_down as u16)
    }

    pub fn pin_total(&self) -> u16 {
        self.balls.iter().map(|b| b.pins_knocked_down as u16).sum()
    }

    /// Recomputes strike/spare flags and the ball-1 leave from the balls
    /// currently recorded, matching what live play would have produced.
    pub fn rederive_flags(&mut self) {
        let Some(first) = self.balls.first() else {
            self.is_strike = false;
            self.is_spare = false;
            self.leave_after_ball1 = None;
            return;
        };

        let b1 = first.pins_knocked_down as u16;
        self.is_strike = b1 == 10;
        self.is_spare = !self.is_strike && self.pins(1).is_some_and(|b2| b1 + b2 == 10);

        let converted = self.is_spare && !self.is_last();
        self.leave_after_ball1 = Some(if self.is_strike {
            create_pin_leave(PinSet::EMPTY, false)
        } else {
            create_pin_leave(first.pinset_after, converted)
        });
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    #[serde(default)]
    pub session_id: String,
    /// The bowler, or the team id for Baker games.
    pub player_id: String,
    #[serde(default)]
    pub mode: GameMode,
    pub total_score: u16,
    #[serde(default)]
    pub is_complete: bool,
    /// Ordering key; larger is newer.
    #[serde(default)]
    pub created_at: u64,
}
