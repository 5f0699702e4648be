//! Live score entry as an immutable state machine.
//!
//! A [`GameState`] is never mutated in place: [`GameState::record_ball`] and
//! [`GameState::undo`] return the next state, so callers can keep the old one
//! around (for redo, diffing, or property tests).

use crate::error::{SlResult, StrikelineError};
use crate::pins::PinSet;
use crate::scoring::{
    apply_scores, create_pin_leave, final_score, is_game_complete, Ball, Frame, Game, GameMode,
    LAST_FRAME,
};
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::{debug, warn};

/// One ball as entered by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Throw {
    /// The pins left standing after the ball. An empty set clears the deck.
    Leave(PinSet),
    /// Nothing went down.
    Miss,
    /// Foul line crossed: no credit, deck unchanged.
    Foul,
    /// Ball left the lane: no pins, deck unchanged.
    Gutter,
}

impl Throw {
    pub const CLEAR: Throw = Throw::Leave(PinSet::EMPTY);

    /// Rejects a leave that names pins which were not standing.
    pub fn validate(&self, standing: PinSet) -> SlResult<()> {
        if let Throw::Leave(after) = self {
            if !after.is_subset(standing) {
                return Err(StrikelineError::Throw(format!(
                    "pins {} are not standing (standing: {})",
                    after.difference(standing),
                    standing
                )));
            }
        }
        Ok(())
    }
}

impl FromStr for Throw {
    type Err = StrikelineError;

    /// `X` or `/` clear the deck, `-` is a miss, `F` a foul, `G` a gutter
    /// ball; otherwise a dot-separated list of the pins left standing.
    fn from_str(s: &str) -> SlResult<Self> {
        let token = s.trim();
        match token.to_ascii_uppercase().as_str() {
            "" => Err(StrikelineError::Throw("empty throw token".to_string())),
            "X" | "/" => Ok(Throw::CLEAR),
            "-" => Ok(Throw::Miss),
            "F" => Ok(Throw::Foul),
            "G" => Ok(Throw::Gutter),
            _ => {
                let pins = token
                    .split('.')
                    .map(|p| p.trim().parse::<u8>())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|_| {
                        StrikelineError::Throw(format!("unrecognized throw '{}'", token))
                    })?;
                Ok(Throw::Leave(PinSet::from_slice(&pins)?))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    AwaitingBall1(u8),
    AwaitingBall2(u8),
    AwaitingBall3,
    GameComplete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    game_id: String,
    player_id: String,
    rotation: Option<BTreeMap<u8, String>>,
    frames: Vec<Frame>,
    current_frame: u8,
    current_ball: u8,
    standing: PinSet,
    // Frame index of every recorded ball, oldest first.
    history: Vec<usize>,
    complete: bool,
}

impl GameState {
    pub fn new(game_id: &str, player_id: &str) -> Self {
        let mut state = Self {
            game_id: game_id.to_string(),
            player_id: player_id.to_string(),
            rotation: None,
            frames: Vec::new(),
            current_frame: 1,
            current_ball: 1,
            standing: PinSet::ALL,
            history: Vec::new(),
            complete: false,
        };
        state.open_frame(1);
        apply_scores(&mut state.frames);
        state
    }

    /// A Baker game: `team_id` owns the game, each frame is stamped with the
    /// bowler from `rotation`.
    pub fn with_rotation(game_id: &str, team_id: &str, rotation: BTreeMap<u8, String>) -> Self {
        let mut state = Self::new(game_id, team_id);
        state.rotation = Some(rotation);
        let first = state.thrower(1);
        state.frames[0].player_id = first;
        state
    }

    pub fn phase(&self) -> PlayState {
        if self.complete {
            return PlayState::GameComplete;
        }
        match self.current_ball {
            1 => PlayState::AwaitingBall1(self.current_frame),
            2 => PlayState::AwaitingBall2(self.current_frame),
            _ => PlayState::AwaitingBall3,
        }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn standing(&self) -> PinSet {
        self.standing
    }

    pub fn current_frame(&self) -> u8 {
        self.current_frame
    }

    pub fn current_ball(&self) -> u8 {
        self.current_ball
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn balls_recorded(&self) -> usize {
        self.history.len()
    }

    /// Last resolved running total.
    pub fn total_score(&self) -> Option<u16> {
        final_score(&self.frames)
    }

    /// Who throws `frame`: the Baker rotation entry, else the game's player.
    pub fn thrower(&self, frame: u8) -> String {
        self.rotation
            .as_ref()
            .and_then(|r| r.get(&frame))
            .cloned()
            .unwrap_or_else(|| self.player_id.clone())
    }

    pub fn record_ball(&self, throw: Throw) -> SlResult<GameState> {
        if self.complete {
            return Err(StrikelineError::Throw(
                "game is already complete".to_string(),
            ));
        }
        throw.validate(self.standing)?;

        let mut next = self.clone();
        let ball = next.make_ball(throw);
        debug!(
            frame = next.current_frame,
            ball = next.current_ball,
            pins = ball.pins_knocked_down,
            leave = %ball.pinset_after,
            "ball recorded"
        );
        next.apply(ball);
        apply_scores(&mut next.frames);
        Ok(next)
    }

    /// Removes the most recent ball in the game and rewinds the cursor to
    /// just before it was thrown. A no-op on an empty game.
    pub fn undo(&self) -> GameState {
        let mut next = self.clone();
        let Some(idx) = next.history.pop() else {
            warn!("undo requested with no balls recorded");
            return next;
        };

        // Any frame opened after this ball was thrown is still empty.
        next.frames.truncate(idx + 1);
        let frame = &mut next.frames[idx];
        let Some(ball) = frame.balls.pop() else {
            return next;
        };
        frame.rederive_flags();

        next.current_frame = frame.frame_number;
        next.current_ball = ball.ball_number;
        next.standing = ball.pinset_before;
        next.complete = false;
        debug!(
            frame = next.current_frame,
            ball = next.current_ball,
            "ball undone"
        );

        apply_scores(&mut next.frames);
        next
    }

    /// Applies whitespace-separated [`Throw`] tokens in order; `U` undoes.
    pub fn apply_notation(&self, notation: &str) -> SlResult<GameState> {
        notation
            .split_whitespace()
            .try_fold(self.clone(), |state, token| {
                if token.eq_ignore_ascii_case("u") {
                    Ok(state.undo())
                } else {
                    state.record_ball(token.parse()?)
                }
            })
    }

    /// The finished game record and its scored frames.
    pub fn finish(
        &self,
        session_id: &str,
        mode: GameMode,
        created_at: u64,
    ) -> SlResult<(Game, Vec<Frame>)> {
        if !self.complete {
            return Err(StrikelineError::Validation(format!(
                "game {} is not complete ({:?})",
                self.game_id,
                self.phase()
            )));
        }

        let game = Game {
            id: self.game_id.clone(),
            session_id: session_id.to_string(),
            player_id: self.player_id.clone(),
            mode,
            total_score: self.total_score().unwrap_or(0),
            is_complete: is_game_complete(&self.frames),
            created_at,
        };
        Ok((game, self.frames.clone()))
    }

    fn make_ball(&self, throw: Throw) -> Ball {
        let before = self.standing;
        let (after, is_foul, is_gutter) = match throw {
            Throw::Leave(after) => (after, false, false),
            Throw::Miss => (before, false, false),
            Throw::Foul => (before, true, false),
            Throw::Gutter => (before, false, true),
        };
        Ball {
            ball_number: self.current_ball,
            pins_knocked_down: (before.len() - after.len()) as u8,
            pinset_before: before,
            pinset_after: after,
            is_foul,
            is_gutter,
            timestamp: None,
        }
    }

    fn apply(&mut self, ball: Ball) {
        let idx = (self.current_frame - 1) as usize;
        let pins = ball.pins_knocked_down as u16;
        self.standing = ball.pinset_after;
        self.frames[idx].balls.push(ball);
        self.history.push(idx);

        if self.current_frame == LAST_FRAME {
            self.apply_last_frame(idx);
            return;
        }

        let frame = &mut self.frames[idx];
        if self.current_ball == 1 {
            if pins == 10 {
                frame.is_strike = true;
                frame.leave_after_ball1 = Some(create_pin_leave(PinSet::EMPTY, false));
                self.advance();
            } else {
                frame.leave_after_ball1 = Some(create_pin_leave(self.standing, false));
                self.current_ball = 2;
            }
            return;
        }

        let first = frame.pins(0).unwrap_or(0);
        if first + pins == 10 {
            frame.is_spare = true;
            if let Some(leave) = frame.leave_after_ball1.as_mut() {
                leave.is_converted = true;
            }
        }
        self.advance();
    }

    fn apply_last_frame(&mut self, idx: usize) {
        let frame = &mut self.frames[idx];
        let b1 = frame.pins(0).unwrap_or(0);

        match frame.balls.len() {
            1 => {
                frame.leave_after_ball1 = Some(create_pin_leave(self.standing, false));
                if b1 == 10 {
                    frame.is_strike = true;
                    self.standing = PinSet::ALL;
                }
                self.current_ball = 2;
            }
            2 => {
                let b2 = frame.pins(1).unwrap_or(0);
                if b1 < 10 && b1 + b2 == 10 {
                    frame.is_spare = true;
                }

                if b1 == 10 || b1 + b2 == 10 {
                    // Fresh rack after a double or a spare; otherwise the
                    // pins left by ball two stay up for the fill ball.
                    if (b1 == 10 && b2 == 10) || frame.is_spare {
                        self.standing = PinSet::ALL;
                    }
                    self.current_ball = 3;
                } else {
                    self.complete = true;
                }
            }
            _ => self.complete = true,
        }
    }

    fn advance(&mut self) {
        if self.current_frame == LAST_FRAME {
            self.complete = true;
            return;
        }
        self.current_frame += 1;
        self.current_ball = 1;
        self.standing = PinSet::ALL;
        self.open_frame(self.current_frame);
    }

    fn open_frame(&mut self, number: u8) {
        let thrower = self.thrower(number);
        self.frames.push(Frame::new(&self.game_id, number, &thrower));
    }
}
