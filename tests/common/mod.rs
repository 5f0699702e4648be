#![allow(dead_code)]

use strikeline::pins::PinSet;
use strikeline::play::GameState;
use strikeline::scoring::{Ball, Frame, Game, GameMode};

pub fn ball(number: u8, before: PinSet, after: PinSet) -> Ball {
    Ball {
        ball_number: number,
        pins_knocked_down: (before.len() - after.len()) as u8,
        pinset_before: before,
        pinset_after: after,
        is_foul: false,
        is_gutter: false,
        timestamp: None,
    }
}

/// Builds a frame from per-ball pin counts. Pins fall lowest number first,
/// so any first ball of two or more pins is a pocket hit.
pub fn frame(number: u8, counts: &[u8]) -> Frame {
    FrameBuilder::new(number).counts(counts).build()
}

/// Frames 1..=n from per-frame pin counts.
pub fn frames(counts: &[&[u8]]) -> Vec<Frame> {
    counts
        .iter()
        .enumerate()
        .map(|(i, c)| frame(i as u8 + 1, c))
        .collect()
}

/// Frames 1..=n, each with the same pin counts.
pub fn repeat_frames(n: u8, counts: &[u8]) -> Vec<Frame> {
    (1..=n).map(|i| frame(i, counts)).collect()
}

pub struct FrameBuilder {
    frame: Frame,
    standing: PinSet,
}

impl FrameBuilder {
    pub fn new(number: u8) -> Self {
        Self {
            frame: Frame::new("g1", number, "p1"),
            standing: PinSet::ALL,
        }
    }

    pub fn game(mut self, game_id: &str) -> Self {
        self.frame.game_id = game_id.to_string();
        self
    }

    pub fn player(mut self, player_id: &str) -> Self {
        self.frame.player_id = player_id.to_string();
        self
    }

    pub fn counts(mut self, counts: &[u8]) -> Self {
        for &count in counts {
            let left: Vec<u8> = self.standing.iter().skip(count as usize).collect();
            self = self.leave(&left);
        }
        self
    }

    /// Next ball leaves exactly `pins` standing.
    pub fn leave(mut self, pins: &[u8]) -> Self {
        let after = PinSet::from_slice(pins).unwrap();
        let number = self.frame.balls.len() as u8 + 1;
        self.frame.balls.push(ball(number, self.standing, after));
        self.standing = if after.is_empty() { PinSet::ALL } else { after };
        self
    }

    pub fn foul(mut self) -> Self {
        let number = self.frame.balls.len() as u8 + 1;
        let mut b = ball(number, self.standing, self.standing);
        b.is_foul = true;
        self.frame.balls.push(b);
        self
    }

    pub fn gutter(mut self) -> Self {
        let number = self.frame.balls.len() as u8 + 1;
        let mut b = ball(number, self.standing, self.standing);
        b.is_gutter = true;
        self.frame.balls.push(b);
        self
    }

    pub fn build(mut self) -> Frame {
        self.frame.rederive_flags();
        self.frame
    }
}

pub fn game(id: &str, player: &str, total: u16, created_at: u64) -> Game {
    Game {
        id: id.to_string(),
        session_id: "s1".to_string(),
        player_id: player.to_string(),
        mode: GameMode::PracticeFull,
        total_score: total,
        is_complete: true,
        created_at,
    }
}

/// Plays `notation` to completion and returns the finished records.
pub fn played(id: &str, player: &str, notation: &str, created_at: u64) -> (Game, Vec<Frame>) {
    GameState::new(id, player)
        .apply_notation(notation)
        .unwrap()
        .finish("s1", GameMode::PracticeFull, created_at)
        .unwrap()
}

pub const PERFECT: &str = "X X X X X X X X X X X X";
pub const ALL_NINE_SPARES: &str = "10 / 10 / 10 / 10 / 10 / 10 / 10 / 10 / 10 / 10 / 10";
pub const ALL_GUTTERS: &str = "G G G G G G G G G G G G G G G G G G G G";
