use super::types::{Frame, LAST_FRAME};
use serde::Serialize;
use std::fmt;

/// A scoresheet glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum FrameSymbol {
    Strike,
    Spare,
    Miss,
    Foul,
    Gutter,
    Pins(u8),
}

impl fmt::Display for FrameSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameSymbol::Strike => write!(f, "X"),
            FrameSymbol::Spare => write!(f, "/"),
            FrameSymbol::Miss => write!(f, "-"),
            FrameSymbol::Foul => write!(f, "F"),
            FrameSymbol::Gutter => write!(f, "G"),
            FrameSymbol::Pins(n) => write!(f, "{}", n),
        }
    }
}

impl From<FrameSymbol> for String {
    fn from(s: FrameSymbol) -> Self {
        s.to_string()
    }
}

pub fn frame_symbols(frame: &Frame, frame_number: u8) -> Vec<FrameSymbol> {
    if frame_number == LAST_FRAME {
        return last_frame_symbols(frame);
    }

    let mut symbols = Vec::with_capacity(2);
    let Some(ball1) = frame.balls.first() else {
        return symbols;
    };

    if ball1.is_foul {
        symbols.push(FrameSymbol::Foul);
    } else if ball1.is_gutter || ball1.pins_knocked_down == 0 {
        symbols.push(FrameSymbol::Miss);
    } else if frame.is_strike {
        symbols.push(FrameSymbol::Strike);
        return symbols;
    } else {
        symbols.push(FrameSymbol::Pins(ball1.pins_knocked_down));
    }

    let Some(ball2) = frame.balls.get(1) else {
        return symbols;
    };

    if ball2.is_foul {
        symbols.push(FrameSymbol::Foul);
    } else if frame.is_spare {
        symbols.push(FrameSymbol::Spare);
    } else if ball2.is_gutter || ball2.pins_knocked_down == 0 {
        symbols.push(FrameSymbol::Miss);
    } else {
        symbols.push(FrameSymbol::Pins(ball2.pins_knocked_down));
    }

    symbols
}

// Tenth frame: marks don't end the frame. A ball that is neither a mark nor a
// miss is a spare when it and the ball before it make ten.
fn last_frame_symbols(frame: &Frame) -> Vec<FrameSymbol> {
    let mut symbols = Vec::with_capacity(3);
    let mut prev: Option<u8> = None;

    for ball in &frame.balls {
        let pins = ball.pins_knocked_down;
        let symbol = if ball.is_foul {
            FrameSymbol::Foul
        } else if ball.is_gutter {
            FrameSymbol::Gutter
        } else if pins == 10 {
            FrameSymbol::Strike
        } else if pins == 0 {
            FrameSymbol::Miss
        } else if prev.is_some_and(|p| p + pins == 10) {
            FrameSymbol::Spare
        } else {
            FrameSymbol::Pins(pins)
        };

        prev = Some(pins);
        symbols.push(symbol);
    }

    symbols
}
