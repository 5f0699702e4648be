//! Frame-level scoring: pin-leave classification, bonus look-ahead, running
//! totals, scoresheet glyphs and game completeness.

pub mod frame;
pub mod leave;
pub mod rules;
pub mod symbols;
pub mod types;

pub use self::frame::{apply_scores, final_score, frame_score, running_totals};
pub use self::leave::{
    create_pin_leave, describe_leave, is_pocket_hit, is_split, is_washout, PinLeave,
};
pub use self::rules::{baker_rotation, is_game_complete, required_balls, BAKER_PLAYERS};
pub use self::symbols::{frame_symbols, FrameSymbol};
pub use self::types::{Ball, Frame, FrameScore, Game, GameMode, FRAMES_PER_GAME, LAST_FRAME};
