use super::print_json;
use crate::reports;
use clap::Args;
use serde::Serialize;
use strikeline::error::{SlResult, StrikelineError};
use strikeline::loader::load_history;
use strikeline::scoring::{
    apply_scores, final_score, frame_symbols, is_game_complete, Frame, FrameSymbol, Game,
};
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// History file with recorded games and frames.
    #[arg(long)]
    pub history: String,

    /// Game to score; defaults to the first game in the file.
    #[arg(long)]
    pub game: Option<String>,
}

#[derive(Debug, Serialize)]
struct ScoredGame<'a> {
    game: &'a Game,
    frames: &'a [Frame],
    symbols: Vec<Vec<FrameSymbol>>,
    complete: bool,
    final_score: Option<u16>,
}

pub fn run(args: &ScoreArgs, json: bool) -> SlResult<()> {
    let history = load_history(&args.history)?;

    let game = match &args.game {
        Some(id) => history.game(id),
        None => history.games.first(),
    }
    .ok_or_else(|| {
        StrikelineError::Validation(match &args.game {
            Some(id) => format!("game '{}' not found in {}", id, args.history),
            None => format!("no games in {}", args.history),
        })
    })?;

    let mut frames = history.frames_of(&game.id);
    apply_scores(&mut frames);

    let complete = is_game_complete(&frames);
    let total = final_score(&frames);
    if complete && total != Some(game.total_score) {
        warn!(
            "Game {} records a total of {} but its frames score {:?}",
            game.id, game.total_score, total
        );
    }
    info!("Scored game {} ({} frames)", game.id, frames.len());

    if json {
        let symbols = frames
            .iter()
            .map(|f| frame_symbols(f, f.frame_number))
            .collect();
        return print_json(&ScoredGame {
            game,
            frames: &frames,
            symbols,
            complete,
            final_score: total,
        });
    }

    reports::print_scoresheet(
        &format!("Game {} ({}, {})", game.id, game.player_id, game.mode),
        &frames,
    );
    match (complete, total) {
        (true, Some(t)) => println!("Final score: {}", t),
        (_, Some(t)) => println!("Incomplete game, {} so far", t),
        (_, None) => println!("Incomplete game, nothing resolved yet"),
    }
    Ok(())
}
