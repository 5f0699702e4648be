use super::print_json;
use crate::reports;
use clap::Args;
use serde::Serialize;
use strikeline::error::SlResult;
use strikeline::play::GameState;
use strikeline::scoring::{baker_rotation, Frame};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    /// Whitespace-separated throws: X, /, -, F, G, pins left standing
    /// (e.g. 7.10), or U to undo the last ball.
    #[arg(long, allow_hyphen_values = true)]
    pub throws: String,

    #[arg(long, default_value = "player")]
    pub player: String,

    /// Five bowlers for a Baker game, comma separated.
    #[arg(long, value_delimiter = ',')]
    pub baker: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct PlayReport<'a> {
    state: String,
    complete: bool,
    balls_recorded: usize,
    total_score: Option<u16>,
    frames: &'a [Frame],
}

pub fn run(args: &PlayArgs, json: bool) -> SlResult<()> {
    let start = match &args.baker {
        Some(players) => {
            let rotation = baker_rotation(players.as_slice())?;
            info!("Baker rotation: {}", players.join(" -> "));
            GameState::with_rotation("live", &args.player, rotation)
        }
        None => GameState::new("live", &args.player),
    };

    let state = start.apply_notation(&args.throws)?;

    if json {
        return print_json(&PlayReport {
            state: format!("{:?}", state.phase()),
            complete: state.is_complete(),
            balls_recorded: state.balls_recorded(),
            total_score: state.total_score(),
            frames: state.frames(),
        });
    }

    reports::print_scoresheet(&format!("Live game ({})", args.player), state.frames());
    reports::print_play_state(&state);
    Ok(())
}
