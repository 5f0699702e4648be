pub mod drills;
pub mod play;
pub mod score;
pub mod stats;
pub mod team;

use serde::Serialize;
use strikeline::error::SlResult;

pub(crate) fn print_json<T: Serialize>(value: &T) -> SlResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
