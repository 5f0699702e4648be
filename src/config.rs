use crate::error::{SlResult, StrikelineError};
use clap::{parser::ValueSource, ArgAction, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Most recent games that feed a stats snapshot.
    #[arg(long, default_value_t = 30)]
    pub game_limit: usize,

    /// Common leaves kept in a snapshot, most frequent first.
    #[arg(long, default_value_t = 10)]
    pub leave_limit: usize,

    /// Only complete games enter the window.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub require_complete: bool,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            game_limit: 30,
            leave_limit: 10,
            require_complete: true,
        }
    }
}

impl StatsConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SlResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            StrikelineError::Config(format!("could not read '{}': {}", path.display(), e))
        })?;
        let config: StatsConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SlResult<()> {
        if self.game_limit == 0 {
            return Err(StrikelineError::Config(
                "game_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Overlays values the user typed on the command line; defaults filled
    /// in by clap do not override file values.
    pub fn merge_from_cli(&mut self, cli: &StatsConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field;
                }
            };
        }

        update_if_present!(game_limit, "game_limit");
        update_if_present!(leave_limit, "leave_limit");
        update_if_present!(require_complete, "require_complete");
    }
}
