use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use strikeline::config::StatsConfig;
use strikeline::error::SlResult;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with stats settings; explicit flags take precedence.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,

    /// Print JSON instead of tables.
    #[arg(global = true, long, default_value_t = false)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a recorded game from a history file.
    Score(cmd::score::ScoreArgs),
    /// Enter a game ball by ball.
    Play(cmd::play::PlayArgs),
    /// Stats for one player's recent games.
    Stats(cmd::stats::StatsArgs),
    /// Per-player and team aggregate stats.
    Team(cmd::team::TeamArgs),
    /// List the spare drills.
    Drills,
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli, &matches) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli, matches: &ArgMatches) -> SlResult<()> {
    match &cli.command {
        Commands::Score(args) => cmd::score::run(args, cli.json),
        Commands::Play(args) => cmd::play::run(args, cli.json),
        Commands::Stats(args) => {
            let config = resolve_config(cli, &args.config, matches.subcommand_matches("stats"))?;
            cmd::stats::run(args, &config, cli.json)
        }
        Commands::Team(args) => {
            let config = resolve_config(cli, &args.config, matches.subcommand_matches("team"))?;
            cmd::team::run(args, &config, cli.json)
        }
        Commands::Drills => cmd::drills::run(cli.json),
    }
}

/// File settings as the base, explicit command-line flags on top.
fn resolve_config(
    cli: &Cli,
    flags: &StatsConfig,
    sub_matches: Option<&ArgMatches>,
) -> SlResult<StatsConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading stats config from {}", path);
            StatsConfig::load_from_file(path)?
        }
        None => return flags.validate().map(|_| flags.clone()),
    };

    if let Some(sub) = sub_matches {
        config.merge_from_cli(flags, sub);
    }
    config.validate()?;
    Ok(config)
}
