use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use game_core::{Direction, Game, GameConfig, GameSummary, MemoryReporter, SessionFile};
use log::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file overriding the default board and capture target
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Moves to play, one of u/d/l/r per turn (e.g. "uullr")
    #[arg(short, long, default_value = "")]
    moves: String,
    /// Print the board after every turn
    #[arg(short, long)]
    verbose: bool,
    /// Continue a session previously written with --save
    #[arg(long)]
    resume: Option<PathBuf>,
    /// Write the session to this file after the moves are played
    #[arg(long)]
    save: Option<PathBuf>,
}

fn parse_moves(moves: &str) -> Result<Vec<Direction>> {
    moves
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Direction::from_char(c).with_context(|| format!("Unknown move '{c}'")))
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => GameConfig::default(),
    };
    let moves = parse_moves(&args.moves)?;

    let reporter = MemoryReporter::new();
    let mut game = match &args.resume {
        Some(path) => {
            let saved = SessionFile::load(path)
                .with_context(|| format!("Failed to load session: {}", path.display()))?;
            let mut game = Game::from_saved(config, saved).context("Saved session does not fit")?;
            game.set_reporter(reporter.clone());
            game
        }
        None => {
            Game::with_reporter(config, reporter.clone()).context("Invalid board configuration")?
        }
    };
    info!("playing {} moves", moves.len());

    for (turn, direction) in moves.iter().enumerate() {
        if game.status().is_terminal() {
            println!("Game finished after {turn} turns; ignoring remaining moves.");
            break;
        }
        let outcome = game.play_turn(*direction);
        if args.verbose {
            println!("Turn {}: {:?} -> {:?}", turn + 1, direction, outcome);
            print!("{}", game.grid());
        }
    }

    println!("{}", game.grid());
    let snapshot = game.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    if let Some(path) = &args.save {
        game.save_state()
            .write_atomic(path)
            .with_context(|| format!("Failed to save session: {}", path.display()))?;
        info!("session saved to {}", path.display());
    }

    let summaries: Vec<GameSummary> = reporter.summaries();
    match summaries.as_slice() {
        [] => println!("Game still active."),
        [summary] => println!("Summary: {}", summary.to_json()?),
        _ => bail!("more than one summary emitted for a single game"),
    }

    Ok(())
}
