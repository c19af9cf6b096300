use anyhow::{Result, bail};
use clap::Parser;
use game_core::{Game, GameConfig, GameStatus, TrapPolicy};
use log::debug;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 10_000)]
    turns: u32,
    /// Leave traps on the board after they capture
    #[arg(long)]
    persist_traps: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting Fuzz harness on seed {} for max {} turns...", args.seed, args.turns);
    let policy = if args.persist_traps { TrapPolicy::Persist } else { TrapPolicy::Consume };
    let mut game = Game::new(GameConfig::default().trap_policy(policy))?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let (mut wins, mut losses, mut stuck) = (0u32, 0u32, 0u32);
    for turn in 0..args.turns {
        let legal = game.legal_moves();
        if legal.is_empty() {
            debug!("turn {turn}: player boxed in, resetting");
            stuck += 1;
            game.reset();
            continue;
        }
        let direction = legal[rng.next_u64() as usize % legal.len()];
        let score_before = game.score();
        game.play_turn(direction);

        if let Err(violation) = game.state().check_invariants() {
            bail!("Invariant failed on turn {turn}: {violation}\n{}", game.grid());
        }
        if game.score() < score_before {
            bail!("Invariant failed on turn {turn}: score decreased");
        }

        match game.status() {
            GameStatus::Active => {}
            GameStatus::Won => {
                wins += 1;
                game.reset();
            }
            GameStatus::Lost => {
                losses += 1;
                game.reset();
            }
        }
    }

    println!("Fuzzing completed successfully.");
    println!("Wins: {wins}, Losses: {losses}, Boxed in: {stuck}");
    Ok(())
}
