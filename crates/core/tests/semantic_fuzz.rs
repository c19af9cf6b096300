use trapline_core::{
    Direction, Game, GameConfig, GameStatus, LogEvent, MoveOutcome, MoveRejection, TrapPolicy,
};
use proptest::{
    collection::vec,
    sample::select,
    strategy::Strategy,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

fn run_fuzz_simulation(config: GameConfig, moves: &[Direction]) -> Result<(), String> {
    let mut game = Game::new(config).map_err(|e| e.to_string())?;
    let initial_enemies = game.state().enemies.len() as u32;
    let mut last_score = 0;

    for (turn, direction) in moves.iter().enumerate() {
        let was_terminal = game.status().is_terminal();
        let hash_before = game.snapshot_hash();
        let log_before = game.log().len();

        let outcome = game.play_turn(*direction);

        if was_terminal {
            if outcome != MoveOutcome::Rejected(MoveRejection::GameOver) {
                return Err(format!("turn {turn}: finished game accepted a move"));
            }
            if game.snapshot_hash() != hash_before {
                return Err(format!("turn {turn}: finished game changed state"));
            }
            continue;
        }

        game.state()
            .check_invariants()
            .map_err(|violation| format!("turn {turn}: {violation}"))?;

        let trapped = game.log()[log_before..]
            .iter()
            .filter(|event| matches!(event, LogEvent::EnemyTrapped { .. }))
            .count() as u32;
        if game.score() != last_score + trapped {
            return Err(format!("turn {turn}: score moved without a trap capture"));
        }
        last_score = game.score();

        if game.score() + game.state().enemies.len() as u32 != initial_enemies {
            return Err(format!("turn {turn}: enemy lost without being trapped"));
        }
        if game.is_moving() {
            return Err(format!("turn {turn}: phase left open after a full turn"));
        }
        if game.status() == GameStatus::Won && game.score() < game.config().capture_target {
            return Err(format!("turn {turn}: won below the capture target"));
        }
    }

    Ok(())
}

fn directions() -> impl Strategy<Value = Vec<Direction>> {
    vec(select(Direction::ALL.to_vec()), 0..80)
}

#[test]
fn test_fuzz_default_board() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(64));
    runner
        .run(&directions(), |moves| {
            run_fuzz_simulation(GameConfig::default(), &moves).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("default board should preserve invariants");
}

#[test]
fn test_fuzz_persistent_traps() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(64));
    runner
        .run(&directions(), |moves| {
            let config = GameConfig::default().trap_policy(TrapPolicy::Persist);
            run_fuzz_simulation(config, &moves).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("persistent traps should preserve invariants");
}

#[test]
fn test_fuzz_seeded_long_sessions_with_resets() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut game = Game::new(GameConfig::default().trap_policy(TrapPolicy::Persist)).unwrap();
    let mut finished = 0;

    for _ in 0..2000 {
        let legal = game.legal_moves();
        if legal.is_empty() {
            // Boxed in by trees, traps and enemies; no turn can start.
            game.reset();
            continue;
        }
        let direction = legal[rng.next_u64() as usize % legal.len()];
        game.play_turn(direction);
        game.state().check_invariants().expect("invariants hold every turn");
        if game.status().is_terminal() {
            finished += 1;
            game.reset();
        }
    }

    assert!(finished > 0, "random play should finish at least one game");
}
