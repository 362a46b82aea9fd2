//! Headless game runner.
//!
//! Plays one seeded game, either from a move script or with a fixed-priority
//! policy, and writes each turn as text or as one JSON object per line.

use std::io::Write;

use anyhow::Result;
use log::{debug, warn};
use serde::Serialize;

use crate::config::RunConfig;
use crate::core::{BoardEngine, BestScoreStore, GameSnapshot, SimpleRng, TileRng, TurnOutcome};
use crate::types::{Direction, GameStatus, Letter};

/// Policy preference: keep tiles packed toward the bottom-left corner
pub const POLICY_ORDER: [Direction; 4] = [
    Direction::Left,
    Direction::Down,
    Direction::Right,
    Direction::Up,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Turns that changed the board
    pub moves_played: u32,
    pub score: u32,
    pub best_score: u32,
    pub status: GameStatus,
    pub won: bool,
    pub max_letter: Option<Letter>,
}

#[derive(Serialize)]
struct TurnRecord<'a> {
    turn: u32,
    direction: Direction,
    changed: bool,
    score_delta: u32,
    won_now: bool,
    snapshot: &'a GameSnapshot,
}

/// First direction in [`POLICY_ORDER`] that changes the board
pub fn choose_direction<R: TileRng, S: BestScoreStore>(
    engine: &BoardEngine<R, S>,
) -> Option<Direction> {
    POLICY_ORDER.into_iter().find(|&d| engine.can_move(d))
}

/// Play a game with a seeded [`SimpleRng`] and the given best-score store
pub fn run<S: BestScoreStore, W: Write>(
    config: &RunConfig,
    store: S,
    out: &mut W,
) -> Result<RunSummary> {
    let mut engine = BoardEngine::new(SimpleRng::new(config.seed), store);
    run_engine(&mut engine, config, out)
}

/// Drive an existing engine until it is lost, the script ends or the move
/// limit is hit
pub fn run_engine<R: TileRng, S: BestScoreStore, W: Write>(
    engine: &mut BoardEngine<R, S>,
    config: &RunConfig,
    out: &mut W,
) -> Result<RunSummary> {
    let mut script = config.script.as_deref().map(|s| s.iter().copied());
    let mut snapshot = GameSnapshot::default();
    let mut moves_played = 0u32;
    let mut turn = 0u32;

    write_snapshot(engine, &mut snapshot, out, config.json)?;

    while moves_played < config.max_moves && engine.status() != GameStatus::Lost {
        let direction = match script.as_mut() {
            Some(steps) => match steps.next() {
                Some(d) => d,
                None => break,
            },
            None => match choose_direction(engine) {
                Some(d) => d,
                None => break,
            },
        };

        turn += 1;
        let outcome = engine.play_turn(direction);
        if outcome.result.changed {
            moves_played += 1;
        } else {
            debug!("turn {}: {} does not move anything", turn, direction);
        }

        write_turn(engine, &mut snapshot, out, config.json, turn, &outcome)?;
    }

    if engine.status() == GameStatus::Lost {
        warn!(
            "seed {} lost after {} moves with score {}",
            config.seed,
            moves_played,
            engine.score()
        );
    }

    Ok(RunSummary {
        moves_played,
        score: engine.score(),
        best_score: engine.best_score(),
        status: engine.status(),
        won: engine.state().has_won(),
        max_letter: engine.board().max_letter(),
    })
}

fn write_snapshot<R: TileRng, S: BestScoreStore, W: Write>(
    engine: &BoardEngine<R, S>,
    snapshot: &mut GameSnapshot,
    out: &mut W,
    json: bool,
) -> Result<()> {
    engine.snapshot_into(snapshot);
    if json {
        serde_json::to_writer(&mut *out, &*snapshot)?;
        writeln!(out)?;
    } else {
        writeln!(out, "start (score {}, best {})", snapshot.score, snapshot.best_score)?;
        writeln!(out, "{}\n", engine.board())?;
    }
    Ok(())
}

fn write_turn<R: TileRng, S: BestScoreStore, W: Write>(
    engine: &BoardEngine<R, S>,
    snapshot: &mut GameSnapshot,
    out: &mut W,
    json: bool,
    turn: u32,
    outcome: &TurnOutcome,
) -> Result<()> {
    engine.snapshot_into(snapshot);
    if json {
        let record = TurnRecord {
            turn,
            direction: outcome.result.direction,
            changed: outcome.result.changed,
            score_delta: outcome.result.score_delta,
            won_now: outcome.won_now,
            snapshot: &*snapshot,
        };
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)?;
        return Ok(());
    }

    write!(
        out,
        "turn {}: {} +{} (score {})",
        turn, outcome.result.direction, outcome.result.score_delta, snapshot.score
    )?;
    if !outcome.result.changed {
        write!(out, " [no change]")?;
    }
    if outcome.won_now {
        write!(out, " [reached Z]")?;
    }
    if outcome.lost {
        write!(out, " [game over]")?;
    }
    writeln!(out)?;
    writeln!(out, "{}\n", engine.board())?;
    Ok(())
}
