//! Engine module - owns the game state and drives turns
//!
//! A turn is `apply_move` → `spawn_tile` → win check → game-over check. A move
//! that changes nothing consumes no turn: no spawn, no score, no status change.
//! [`BoardEngine::play_turn`] runs the whole sequence; hosts that animate
//! between steps can call the pieces individually in the same order.

use arrayvec::ArrayVec;
use log::{debug, info, trace};

use crate::best_score::BestScoreStore;
use crate::board::{Board, MoveResult};
use crate::rng::TileRng;
use crate::snapshot::GameSnapshot;
use crate::types::{
    Direction, GameStatus, Letter, Position, INITIAL_TILES, SPAWN_A_DENOMINATOR,
    SPAWN_A_NUMERATOR,
};

/// A tile placed by [`BoardEngine::spawn_tile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnedTile {
    pub position: Position,
    pub letter: Letter,
}

/// Everything that happened during one [`BoardEngine::play_turn`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub result: MoveResult,
    pub spawned: Option<SpawnedTile>,
    /// Set only on the turn that first produced a `Z`
    pub won_now: bool,
    pub lost: bool,
}

/// Complete state of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    score: u32,
    best_score: u32,
    status: GameStatus,
    /// Sticky: stays set once a `Z` has been reported, even after a loss
    won: bool,
    /// Moves that changed the board
    move_count: u32,
}

impl GameState {
    fn fresh(best_score: u32) -> Self {
        Self {
            board: Board::new(),
            score: 0,
            best_score,
            status: GameStatus::Playing,
            won: false,
            move_count: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether this game has reached `Z` at some point
    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }
}

/// The puzzle engine
///
/// Owns one [`GameState`] plus its injected random source and best-score
/// store. Every operation runs to completion synchronously.
#[derive(Debug, Clone)]
pub struct BoardEngine<R, S> {
    state: GameState,
    rng: R,
    store: S,
    /// Monotonic game counter (increments on every `new_game`)
    episode_id: u32,
}

impl<R: TileRng, S: BestScoreStore> BoardEngine<R, S> {
    /// Create an engine and start the first game
    pub fn new(rng: R, store: S) -> Self {
        let best = store.load();
        let mut engine = Self {
            state: GameState::fresh(best),
            rng,
            store,
            episode_id: 0,
        };
        engine.new_game();
        engine
    }

    /// Create an engine around an existing board (restoring a game).
    ///
    /// Status is derived from the board: `Won` if it holds a `Z`, `Lost` if
    /// it is already stuck.
    pub fn with_board(rng: R, store: S, board: Board) -> Self {
        let best = store.load();
        let mut state = GameState::fresh(best);
        state.board = board;

        let mut engine = Self {
            state,
            rng,
            store,
            episode_id: 1,
        };
        engine.check_win();
        engine.check_game_over();
        engine
    }

    /// Reset score and board, keep the best score, spawn the opening tiles
    pub fn new_game(&mut self) -> &GameState {
        self.state = GameState::fresh(self.state.best_score);
        self.episode_id = self.episode_id.wrapping_add(1);

        for _ in 0..INITIAL_TILES {
            self.spawn_tile();
        }

        debug!(
            "new game #{} (best score {})",
            self.episode_id, self.state.best_score
        );
        &self.state
    }

    /// Slide and merge toward `direction`.
    ///
    /// Does not spawn. If `changed` is false nothing was modified and the
    /// caller must not spawn either.
    pub fn apply_move(&mut self, direction: Direction) -> MoveResult {
        let result = self.state.board.slide(direction);
        if !result.changed {
            trace!("move {} changed nothing", direction);
            return result;
        }

        self.state.move_count += 1;
        self.state.score = self.state.score.saturating_add(result.score_delta);
        trace!(
            "move {}: +{} ({} merges), score {}",
            direction,
            result.score_delta,
            result.merged.len(),
            self.state.score
        );

        if self.state.score > self.state.best_score {
            self.state.best_score = self.state.score;
            self.store.save(self.state.best_score);
            debug!("new best score {}", self.state.best_score);
        }

        result
    }

    /// Place an `A` (9 in 10) or `B` in a uniformly chosen empty cell.
    ///
    /// Returns `None` and does nothing when the board is full.
    pub fn spawn_tile(&mut self) -> Option<SpawnedTile> {
        let empty = self.state.board.empty_positions();
        if empty.is_empty() {
            return None;
        }

        let position = empty[self.rng.pick(empty.len()).min(empty.len() - 1)];
        let letter = if self.rng.chance(SPAWN_A_NUMERATOR, SPAWN_A_DENOMINATOR) {
            Letter::A
        } else {
            Letter::B
        };

        self.state
            .board
            .set(position.row, position.col, Some(letter));
        Some(SpawnedTile { position, letter })
    }

    /// True iff a `Z` is on the board
    pub fn is_won(&self) -> bool {
        self.state.board.contains(Letter::Z)
    }

    /// True iff the board is full and no adjacent cells match
    pub fn is_game_over(&self) -> bool {
        self.state.board.is_full() && !self.state.board.has_adjacent_pair()
    }

    /// Record a win if one just happened.
    ///
    /// Returns true only on the transition; later calls with `Z` still on the
    /// board return false.
    pub fn check_win(&mut self) -> bool {
        if self.state.won || !self.is_won() {
            return false;
        }
        self.state.won = true;
        if self.state.status == GameStatus::Playing {
            self.state.status = GameStatus::Won;
        }
        info!(
            "reached Z after {} moves, score {}",
            self.state.move_count, self.state.score
        );
        true
    }

    /// Record a loss if the board is stuck. Returns the resulting lost state.
    pub fn check_game_over(&mut self) -> bool {
        if self.state.status == GameStatus::Lost {
            return true;
        }
        if !self.is_game_over() {
            return false;
        }
        self.state.status = GameStatus::Lost;
        info!(
            "game over after {} moves, score {}",
            self.state.move_count, self.state.score
        );
        true
    }

    /// Run one full turn: move, then spawn and status checks if it changed
    pub fn play_turn(&mut self, direction: Direction) -> TurnOutcome {
        let result = self.apply_move(direction);
        if !result.changed {
            return TurnOutcome {
                result,
                spawned: None,
                won_now: false,
                lost: self.state.status == GameStatus::Lost,
            };
        }

        let spawned = self.spawn_tile();
        let won_now = self.check_win();
        let lost = self.check_game_over();

        TurnOutcome {
            result,
            spawned,
            won_now,
            lost,
        }
    }

    /// Whether moving toward `direction` would change the board
    pub fn can_move(&self, direction: Direction) -> bool {
        let mut probe = self.state.board;
        probe.slide(direction).changed
    }

    /// Directions that would change the board, in `Direction::ALL` order
    pub fn available_moves(&self) -> ArrayVec<Direction, 4> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.can_move(d))
            .collect()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn best_score(&self) -> u32 {
        self.state.best_score
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot without allocating
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.state.board.to_rows();
        out.score = self.state.score;
        out.best_score = self.state.best_score;
        out.status = self.state.status;
        out.won = self.state.won;
        out.move_count = self.state.move_count;
        out.episode_id = self.episode_id;
        out.max_rank = self.state.board.max_letter().map_or(0, Letter::rank);
    }
}
