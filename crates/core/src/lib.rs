//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds every rule of the letter-sliding puzzle. It has **no**
//! dependencies on rendering, input devices or storage, making it:
//!
//! - **Deterministic**: Same random source produces identical games
//! - **Testable**: Scripted randomness via [`SequenceRng`]
//! - **Portable**: Usable from a terminal, a GUI, a server or a headless bot
//! - **Allocation-free** on the move path (`arrayvec` for line buffers and diffs)
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid, line collapse and sliding
//! - [`engine`]: [`BoardEngine`] with game state, spawning, win and loss detection
//! - [`rng`]: Injectable random source and its implementations
//! - [`best_score`]: Best-score storage seam
//! - [`snapshot`]: Serializable plain-data view of a game
//! - [`tracking`]: Stable tile ids for animating renderers
//!
//! # Game Rules
//!
//! - Each move slides all tiles toward one edge; equal neighbours merge once
//!   into the next letter (`A A A` becomes `B A`, never `C`)
//! - A merge scores `2^rank` of the new letter (`B` = 4, `C` = 8, ...)
//! - After a move that changed the board, one tile spawns: `A` 90%, `B` 10%
//! - Reaching `Z` wins (reported once; play may continue)
//! - A full board with no equal neighbours is lost
//!
//! # Example
//!
//! ```
//! use letter_slide_core::{BoardEngine, MemoryBestScore, SimpleRng};
//! use letter_slide_core::types::{Direction, GameStatus};
//!
//! let mut engine = BoardEngine::new(SimpleRng::new(12345), MemoryBestScore::default());
//! assert_eq!(engine.board().occupied_count(), 2);
//!
//! for direction in Direction::ALL {
//!     let outcome = engine.play_turn(direction);
//!     if outcome.result.changed {
//!         assert!(outcome.spawned.is_some());
//!     }
//! }
//!
//! assert_ne!(engine.status(), GameStatus::Lost);
//! ```

pub mod best_score;
pub mod board;
pub mod engine;
pub mod rng;
pub mod snapshot;
pub mod tracking;

pub use letter_slide_types as types;

// Re-export commonly used types for convenience
pub use best_score::{BestScoreStore, MemoryBestScore};
pub use board::{collapse_line, Board, LineCollapse, MergedTile, MoveResult, TileMove};
pub use engine::{BoardEngine, GameState, SpawnedTile, TurnOutcome};
pub use rng::{RandRng, SequenceRng, SimpleRng, TileRng};
pub use snapshot::GameSnapshot;
pub use tracking::{TileId, TileTracker, TrackedMove, TrackedSlide};
