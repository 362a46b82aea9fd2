//! Tile identity tracking for renderers.
//!
//! The engine only knows letters in cells. Animating a tile across a move
//! needs a stable identity per tile, which this module derives by replaying a
//! [`MoveResult`]'s tile moves over an id grid. Nothing here feeds back into
//! the engine.

use arrayvec::ArrayVec;

use crate::board::{Board, MoveResult};
use crate::engine::SpawnedTile;
use crate::types::{Position, BOARD_SIZE, CELL_COUNT, MAX_MERGES_PER_MOVE};

/// Stable identifier for one tile instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u32);

/// A tracked tile's path during a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedSlide {
    pub id: TileId,
    pub from: Position,
    pub to: Position,
}

/// Id-level view of one move
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackedMove {
    pub slides: ArrayVec<TrackedSlide, CELL_COUNT>,
    /// Ids that merged into another tile and no longer exist
    pub retired: ArrayVec<TileId, MAX_MERGES_PER_MOVE>,
    /// Ids that survived a merge (now showing the promoted letter)
    pub promoted: ArrayVec<TileId, MAX_MERGES_PER_MOVE>,
}

/// Per-cell tile ids mirroring a board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileTracker {
    ids: [[Option<TileId>; BOARD_SIZE]; BOARD_SIZE],
    next_id: u32,
}

impl TileTracker {
    /// Assign fresh ids to every occupied cell, row-major
    pub fn from_board(board: &Board) -> Self {
        let mut tracker = Self {
            ids: [[None; BOARD_SIZE]; BOARD_SIZE],
            next_id: 0,
        };
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if let Some(Some(_)) = board.get(row as u8, col as u8) {
                    tracker.ids[row][col] = Some(tracker.allocate());
                }
            }
        }
        tracker
    }

    fn allocate(&mut self) -> TileId {
        let id = TileId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn id_at(&self, pos: Position) -> Option<TileId> {
        self.ids
            .get(pos.row as usize)
            .and_then(|row| row.get(pos.col as usize))
            .copied()
            .flatten()
    }

    /// Carry ids along a move.
    ///
    /// Within a merging pair the tile listed first (closest to the destination
    /// edge) keeps its id and the other is retired.
    pub fn observe_move(&mut self, result: &MoveResult) -> TrackedMove {
        let mut tracked = TrackedMove::default();
        if !result.changed {
            return tracked;
        }

        let before = self.ids;
        for mv in &result.moves {
            self.ids[mv.from.row as usize][mv.from.col as usize] = None;
        }

        for mv in &result.moves {
            let Some(id) = before[mv.from.row as usize][mv.from.col as usize] else {
                continue;
            };
            tracked.slides.push(TrackedSlide {
                id,
                from: mv.from,
                to: mv.to,
            });

            let slot = &mut self.ids[mv.to.row as usize][mv.to.col as usize];
            match *slot {
                None => *slot = Some(id),
                Some(survivor) => {
                    tracked.retired.push(id);
                    tracked.promoted.push(survivor);
                }
            }
        }

        tracked
    }

    /// Give a newly spawned tile its id
    pub fn observe_spawn(&mut self, spawned: &SpawnedTile) -> TileId {
        let id = self.allocate();
        self.ids[spawned.position.row as usize][spawned.position.col as usize] = Some(id);
        id
    }

    /// Number of live ids
    pub fn len(&self) -> usize {
        self.ids.iter().flatten().filter(|id| id.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
