//! Board module - manages the 4x4 letter grid
//!
//! The board is a 4x4 grid where each cell is empty or holds a letter tile.
//! Uses a flat array for cache locality and zero-allocation moves.
//! Coordinates: (row, col) where row ranges 0..3 (top to bottom), col ranges 0..3
//! (left to right).
//!
//! A move walks each line orthogonal to the direction in travel order, so
//! index 0 of a line is always the edge the tiles slide toward. Collapsing a
//! line and writing it back at the same positions handles all four directions
//! with one algorithm.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{
    Cell, Direction, Letter, Position, BOARD_SIZE, CELL_COUNT, MAX_MERGES_PER_MOVE,
};

/// A tile that slid or merged during a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileMove {
    pub from: Position,
    pub to: Position,
    /// Letter the tile carried before the move
    pub letter: Letter,
    /// True when this tile was one of a merging pair
    pub merged: bool,
}

/// A cell produced by merging two tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergedTile {
    pub position: Position,
    pub letter: Letter,
}

/// Outcome of sliding the board in one direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub direction: Direction,
    /// Whether any cell differs from its pre-move value
    pub changed: bool,
    /// Sum of `2^rank` over the letters produced by merges
    pub score_delta: u32,
    pub merged: ArrayVec<MergedTile, MAX_MERGES_PER_MOVE>,
    /// Tiles that changed position or took part in a merge, in line order
    pub moves: ArrayVec<TileMove, CELL_COUNT>,
}

impl MoveResult {
    fn unchanged(direction: Direction) -> Self {
        Self {
            direction,
            changed: false,
            score_delta: 0,
            merged: ArrayVec::new(),
            moves: ArrayVec::new(),
        }
    }
}

/// One collapsed line, in travel order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCollapse {
    pub cells: [Cell; BOARD_SIZE],
    pub score: u32,
    /// For each output slot, the input indices that landed there
    sources: [ArrayVec<usize, 2>; BOARD_SIZE],
}

/// Collapse a line given in travel order (index 0 is the destination edge).
///
/// Non-empty cells are compacted toward index 0, then scanned once: an equal
/// adjacent pair becomes one promoted tile and the scan skips past both, so a
/// freshly merged tile never merges again in the same move. Two `Z` tiles are
/// left unmerged.
///
/// ```
/// use letter_slide_core::board::collapse_line;
/// use letter_slide_core::types::Letter;
///
/// let a = Some(Letter::A);
/// let out = collapse_line([a, a, a, None]);
/// assert_eq!(out.cells, [Some(Letter::B), a, None, None]);
/// assert_eq!(out.score, 4);
/// ```
pub fn collapse_line(line: [Cell; BOARD_SIZE]) -> LineCollapse {
    let tiles: ArrayVec<(usize, Letter), BOARD_SIZE> = line
        .iter()
        .enumerate()
        .filter_map(|(i, cell)| cell.map(|letter| (i, letter)))
        .collect();

    let mut cells = [None; BOARD_SIZE];
    let mut sources: [ArrayVec<usize, 2>; BOARD_SIZE] = Default::default();
    let mut score = 0u32;
    let mut out = 0usize;
    let mut i = 0usize;

    while i < tiles.len() {
        let (src, letter) = tiles[i];
        let promoted = tiles
            .get(i + 1)
            .filter(|(_, next)| *next == letter)
            .and_then(|_| letter.promoted());

        match promoted {
            Some(next) => {
                cells[out] = Some(next);
                sources[out].push(src);
                sources[out].push(tiles[i + 1].0);
                score += next.value();
                i += 2;
            }
            None => {
                cells[out] = Some(letter);
                sources[out].push(src);
                i += 1;
            }
        }
        out += 1;
    }

    LineCollapse {
        cells,
        score,
        sources,
    }
}

/// The 4x4 game board using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * SIZE + col)
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: u8, col: u8) -> Option<usize> {
        if row as usize >= BOARD_SIZE || col as usize >= BOARD_SIZE {
            return None;
        }
        Some(row as usize * BOARD_SIZE + col as usize)
    }

    /// Build a board from letter ranks, 0 meaning empty.
    ///
    /// Returns `None` if any rank is above 26.
    pub fn from_rows(rows: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Option<Self> {
        let mut board = Self::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, &rank) in row.iter().enumerate() {
                if rank == 0 {
                    continue;
                }
                board.cells[r * BOARD_SIZE + c] = Some(Letter::new(rank)?);
            }
        }
        Some(board)
    }

    /// Letter ranks per cell, 0 for empty
    pub fn to_rows(&self) -> [[u8; BOARD_SIZE]; BOARD_SIZE] {
        let mut rows = [[0u8; BOARD_SIZE]; BOARD_SIZE];
        for (i, cell) in self.cells.iter().enumerate() {
            rows[i / BOARD_SIZE][i % BOARD_SIZE] = cell.map_or(0, Letter::rank);
        }
        rows
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: u8, col: u8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: u8, col: u8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn at(&self, pos: Position) -> Cell {
        self.get(pos.row, pos.col).flatten()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn clear(&mut self) {
        self.cells = [None; CELL_COUNT];
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    pub fn occupied_count(&self) -> usize {
        CELL_COUNT - self.empty_count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Empty positions in row-major order
    pub fn empty_positions(&self) -> ArrayVec<Position, CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| Position::new((i / BOARD_SIZE) as u8, (i % BOARD_SIZE) as u8))
            .collect()
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.cells.contains(&Some(letter))
    }

    /// Highest letter on the board
    pub fn max_letter(&self) -> Option<Letter> {
        self.cells.iter().flatten().copied().max()
    }

    /// True if two horizontally or vertically adjacent cells hold the same letter
    pub fn has_adjacent_pair(&self) -> bool {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let current = self.cells[row * BOARD_SIZE + col];
                if current.is_none() {
                    continue;
                }
                if col + 1 < BOARD_SIZE && current == self.cells[row * BOARD_SIZE + col + 1] {
                    return true;
                }
                if row + 1 < BOARD_SIZE && current == self.cells[(row + 1) * BOARD_SIZE + col] {
                    return true;
                }
            }
        }
        false
    }

    /// Positions of line `line` in travel order for `direction`
    pub fn line_positions(direction: Direction, line: usize) -> [Position; BOARD_SIZE] {
        let fixed = line as u8;
        std::array::from_fn(|k| {
            let step = if direction.is_reversed() {
                (BOARD_SIZE - 1 - k) as u8
            } else {
                k as u8
            };
            if direction.is_horizontal() {
                Position::new(fixed, step)
            } else {
                Position::new(step, fixed)
            }
        })
    }

    /// Slide and merge every line toward `direction`.
    ///
    /// The board is mutated in place. When nothing can move the board is left
    /// untouched and the result reports `changed == false`.
    pub fn slide(&mut self, direction: Direction) -> MoveResult {
        let mut result = MoveResult::unchanged(direction);

        for line in 0..BOARD_SIZE {
            let positions = Self::line_positions(direction, line);
            let before = positions.map(|pos| self.at(pos));
            let collapsed = collapse_line(before);

            if collapsed.cells == before {
                continue;
            }
            result.changed = true;
            result.score_delta += collapsed.score;

            for (slot, srcs) in collapsed.sources.iter().enumerate() {
                let to = positions[slot];
                let merged = srcs.len() == 2;
                for &src in srcs {
                    let from = positions[src];
                    if from == to && !merged {
                        continue;
                    }
                    if let Some(letter) = before[src] {
                        result.moves.push(TileMove {
                            from,
                            to,
                            letter,
                            merged,
                        });
                    }
                }
                if merged {
                    if let Some(letter) = collapsed.cells[slot] {
                        result.merged.push(MergedTile {
                            position: to,
                            letter,
                        });
                    }
                }
            }

            for (pos, cell) in positions.iter().zip(collapsed.cells) {
                self.set(pos.row, pos.col, cell);
            }
        }

        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match self.cells[row * BOARD_SIZE + col] {
                    Some(letter) => write!(f, "{}", letter)?,
                    None => f.write_str(".")?,
                }
            }
            if row + 1 < BOARD_SIZE {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}
