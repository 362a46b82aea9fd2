//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the puzzle.
//! All types are plain data with no game logic, so they can be shared by the
//! engine, by hosts that render the board, and by anything that serializes it.
//!
//! # Board Dimensions
//!
//! - **Size**: 4 rows x 4 columns
//! - **Rows**: indexed 0 (top) to 3 (bottom)
//! - **Columns**: indexed 0 (left) to 3 (right)
//!
//! # Letters
//!
//! Tiles carry a letter rank from 1 (`A`) to 26 (`Z`). Merging two equal
//! letters promotes them to the next letter and scores `2^rank` of the result:
//!
//! | Letter | Rank | Merge score |
//! |--------|------|-------------|
//! | A | 1 | 2 |
//! | B | 2 | 4 |
//! | C | 3 | 8 |
//! | ... | ... | ... |
//! | Z | 26 | 67108864 |
//!
//! # Examples
//!
//! ```
//! use letter_slide_types::{Direction, Letter, BOARD_SIZE};
//!
//! let a = Letter::A;
//! assert_eq!(a.as_char(), 'A');
//! assert_eq!(a.promoted(), Some(Letter::B));
//! assert_eq!(Letter::B.value(), 4);
//!
//! assert_eq!(Direction::from_str("left"), Some(Direction::Left));
//! assert_eq!(Direction::Up.as_str(), "up");
//!
//! assert_eq!(BOARD_SIZE, 4);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Board side length (4 rows, 4 columns)
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Highest letter rank (`Z`)
pub const MAX_RANK: u8 = 26;

/// Number of tiles placed by a fresh game
pub const INITIAL_TILES: usize = 2;

/// Spawn odds for an `A` tile (9 in 10); the remainder spawns a `B`.
pub const SPAWN_A_NUMERATOR: u32 = 9;

/// Denominator of the spawn odds
pub const SPAWN_A_DENOMINATOR: u32 = 10;

/// Maximum merges a single move can perform (two per line)
pub const MAX_MERGES_PER_MOVE: usize = 2 * BOARD_SIZE;


/// A letter tile rank, 1 (`A`) through 26 (`Z`)
///
/// The rank is guaranteed to be in range, so every `Letter` maps to a
/// printable uppercase character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Letter(u8);

impl Letter {
    pub const A: Letter = Letter(1);
    pub const B: Letter = Letter(2);
    pub const Z: Letter = Letter(MAX_RANK);

    /// Create a letter from its rank, `None` outside `1..=26`
    ///
    /// # Examples
    ///
    /// ```
    /// use letter_slide_types::Letter;
    ///
    /// assert_eq!(Letter::new(1), Some(Letter::A));
    /// assert_eq!(Letter::new(0), None);
    /// ```
    pub const fn new(rank: u8) -> Option<Self> {
        if rank >= 1 && rank <= MAX_RANK {
            Some(Letter(rank))
        } else {
            None
        }
    }

    pub const fn rank(self) -> u8 {
        self.0
    }

    /// Parse a letter from a character (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Letter::new(upper as u8 - b'A' + 1)
        } else {
            None
        }
    }

    pub fn as_char(self) -> char {
        (b'A' + self.0 - 1) as char
    }

    /// The letter two of these merge into, `None` for `Z`
    pub const fn promoted(self) -> Option<Self> {
        Letter::new(self.0 + 1)
    }

    /// Score awarded when a merge produces this letter (`2^rank`)
    pub const fn value(self) -> u32 {
        1u32 << self.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<u8> for Letter {
    type Error = String;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        Letter::new(rank).ok_or_else(|| format!("letter rank out of range: {}", rank))
    }
}

impl From<Letter> for u8 {
    fn from(letter: Letter) -> Self {
        letter.0
    }
}

/// A cell on the board
///
/// - `None`: Empty cell
/// - `Some(Letter)`: Cell holding a tile
pub type Cell = Option<Letter>;

/// Move directions
///
/// Tiles travel toward the named edge. Lines orthogonal to the direction are
/// rows for `Left`/`Right` and columns for `Up`/`Down`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions in declaration order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Parse a single-letter move code (`U`, `D`, `L`, `R`, case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// True for moves along a row
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True when travel runs toward the high index (right or bottom edge)
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A board coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Game lifecycle status
///
/// - **Playing**: Moves are being accepted
/// - **Won**: A `Z` tile has appeared (play may continue)
/// - **Lost**: Board is full with no adjacent equal letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}
