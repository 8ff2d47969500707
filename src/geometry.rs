// =============================================================================
// GEOMETRY.RS - Grid coordinates and facing
//
// Everything on the map lives on integer tile coordinates:
// - Position (the cell an entity occupies)
// - Direction (facing, and the one-cell step it implies)
// - Chebyshev distance (the "talk range" test)
// =============================================================================

use serde::{Deserialize, Serialize};

/// A cell on the tile grid. `x` grows to the right, `y` grows downward.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`. May be off the grid; callers
    /// bounds-check through the grid.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// Chessboard distance to `other`.
    pub fn chebyshev(self, other: Position) -> i32 {
        distance_chebyshev(self.x, self.y, other.x, other.y)
    }
}

/// Facing of a sprite. Screen-space: `Up` is toward row 0.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed resolution order used when several movement keys are held.
    pub const PRIORITY: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// One-cell offset `(dx, dy)` for this facing.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Calculate Chebyshev distance between two points.
/// Also known as "chessboard distance" - a king's move distance
/// where diagonals count the same as orthogonals.
///
/// Use for: adjacency tests that include the diagonal neighbours.
#[inline]
pub fn distance_chebyshev(x1: i32, y1: i32, x2: i32, y2: i32) -> i32 {
    (x1 - x2).abs().max((y1 - y2).abs())
}
