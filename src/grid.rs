use crate::geometry::Position;

/// Width of the village map in tiles.
pub const MAP_WIDTH: usize = 16;
/// Height of the village map in tiles.
pub const MAP_HEIGHT: usize = 12;

/// Obstacle layout of the village (1 = impassable, 0 = open).
pub const VILLAGE_OBSTACLES: [[u8; MAP_WIDTH]; MAP_HEIGHT] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 1],
    [1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// Static obstacle map. Immutable once built; `true` cells block movement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObstacleGrid {
    width: usize,
    height: usize,
    blocked: Vec<bool>,
}

impl ObstacleGrid {
    /// Build a grid from row-major rows of 0/1 cells. Rows shorter than the
    /// first row are padded with open cells.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut blocked = vec![false; width * height];
        for (y, row) in rows.iter().enumerate() {
            for (x, &cell) in row.as_ref().iter().take(width).enumerate() {
                blocked[y * width + x] = cell != 0;
            }
        }
        Self { width, height, blocked }
    }

    /// The village map the game ships with.
    pub fn village() -> Self {
        Self::from_rows(&VILLAGE_OBSTACLES)
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Out-of-bounds cells count as blocked.
    pub fn is_blocked(&self, pos: Position) -> bool {
        if !self.in_bounds(pos) {
            return true;
        }
        self.blocked[pos.y as usize * self.width + pos.x as usize]
    }

    /// In bounds and not an obstacle.
    pub fn is_passable(&self, pos: Position) -> bool {
        !self.is_blocked(pos)
    }
}
