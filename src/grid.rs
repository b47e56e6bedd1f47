use serde::{Deserialize, Serialize};

/// A cell coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Manhattan distance `|dx| + |dy|`
    pub fn manhattan(&self, other: &Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// True when `other` is exactly one step away along one axis
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.manhattan(other) == 1
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }
}

/// Largest supported side length
pub const MAX_GRID_SIZE: i32 = 1024;

/// Neighbor offsets in expansion order: left, right, up, down
pub const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Square occupancy grid with a fixed start and goal.
///
/// Cells are stored row-major (`id = x + y * size`); `true` means blocked.
/// The start and goal are never blocked. There is no way to change a cell
/// after construction; a new layout means a new `Grid`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: i32,
    cells: Vec<bool>,
    start: Position,
    goal: Position,
}

impl Grid {
    /// Create an open grid with start at `(0,0)` and goal at `(size-1,size-1)`
    pub fn new(size: i32) -> Self {
        Self::with_blocked(size, &[])
    }

    /// Create a grid with the default corner endpoints and the given blocked cells
    pub fn with_blocked(size: i32, blocked: &[Position]) -> Self {
        let size = size.clamp(0, MAX_GRID_SIZE);
        let start = Position::new(0, 0);
        let goal = Position::new(size - 1, size - 1);
        Self::with_endpoints(size, start, goal, blocked)
    }

    /// Create a grid with explicit endpoints.
    ///
    /// `size` is clamped to `0..=MAX_GRID_SIZE`. Out-of-bounds entries in
    /// `blocked` are ignored, and `start`/`goal` stay free even when listed.
    pub fn with_endpoints(size: i32, start: Position, goal: Position, blocked: &[Position]) -> Self {
        let size = size.clamp(0, MAX_GRID_SIZE);
        let side = size as usize;
        let mut grid = Grid {
            size,
            cells: vec![false; side * side],
            start,
            goal,
        };
        for &pos in blocked {
            if pos == start || pos == goal || !grid.in_bounds(pos.x, pos.y) {
                continue;
            }
            let id = grid.get_id(pos.x, pos.y) as usize;
            grid.cells[id] = true;
        }
        grid
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.size && y >= 0 && y < self.size
    }

    /// Check if a cell at (x, y) is walkable. Out of bounds is never free.
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && !self.cells[self.get_id(x, y) as usize]
    }

    pub fn is_free_at(&self, pos: Position) -> bool {
        self.is_free(pos.x, pos.y)
    }

    /// Check if an in-bounds cell holds an obstacle
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.cells[self.get_id(x, y) as usize]
    }

    /// Free 4-connected neighbors of `pos`, in [`NEIGHBOR_OFFSETS`] order
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dx, dy)| pos.offset(dx, dy))
            .filter(move |next| self.is_free_at(*next))
    }

    /// Convert (x, y) coordinates to cell ID
    pub fn get_id(&self, x: i32, y: i32) -> i32 {
        x + y * self.size
    }

    /// Convert cell ID to (x, y) coordinates
    pub fn get_coords(&self, id: i32) -> (i32, i32) {
        (id % self.size, id / self.size)
    }

    /// Every coordinate except the start and goal, row-major
    pub fn candidate_cells(size: i32, start: Position, goal: Position) -> Vec<Position> {
        let size = size.clamp(0, MAX_GRID_SIZE);
        (0..size)
            .flat_map(|y| (0..size).map(move |x| Position::new(x, y)))
            .filter(|pos| *pos != start && *pos != goal)
            .collect()
    }

    pub fn blocked_cells(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, blocked)| **blocked)
            .map(|(id, _)| {
                let (x, y) = self.get_coords(id as i32);
                Position::new(x, y)
            })
            .collect()
    }

    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|&&blocked| blocked).count()
    }

    /// Render the grid as glyph text.
    ///
    /// - s: start
    /// - g: goal
    /// - p: player (when away from the start)
    /// - o: path cell
    /// - ■: blocked cell
    /// - □: free cell
    pub fn to_text(&self, path: &[Position], player: Option<Position>) -> String {
        let mut result = String::new();

        for y in 0..self.size {
            for x in 0..self.size {
                let pos = Position::new(x, y);
                let symbol = if pos == self.start {
                    's'
                } else if pos == self.goal {
                    'g'
                } else if Some(pos) == player {
                    'p'
                } else if self.is_blocked(x, y) {
                    '■'
                } else if path.contains(&pos) {
                    'o'
                } else {
                    '□'
                };
                result.push(symbol);
            }
            result.push('\n');
        }

        result
    }
}
