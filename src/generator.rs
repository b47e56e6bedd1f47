use crate::error::{MazeError, MazeResult};
use crate::grid::{Grid, Position, MAX_GRID_SIZE};
use crate::pathfinding::Algorithm;
use rand::seq::SliceRandom;
use rand::Rng;

/// Attempt ceiling for random resampling before falling back
pub const MAX_ATTEMPTS: u32 = 50;

/// Result of a generation call
#[derive(Debug, Clone, PartialEq)]
pub enum Generation {
    /// A random layout that the chosen strategy could solve
    Solved {
        grid: Grid,
        path: Vec<Position>,
        attempts: u32,
    },
    /// Every attempt was unsolvable; the grid is fully open and carries no path
    Fallback { grid: Grid, attempts: u32 },
}

impl Generation {
    pub fn grid(&self) -> &Grid {
        match self {
            Generation::Solved { grid, .. } | Generation::Fallback { grid, .. } => grid,
        }
    }

    /// Validation path from start to goal; empty for the fallback
    pub fn path(&self) -> &[Position] {
        match self {
            Generation::Solved { path, .. } => path,
            Generation::Fallback { .. } => &[],
        }
    }

    pub fn attempts(&self) -> u32 {
        match self {
            Generation::Solved { attempts, .. } | Generation::Fallback { attempts, .. } => *attempts,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Generation::Fallback { .. })
    }

    pub fn into_parts(self) -> (Grid, Vec<Position>) {
        match self {
            Generation::Solved { grid, path, .. } => (grid, path),
            Generation::Fallback { grid, .. } => (grid, Vec::new()),
        }
    }
}

/// Random obstacle placement with solvability check
#[derive(Debug, Clone)]
pub struct MazeGenerator {
    pub max_attempts: u32,
    /// Print one line per attempt
    pub trace: bool,
}

impl Default for MazeGenerator {
    fn default() -> Self {
        MazeGenerator {
            max_attempts: MAX_ATTEMPTS,
            trace: false,
        }
    }
}

impl MazeGenerator {
    pub fn new(max_attempts: u32, trace: bool) -> Self {
        MazeGenerator { max_attempts, trace }
    }

    /// Largest obstacle count that leaves the endpoints free
    pub fn max_obstacles(size: i32, start: Position, goal: Position) -> usize {
        Grid::candidate_cells(size, start, goal).len()
    }

    /// Sample layouts until `algorithm` finds a path from `start` to `goal`.
    ///
    /// Each attempt shuffles every non-endpoint cell and blocks the first
    /// `obstacle_count` of them. The first solvable layout is returned together
    /// with the path that proved it solvable.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        size: i32,
        obstacle_count: usize,
        start: Position,
        goal: Position,
        algorithm: Algorithm,
        rng: &mut R,
    ) -> MazeResult<Generation> {
        if !(1..=MAX_GRID_SIZE).contains(&size) {
            return Err(MazeError::InvalidGridSize {
                size,
                min: 1,
                max: MAX_GRID_SIZE,
            });
        }
        let bounds = Grid::new(size);
        if !bounds.in_bounds(start.x, start.y) || !bounds.in_bounds(goal.x, goal.y) {
            return Err(MazeError::InvalidParameter(format!(
                "endpoints ({},{}) and ({},{}) must lie inside a {}x{} grid",
                start.x, start.y, goal.x, goal.y, size, size
            )));
        }

        let mut candidates = Grid::candidate_cells(size, start, goal);
        if obstacle_count > candidates.len() {
            return Err(MazeError::TooManyObstacles {
                count: obstacle_count,
                max: candidates.len(),
            });
        }

        for attempt in 1..=self.max_attempts {
            candidates.shuffle(rng);
            let grid = Grid::with_endpoints(size, start, goal, &candidates[..obstacle_count]);
            let path = algorithm.search(&grid, start, goal);

            if self.trace {
                println!(
                    "[generate] attempt {}/{}: {} obstacles, {} -> {}",
                    attempt,
                    self.max_attempts,
                    obstacle_count,
                    algorithm,
                    if path.is_empty() {
                        "unsolvable".to_string()
                    } else {
                        format!("{} cells", path.len())
                    }
                );
            }

            if !path.is_empty() {
                return Ok(Generation::Solved {
                    grid,
                    path,
                    attempts: attempt,
                });
            }
        }

        if self.trace {
            println!(
                "[generate] no solvable layout after {} attempts, using open grid",
                self.max_attempts
            );
        }

        Ok(Generation::Fallback {
            grid: Grid::with_endpoints(size, start, goal, &[]),
            attempts: self.max_attempts,
        })
    }
}

/// Generate with the default attempt ceiling and corner endpoints
pub fn generate<R: Rng + ?Sized>(
    size: i32,
    obstacle_count: usize,
    algorithm: Algorithm,
    rng: &mut R,
) -> MazeResult<Generation> {
    let start = Position::new(0, 0);
    let goal = Position::new(size - 1, size - 1);
    MazeGenerator::default().generate(size, obstacle_count, start, goal, algorithm, rng)
}
