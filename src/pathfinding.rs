use crate::grid::{Grid, Position};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;

// Trace logging flag - set to true to enable debug output
const TRACE_PATHFINDING: bool = false;

/// Shortest-path strategy used for maze validation and the path preview
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[default]
    #[serde(rename = "A*")]
    AStar,
    #[serde(rename = "BFS")]
    Bfs,
    #[serde(rename = "Dijkstra")]
    Dijkstra,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::AStar, Algorithm::Bfs, Algorithm::Dijkstra];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::AStar => "A*",
            Algorithm::Bfs => "BFS",
            Algorithm::Dijkstra => "Dijkstra",
        }
    }

    pub fn from_name(name: &str) -> Option<Algorithm> {
        Algorithm::ALL.into_iter().find(|alg| alg.name() == name)
    }

    /// Run this strategy from `start` to `goal`
    pub fn search(&self, grid: &Grid, start: Position, goal: Position) -> Vec<Position> {
        let path = match self {
            Algorithm::AStar => a_star(grid, start, goal),
            Algorithm::Bfs => bfs(grid, start, goal),
            Algorithm::Dijkstra => dijkstra(grid, start, goal),
        };

        if TRACE_PATHFINDING {
            println!(
                "[{}] ({},{}) -> ({},{}): {}",
                self.name(),
                start.x,
                start.y,
                goal.x,
                goal.y,
                format_path(&path)
            );
        }

        path
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::from_name(s).ok_or_else(|| format!("Unknown algorithm: {}", s))
    }
}

/// Search by display name. An unknown name yields the empty path.
pub fn search_by_name(name: &str, grid: &Grid, start: Position, goal: Position) -> Vec<Position> {
    match Algorithm::from_name(name) {
        Some(algorithm) => algorithm.search(grid, start, goal),
        None => Vec::new(),
    }
}

/// A frontier entry for the priority-queue searches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    /// Ordering key: accumulated cost for Dijkstra, cost + heuristic for A*
    priority: i32,
    cost: i32,
    position: Position,
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.cost.cmp(&self.cost))
            // Tie-breaker: use position for deterministic ordering
            .then_with(|| other.position.cmp(&self.position))
    }
}

/// Endpoints must be free cells, and a zero-length search is the single cell
fn trivial_result(grid: &Grid, start: Position, goal: Position) -> Option<Vec<Position>> {
    if !grid.is_free_at(start) || !grid.is_free_at(goal) {
        return Some(Vec::new());
    }
    if start == goal {
        return Some(vec![start]);
    }
    None
}

/// Breadth-first search. Cells are marked visited when enqueued.
pub fn bfs(grid: &Grid, start: Position, goal: Position) -> Vec<Position> {
    if let Some(path) = trivial_result(grid, start, goal) {
        return path;
    }

    let mut queue = VecDeque::from([start]);
    let mut visited: HashSet<Position> = HashSet::from([start]);
    let mut came_from: HashMap<Position, Position> = HashMap::new();

    while let Some(current) = queue.pop_front() {
        if current == goal {
            break;
        }

        for next in grid.neighbors(current) {
            if visited.insert(next) {
                came_from.insert(next, current);
                queue.push_back(next);
            }
        }
    }

    reconstruct_path(&came_from, start, goal)
}

/// Uniform-cost search with lazy deletion of stale heap entries
pub fn dijkstra(grid: &Grid, start: Position, goal: Position) -> Vec<Position> {
    best_first(grid, start, goal, |_| 0)
}

/// A* with the Manhattan distance heuristic
pub fn a_star(grid: &Grid, start: Position, goal: Position) -> Vec<Position> {
    best_first(grid, start, goal, |pos| pos.manhattan(&goal))
}

/// Shared priority-queue search. `heuristic` must be admissible for the
/// first pop of `goal` to be a shortest path.
fn best_first<H>(grid: &Grid, start: Position, goal: Position, heuristic: H) -> Vec<Position>
where
    H: Fn(&Position) -> i32,
{
    if let Some(path) = trivial_result(grid, start, goal) {
        return path;
    }

    let mut heap: BinaryHeap<QueueEntry> = BinaryHeap::new();
    let mut best_cost: HashMap<Position, i32> = HashMap::from([(start, 0)]);
    let mut came_from: HashMap<Position, Position> = HashMap::new();

    heap.push(QueueEntry {
        priority: heuristic(&start),
        cost: 0,
        position: start,
    });

    while let Some(entry) = heap.pop() {
        let current = entry.position;
        if current == goal {
            break;
        }

        // Skip if already settled with a better cost
        if let Some(&best) = best_cost.get(&current) {
            if entry.cost > best {
                continue;
            }
        }

        let next_cost = entry.cost + 1;
        for next in grid.neighbors(current) {
            let improves = match best_cost.get(&next) {
                Some(&known) => next_cost < known,
                None => true,
            };

            if improves {
                best_cost.insert(next, next_cost);
                came_from.insert(next, current);
                heap.push(QueueEntry {
                    priority: next_cost + heuristic(&next),
                    cost: next_cost,
                    position: next,
                });
            }
        }
    }

    reconstruct_path(&came_from, start, goal)
}

/// Walk predecessors back from `goal` and return the path in start-to-goal order.
///
/// The start cell has no entry in `came_from`. When `start == goal` the path is
/// the single cell; an unreached goal gives the empty path.
pub fn reconstruct_path(
    came_from: &HashMap<Position, Position>,
    start: Position,
    goal: Position,
) -> Vec<Position> {
    if start == goal {
        return vec![start];
    }
    if !came_from.contains_key(&goal) {
        return Vec::new();
    }

    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&previous) = came_from.get(&current) {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}

/// Number of moves along a path (cells minus one)
pub fn path_steps(path: &[Position]) -> usize {
    path.len().saturating_sub(1)
}

/// True when every cell is free and consecutive cells are one unit step apart
pub fn is_valid_path(grid: &Grid, path: &[Position]) -> bool {
    path.iter().all(|pos| grid.is_free_at(*pos))
        && path.windows(2).all(|pair| pair[0].is_adjacent(&pair[1]))
}

/// Format path for display
pub fn format_path(path: &[Position]) -> String {
    if path.is_empty() {
        return "No path".to_string();
    }

    let mut result = String::new();
    for (i, pos) in path.iter().enumerate() {
        if i > 0 {
            result.push_str(" -> ");
        }
        result.push_str(&format!("({},{})", pos.x, pos.y));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall_at_column(size: i32, column: i32) -> Grid {
        let wall: Vec<Position> = (0..size).map(|y| Position::new(column, y)).collect();
        Grid::with_blocked(size, &wall)
    }

    #[test]
    fn test_open_four_by_four_has_seven_cells() {
        let grid = Grid::new(4);
        for algorithm in Algorithm::ALL {
            let path = algorithm.search(&grid, grid.start(), grid.goal());
            assert_eq!(path.len(), 7, "{} path length", algorithm);
            assert_eq!(path.first(), Some(&Position::new(0, 0)));
            assert_eq!(path.last(), Some(&Position::new(3, 3)));
            assert!(is_valid_path(&grid, &path));
        }
    }

    #[test]
    fn test_full_wall_is_unreachable() {
        let grid = wall_at_column(5, 2);
        for algorithm in Algorithm::ALL {
            assert!(algorithm.search(&grid, grid.start(), grid.goal()).is_empty());
        }
    }

    #[test]
    fn test_start_equals_goal_is_single_cell() {
        let grid = Grid::new(3);
        let here = Position::new(1, 1);
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.search(&grid, here, here), vec![here]);
        }
    }

    #[test]
    fn test_blocked_or_outside_endpoints_yield_empty() {
        let grid = Grid::with_blocked(3, &[Position::new(1, 1)]);
        for algorithm in Algorithm::ALL {
            assert!(algorithm.search(&grid, Position::new(1, 1), grid.goal()).is_empty());
            assert!(algorithm.search(&grid, grid.start(), Position::new(5, 5)).is_empty());
        }
    }

    #[test]
    fn test_unknown_name_yields_empty() {
        let grid = Grid::new(3);
        assert!(search_by_name("Greedy", &grid, grid.start(), grid.goal()).is_empty());
        assert_eq!(search_by_name("BFS", &grid, grid.start(), grid.goal()).len(), 5);
    }

    #[test]
    fn test_names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
        assert!("a*".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_reconstruct_without_goal_entry_is_empty() {
        let came_from = HashMap::from([(Position::new(1, 0), Position::new(0, 0))]);
        let path = reconstruct_path(&came_from, Position::new(0, 0), Position::new(2, 0));
        assert!(path.is_empty());
    }

    #[test]
    fn test_reconstruct_walks_back_to_start() {
        let came_from = HashMap::from([
            (Position::new(1, 0), Position::new(0, 0)),
            (Position::new(2, 0), Position::new(1, 0)),
        ]);
        let path = reconstruct_path(&came_from, Position::new(0, 0), Position::new(2, 0));
        assert_eq!(
            path,
            vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]
        );
    }

    #[test]
    fn test_queue_entry_pops_lowest_priority_then_lowest_cost() {
        let mut heap = BinaryHeap::new();
        heap.push(QueueEntry { priority: 6, cost: 4, position: Position::new(0, 0) });
        heap.push(QueueEntry { priority: 6, cost: 2, position: Position::new(1, 0) });
        heap.push(QueueEntry { priority: 8, cost: 0, position: Position::new(2, 0) });

        assert_eq!(heap.pop().map(|e| e.cost), Some(2));
        assert_eq!(heap.pop().map(|e| e.cost), Some(4));
        assert_eq!(heap.pop().map(|e| e.priority), Some(8));
    }

    #[test]
    fn test_format_path_output() {
        assert_eq!(format_path(&[]), "No path");
        assert_eq!(
            format_path(&[Position::new(0, 0), Position::new(0, 1)]),
            "(0,0) -> (0,1)"
        );
    }
}
