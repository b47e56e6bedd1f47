mod common;

use common::assert_valid_path;
use mazerunner::generator::{generate, MAX_ATTEMPTS};
use mazerunner::{Algorithm, Difficulty, Generation, MazeGenerator, Position};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_level_one_succeeds_for_many_seeds() {
    let difficulty = Difficulty::default();
    let obstacles = difficulty.obstacle_count(1, 12);
    assert_eq!(obstacles, 22);

    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let generation = generate(12, obstacles, Algorithm::AStar, &mut rng).unwrap();
        assert!(!generation.is_fallback(), "seed {} fell back", seed);
        assert!(generation.attempts() <= MAX_ATTEMPTS);

        let grid = generation.grid();
        assert_eq!(grid.blocked_count(), obstacles);
        assert!(grid.is_free(0, 0));
        assert!(grid.is_free(11, 11));
        assert_valid_path(grid, generation.path(), grid.start(), grid.goal());
    }
}

#[test]
fn test_every_strategy_validates_layouts() {
    for algorithm in Algorithm::ALL {
        let mut rng = StdRng::seed_from_u64(11);
        let generation = generate(10, 30, algorithm, &mut rng).unwrap();
        let grid = generation.grid();

        match &generation {
            Generation::Solved { path, .. } => assert_valid_path(grid, path, grid.start(), grid.goal()),
            Generation::Fallback { .. } => assert_eq!(grid.blocked_count(), 0),
        }
    }
}

#[test]
fn test_generated_grids_across_levels_keep_endpoints_free() {
    let difficulty = Difficulty::default();
    let mut rng = StdRng::seed_from_u64(314);

    for level in 1..=60 {
        let obstacles = difficulty.obstacle_count(level, 12);
        let generation = generate(12, obstacles, Algorithm::Bfs, &mut rng).unwrap();
        let grid = generation.grid();

        assert!(grid.is_free_at(grid.start()));
        assert!(grid.is_free_at(grid.goal()));
        if generation.is_fallback() {
            assert!(generation.path().is_empty());
            assert_eq!(grid.blocked_count(), 0);
        } else {
            assert_eq!(grid.blocked_count(), obstacles);
            assert!(!generation.path().is_empty());
        }
    }
}

#[test]
fn test_saturated_board_always_falls_back() {
    // Every non-endpoint cell blocked leaves no route on any board larger than 1x1
    for size in 2..6 {
        let max = MazeGenerator::max_obstacles(size, Position::new(0, 0), Position::new(size - 1, size - 1));
        let mut rng = StdRng::seed_from_u64(size as u64);
        let generation = generate(size, max, Algorithm::AStar, &mut rng).unwrap();

        assert!(generation.is_fallback(), "size {}", size);
        assert_eq!(generation.attempts(), MAX_ATTEMPTS);
        assert_eq!(generation.grid().blocked_count(), 0);
    }
}

#[test]
fn test_custom_endpoints_are_excluded_from_obstacles() {
    let start = Position::new(2, 0);
    let goal = Position::new(0, 4);
    let generator = MazeGenerator::new(10, false);
    let mut rng = StdRng::seed_from_u64(8);

    let generation = generator
        .generate(5, 8, start, goal, Algorithm::Dijkstra, &mut rng)
        .unwrap();
    let grid = generation.grid();

    assert_eq!(grid.start(), start);
    assert_eq!(grid.goal(), goal);
    assert!(grid.is_free_at(start));
    assert!(grid.is_free_at(goal));
    if !generation.is_fallback() {
        assert_valid_path(grid, generation.path(), start, goal);
    }
}
