#![allow(dead_code)]

use mazerunner::{Grid, Position};
use rand::Rng;
use std::fs;
use std::path::Path;

/// Parse a maze in glyph format
/// Format:
/// - s: start
/// - g: goal
/// - ■: blocked cell
/// - □: free cell
/// - o: free cell on a shortest path (informational)
///
/// followed by a trailer line `expected: <cells>` or `expected: none`.
pub fn parse_maze(contents: &str) -> Result<(Grid, Option<usize>), Box<dyn std::error::Error>> {
    let all_non_empty: Vec<&str> = contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();

    if all_non_empty.is_empty() {
        return Err("No non-empty lines found in maze file".into());
    }

    let size = all_non_empty[0].chars().count();
    let valid_chars = ['s', 'g', '■', '□', 'o'];

    // Collect only valid grid rows (same width and valid characters)
    let mut grid_lines = Vec::new();
    for line in &all_non_empty {
        if line.chars().count() != size || line.chars().any(|c| !valid_chars.contains(&c)) {
            break;
        }
        grid_lines.push(*line);
    }

    if grid_lines.len() != size {
        return Err(format!("Maze must be square, got {}x{}", size, grid_lines.len()).into());
    }

    let mut blocked = Vec::new();
    let mut start = None;
    let mut goal = None;

    for (y, line) in grid_lines.iter().enumerate() {
        for (x, ch) in line.chars().enumerate() {
            let pos = Position::new(x as i32, y as i32);
            match ch {
                's' => start = Some(pos),
                'g' => goal = Some(pos),
                '■' => blocked.push(pos),
                _ => {}
            }
        }
    }

    let start = start.ok_or("No start position 's' found in maze file")?;
    let goal = goal.ok_or("No goal position 'g' found in maze file")?;

    let trailer = all_non_empty[grid_lines.len()..]
        .iter()
        .find_map(|line| line.trim().strip_prefix("expected:"))
        .ok_or("Missing 'expected:' line")?
        .trim();
    let expected = match trailer {
        "none" => None,
        cells => Some(cells.parse::<usize>()?),
    };

    let grid = Grid::with_endpoints(size as i32, start, goal, &blocked);
    Ok((grid, expected))
}

pub fn load_maze(path: &Path) -> Result<(Grid, Option<usize>), Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    parse_maze(&contents)
}

/// Mirror a grid and its endpoints
fn mirror(grid: &Grid, flip_x: bool, flip_y: bool) -> Grid {
    let n = grid.size();
    let map = |pos: Position| {
        Position::new(
            if flip_x { n - 1 - pos.x } else { pos.x },
            if flip_y { n - 1 - pos.y } else { pos.y },
        )
    };
    let blocked: Vec<Position> = grid.blocked_cells().into_iter().map(map).collect();
    Grid::with_endpoints(n, map(grid.start()), map(grid.goal()), &blocked)
}

/// Flip horizontally (mirror left-right)
pub fn flip_horizontal(grid: &Grid) -> Grid {
    mirror(grid, true, false)
}

/// Flip vertically (mirror top-bottom)
pub fn flip_vertical(grid: &Grid) -> Grid {
    mirror(grid, false, true)
}

/// Flip both horizontally and vertically
pub fn flip_both(grid: &Grid) -> Grid {
    mirror(grid, true, true)
}

/// The original grid and its three mirror images
pub fn variants(grid: &Grid) -> Vec<(&'static str, Grid)> {
    vec![
        ("original", grid.clone()),
        ("h_flip", flip_horizontal(grid)),
        ("v_flip", flip_vertical(grid)),
        ("hv_flip", flip_both(grid)),
    ]
}

/// Panic unless `path` runs from `start` to `goal` over free, adjacent cells
pub fn assert_valid_path(grid: &Grid, path: &[Position], start: Position, goal: Position) {
    assert_eq!(path.first(), Some(&start), "path must begin at the start");
    assert_eq!(path.last(), Some(&goal), "path must end at the goal");
    for pos in path {
        assert!(grid.is_free_at(*pos), "path crosses blocked cell ({},{})", pos.x, pos.y);
    }
    for pair in path.windows(2) {
        assert!(
            pair[0].is_adjacent(&pair[1]),
            "({},{}) -> ({},{}) is not a unit step",
            pair[0].x,
            pair[0].y,
            pair[1].x,
            pair[1].y
        );
    }
}

/// Random grid with roughly `density` of the non-endpoint cells blocked
pub fn random_grid<R: Rng>(rng: &mut R, size: i32, density: f64) -> Grid {
    let blocked: Vec<Position> = (0..size)
        .flat_map(|y| (0..size).map(move |x| Position::new(x, y)))
        .filter(|_| rng.gen_bool(density))
        .collect();
    Grid::with_blocked(size, &blocked)
}

/// Render a grid with its path for failure messages
pub fn visualize(grid: &Grid, path: &[Position]) -> String {
    format!("\n{}", grid.to_text(path, None))
}
