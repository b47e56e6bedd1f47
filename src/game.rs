use crate::action_log::{Action, ActionLog};
use crate::config::Config;
use crate::difficulty::Difficulty;
use crate::error::{MazeError, MazeResult};
use crate::generator::{Generation, MazeGenerator};
use crate::grid::{Grid, Position, MAX_GRID_SIZE};
use crate::pathfinding::Algorithm;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// One-cell movement intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Level and session state read by the presentation layer
#[derive(Debug, Clone)]
pub struct Session {
    pub level: u32,
    pub steps_left: u32,
    pub algorithm: Algorithm,
    pub show_path: bool,
    pub won: bool,
    pub lost: bool,
    pub player: Position,
    pub grid: Grid,
    /// Path currently on display; empty while the preview is off
    pub path: Vec<Position>,
    /// Path found when the current maze was validated
    pub solution: Vec<Position>,
    /// The current maze is the open-grid fallback
    pub fallback: bool,
}

impl Session {
    fn new(size: i32, algorithm: Algorithm, show_path: bool) -> Self {
        let grid = Grid::new(size);
        Session {
            level: 1,
            steps_left: 0,
            algorithm,
            show_path,
            won: false,
            lost: false,
            player: grid.start(),
            grid,
            path: Vec::new(),
            solution: Vec::new(),
            fallback: false,
        }
    }

    pub fn goal(&self) -> Position {
        self.grid.goal()
    }

    pub fn is_over(&self) -> bool {
        self.won || self.lost
    }
}

/// Construction parameters for [`Game`]
#[derive(Debug, Clone)]
pub struct GameSettings {
    pub size: i32,
    pub difficulty: Difficulty,
    pub algorithm: Algorithm,
    pub show_path: bool,
    pub trace_generation: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            size: 12,
            difficulty: Difficulty::default(),
            algorithm: Algorithm::default(),
            show_path: false,
            trace_generation: false,
        }
    }
}

impl GameSettings {
    pub fn from_config(config: &Config) -> Self {
        GameSettings {
            size: config.grid.size,
            difficulty: config.difficulty.clone(),
            algorithm: config.game.algorithm,
            show_path: config.game.show_path,
            trace_generation: config.logging.trace_generation,
        }
    }
}

/// Game controller: owns the session, the RNG and the action log
pub struct Game<R = StdRng> {
    size: i32,
    difficulty: Difficulty,
    generator: MazeGenerator,
    rng: R,
    session: Session,
    log: ActionLog,
}

impl Game<StdRng> {
    /// Build from configuration, seeding from `game.seed` or from entropy
    pub fn from_config(config: &Config) -> MazeResult<Self> {
        let rng = match config.game.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Game::new(GameSettings::from_config(config), rng)
    }

    pub fn with_seed(settings: GameSettings, seed: u64) -> MazeResult<Self> {
        Game::new(settings, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Validate the settings and generate the level 1 maze
    pub fn new(settings: GameSettings, rng: R) -> MazeResult<Self> {
        if !(2..=MAX_GRID_SIZE).contains(&settings.size) {
            return Err(MazeError::InvalidGridSize {
                size: settings.size,
                min: 2,
                max: MAX_GRID_SIZE,
            });
        }
        if settings.difficulty.min_steps == 0 {
            return Err(MazeError::InvalidParameter(
                "min_steps must be at least 1".to_string(),
            ));
        }

        let generator = MazeGenerator::new(
            settings.difficulty.max_attempts,
            settings.trace_generation,
        );
        let mut game = Game {
            size: settings.size,
            difficulty: settings.difficulty,
            generator,
            rng,
            session: Session::new(settings.size, settings.algorithm, settings.show_path),
            log: ActionLog::new(),
        };
        game.regenerate();
        Ok(game)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn grid(&self) -> &Grid {
        &self.session.grid
    }

    pub fn path(&self) -> &[Position] {
        &self.session.path
    }

    /// Path to paint; nothing while the preview is off
    pub fn displayed_path(&self) -> &[Position] {
        if self.session.show_path {
            &self.session.path
        } else {
            &[]
        }
    }

    pub fn player(&self) -> Position {
        self.session.player
    }

    pub fn goal(&self) -> Position {
        self.session.goal()
    }

    pub fn level(&self) -> u32 {
        self.session.level
    }

    pub fn steps_left(&self) -> u32 {
        self.session.steps_left
    }

    pub fn algorithm(&self) -> Algorithm {
        self.session.algorithm
    }

    pub fn algorithm_name(&self) -> &'static str {
        self.session.algorithm.name()
    }

    pub fn show_path(&self) -> bool {
        self.session.show_path
    }

    pub fn is_won(&self) -> bool {
        self.session.won
    }

    pub fn is_lost(&self) -> bool {
        self.session.lost
    }

    pub fn is_fallback(&self) -> bool {
        self.session.fallback
    }

    pub fn action_log(&self) -> &ActionLog {
        &self.log
    }

    /// Try to step one cell. Refused when the game is over or the target is
    /// outside the grid or blocked; the budget only drops on a real step.
    pub fn move_player(&mut self, direction: Direction) -> bool {
        let moved = self.try_step(direction);
        self.log.log(Action::Move { direction, moved });

        if moved && self.session.lost {
            self.log.log(Action::Lost {
                level: self.session.level,
            });
        }
        moved
    }

    fn try_step(&mut self, direction: Direction) -> bool {
        let session = &mut self.session;
        if session.is_over() {
            return false;
        }

        let (dx, dy) = direction.delta();
        let target = session.player.offset(dx, dy);
        if !session.grid.is_free_at(target) {
            return false;
        }

        session.player = target;
        session.steps_left = session.steps_left.saturating_sub(1);
        if session.steps_left == 0 {
            session.lost = true;
        }
        if session.show_path {
            self.refresh_preview();
        }
        true
    }

    /// Advance when the player stands on the goal and the game is still running.
    /// Returns true when a new level was generated.
    pub fn update(&mut self) -> bool {
        if !self.session.is_over() && self.session.player == self.session.goal() {
            self.advance_level();
            return true;
        }
        false
    }

    pub fn advance_level(&mut self) {
        self.session.level += 1;
        self.log.log(Action::LevelAdvanced {
            level: self.session.level,
        });
        self.regenerate();
    }

    /// Back to level 1 with a fresh maze
    pub fn restart(&mut self) {
        self.session.level = 1;
        self.log.log(Action::Restart);
        self.regenerate();
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.session.algorithm = algorithm;
        self.log.log(Action::SelectAlgorithm { algorithm });
        if self.session.show_path {
            self.refresh_preview();
        }
    }

    /// Select by display name; unknown names leave the selection unchanged
    pub fn set_algorithm_by_name(&mut self, name: &str) -> bool {
        match Algorithm::from_name(name) {
            Some(algorithm) => {
                self.set_algorithm(algorithm);
                true
            }
            None => false,
        }
    }

    pub fn toggle_show_path(&mut self, show: bool) {
        self.session.show_path = show;
        if show {
            self.log.log(Action::ShowPath);
            self.refresh_preview();
        } else {
            self.log.log(Action::HidePath);
            self.session.path.clear();
        }
    }

    /// Shortest remaining path from the player's current cell
    fn refresh_preview(&mut self) {
        let session = &mut self.session;
        session.path = session
            .algorithm
            .search(&session.grid, session.player, session.grid.goal());
    }

    /// Replace the maze for the current level and reset the player
    fn regenerate(&mut self) {
        let level = self.session.level;
        let obstacles = self.difficulty.obstacle_count(level, self.size);
        let start = Position::new(0, 0);
        let goal = Position::new(self.size - 1, self.size - 1);

        let generation = match self.generator.generate(
            self.size,
            obstacles,
            start,
            goal,
            self.session.algorithm,
            &mut self.rng,
        ) {
            Ok(generation) => generation,
            Err(e) => {
                eprintln!("Warning: maze generation rejected its inputs: {}", e);
                Generation::Fallback {
                    grid: Grid::with_endpoints(self.size, start, goal, &[]),
                    attempts: 0,
                }
            }
        };

        let attempts = generation.attempts();
        let fallback = generation.is_fallback();
        let (grid, solution) = generation.into_parts();

        let session = &mut self.session;
        session.player = grid.start();
        session.grid = grid;
        session.fallback = fallback;
        session.lost = false;

        if fallback {
            session.won = true;
            session.steps_left = self.difficulty.fallback_steps;
            session.path = Vec::new();
        } else {
            session.steps_left = self.difficulty.step_budget(level);
            // The goal must be reached with at least one step left, so a
            // path of more cells than the budget cannot be walked
            if solution.len() > session.steps_left as usize {
                session.won = true;
                session.path = solution.clone();
            } else {
                session.won = false;
                session.path = if session.show_path {
                    solution.clone()
                } else {
                    Vec::new()
                };
            }
        }
        session.solution = solution;

        self.log.log(Action::MazeGenerated {
            level,
            attempts,
            fallback,
            path_len: session.solution.len(),
        });
        if session.won {
            self.log.log(Action::Won { level });
        }
    }
}
