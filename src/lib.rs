pub mod action_log;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod game;
pub mod generator;
pub mod grid;
pub mod pathfinding;

pub use action_log::{Action, ActionLog};
pub use config::Config;
pub use difficulty::Difficulty;
pub use error::{MazeError, MazeResult};
pub use game::{Direction, Game, GameSettings, Session};
pub use generator::{Generation, MazeGenerator};
pub use grid::{Grid, Position};
pub use pathfinding::Algorithm;
