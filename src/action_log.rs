use crate::error::MazeResult;
use crate::game::Direction;
use crate::pathfinding::Algorithm;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;

/// Session events recorded by the game controller
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Movement intent and whether the step was taken
    Move { direction: Direction, moved: bool },
    /// Path preview switched on
    ShowPath,
    /// Path preview switched off
    HidePath,
    SelectAlgorithm { algorithm: Algorithm },
    /// Back to level 1
    Restart,
    /// Player reached the goal
    LevelAdvanced { level: u32 },
    /// A new maze was committed
    MazeGenerated {
        level: u32,
        attempts: u32,
        fallback: bool,
        path_len: usize,
    },
    Won { level: u32 },
    Lost { level: u32 },
}

/// Logged action with timestamp
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggedAction {
    /// Milliseconds since start
    pub timestamp_ms: u64,
    pub action: Action,
}

/// Action logger
#[derive(Debug)]
pub struct ActionLog {
    start_time: Instant,
    actions: Vec<LoggedAction>,
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionLog {
    pub fn new() -> Self {
        ActionLog {
            start_time: Instant::now(),
            actions: Vec::new(),
        }
    }

    /// Log an action with current timestamp
    pub fn log(&mut self, action: Action) {
        let timestamp_ms = self.start_time.elapsed().as_millis() as u64;
        self.actions.push(LoggedAction {
            timestamp_ms,
            action,
        });
    }

    /// Get all logged actions
    pub fn get_actions(&self) -> &[LoggedAction] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn to_json(&self) -> MazeResult<String> {
        Ok(serde_json::to_string_pretty(&self.actions)?)
    }

    /// Save log to JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> MazeResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Print log to console
    pub fn print(&self) {
        println!("\n=== Action Log ({} events) ===", self.actions.len());
        for (i, logged) in self.actions.iter().enumerate() {
            println!("[{:6}ms] #{:3} {:?}", logged.timestamp_ms, i + 1, logged.action);
        }
        println!("=== End of Log ===\n");
    }

    /// Get summary statistics
    pub fn summary(&self) -> String {
        let mut steps_taken = 0;
        let mut steps_refused = 0;
        let mut previews = 0;
        let mut algorithm_switches = 0;
        let mut mazes = 0;
        let mut fallbacks = 0;
        let mut highest_level = 1;
        let mut wins = 0;
        let mut losses = 0;

        for logged in &self.actions {
            match &logged.action {
                Action::Move { moved: true, .. } => steps_taken += 1,
                Action::Move { moved: false, .. } => steps_refused += 1,
                Action::ShowPath => previews += 1,
                Action::SelectAlgorithm { .. } => algorithm_switches += 1,
                Action::MazeGenerated { level, fallback, .. } => {
                    mazes += 1;
                    if *fallback {
                        fallbacks += 1;
                    }
                    highest_level = highest_level.max(*level);
                }
                Action::Won { .. } => wins += 1,
                Action::Lost { .. } => losses += 1,
                _ => {}
            }
        }

        let duration = self.actions.last().map(|last| last.timestamp_ms).unwrap_or(0);

        format!(
            "Session Duration: {}ms\n\
             Total Events: {}\n\
             Moves: {} taken, {} refused\n\
             Preview: {} times shown, {} algorithm switches\n\
             Mazes: {} generated ({} fallbacks), highest level {}\n\
             Outcomes: {} won, {} lost",
            duration,
            self.actions.len(),
            steps_taken,
            steps_refused,
            previews,
            algorithm_switches,
            mazes,
            fallbacks,
            highest_level,
            wins,
            losses
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_moves_and_mazes() {
        let mut log = ActionLog::new();
        log.log(Action::MazeGenerated { level: 1, attempts: 1, fallback: false, path_len: 23 });
        log.log(Action::Move { direction: Direction::Right, moved: true });
        log.log(Action::Move { direction: Direction::Up, moved: false });
        log.log(Action::ShowPath);
        log.log(Action::MazeGenerated { level: 2, attempts: 50, fallback: true, path_len: 0 });

        let summary = log.summary();
        assert!(summary.contains("Total Events: 5"));
        assert!(summary.contains("Moves: 1 taken, 1 refused"));
        assert!(summary.contains("Mazes: 2 generated (1 fallbacks), highest level 2"));
    }

    #[test]
    fn test_json_lists_every_action() {
        let mut log = ActionLog::new();
        log.log(Action::SelectAlgorithm { algorithm: Algorithm::Bfs });
        log.log(Action::Restart);

        let json = log.to_json().unwrap();
        let parsed: Vec<LoggedAction> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].action, Action::SelectAlgorithm { algorithm: Algorithm::Bfs });
        assert!(json.contains("\"BFS\""));
    }

    #[test]
    fn test_exit_dump_prints_and_saves() {
        let mut log = ActionLog::new();
        log.log(Action::Won { level: 3 });
        log.print();

        let path = std::env::temp_dir().join("mazerunner_exit_dump.json");
        log.save_to_file(&path).unwrap();
        let saved: Vec<LoggedAction> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(saved[0].action, Action::Won { level: 3 });
    }
}
